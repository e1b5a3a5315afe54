use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::ports::AccountRepository;

/// Read-only account lookups against the platform's account table.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    tenant_id: i64,
    email: String,
    cpf: Option<String>,
    password_hash: String,
    is_active: bool,
    is_superuser: bool,
    requires_2fa: bool,
    must_reset_password: bool,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            tenant_id: row.tenant_id,
            email: row.email,
            cpf: row.cpf,
            password_hash: row.password_hash,
            is_active: row.is_active,
            is_superuser: row.is_superuser,
            requires_2fa: row.requires_2fa,
            must_reset_password: row.must_reset_password,
        }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>, AuthError> {
        // Matched verbatim against both login columns; uniqueness of email
        // and cpf guarantees at most one row.
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, tenant_id, email, cpf, password_hash, is_active, is_superuser,
                   requires_2fa, must_reset_password
            FROM accounts
            WHERE email = $1 OR cpf = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StoreUnavailable(e.to_string()))?;

        Ok(row.map(Account::from))
    }
}
