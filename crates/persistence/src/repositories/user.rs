//! User repository for database operations.

use domain::models::User;
use sqlx::PgConnection;

use crate::entities::UserEntity;
use crate::error::StoreError;
use crate::metrics::QueryTimer;

/// Repository for app_user rows.
pub struct UserRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> UserRepository<'c> {
    /// Creates a repository on an open connection or transaction.
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a new user. The caller assigns `user.id` and hashes the password.
    ///
    /// A duplicate id or email yields [`StoreError::ConstraintViolation`].
    pub async fn add(&mut self, user: &User) -> Result<(), StoreError> {
        let timer = QueryTimer::new("add_user");
        let result = sqlx::query(
            r#"
            INSERT INTO app_user (id, name, email, password, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&mut *self.conn)
        .await;
        timer.record();
        result?;
        Ok(())
    }

    /// Find a user by email address.
    pub async fn find_by_email(&mut self, email: &str) -> Result<Option<UserEntity>, StoreError> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, password, created_at
            FROM app_user
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Find a user by ID.
    pub async fn find_by_id(&mut self, id: &str) -> Result<Option<UserEntity>, StoreError> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, password, created_at
            FROM app_user
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await;
        timer.record();
        Ok(result?)
    }

    /// Update name and email of an existing user.
    ///
    /// Returns [`StoreError::NotFound`] when no row matches `user.id`.
    pub async fn update(&mut self, user: &User) -> Result<(), StoreError> {
        let timer = QueryTimer::new("update_user");
        let result = sqlx::query(
            r#"
            UPDATE app_user
            SET name = $1, email = $2
            WHERE id = $3
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.id)
        .execute(&mut *self.conn)
        .await;
        timer.record();

        if result?.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
