use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::User;

const SELECT_COLUMNS: &str = "id, email, password_hash, role, first_name, last_name, date_of_birth, \
     gender, address, contact_number, department, profile_image, created_at, updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_id(&self, db: &PgPool, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, db: &PgPool, email: &str) -> Result<Option<User>, AppError>;

    /// Persist the editable profile columns of `user` and return the stored row.
    async fn update_profile(&self, db: &PgPool, user: &User) -> Result<User, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_id(&self, db: &PgPool, id: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", SELECT_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let query = format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
            SELECT_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    async fn update_profile(&self, db: &PgPool, user: &User) -> Result<User, AppError> {
        let query = format!(
            "UPDATE users SET first_name = $2, last_name = $3, date_of_birth = $4, gender = $5, \
             address = $6, contact_number = $7, profile_image = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, User>(&query)
            .bind(&user.id)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.date_of_birth)
            .bind(user.gender.as_deref())
            .bind(user.address.as_deref())
            .bind(user.contact_number.as_deref())
            .bind(user.profile_image.as_deref())
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        Ok(row)
    }
}
