//! Portal accounts, roles and the profile payloads built from them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
/// Database representation of a portal account.
pub struct User {
    pub id: String,
    pub email: String,
    /// Argon2 hash of the account password.
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub department: Option<String>,
    /// Path under the upload mount, e.g. `/uploads/abc.png`.
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Lecturer,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Lecturer => "lecturer",
            UserRole::Student => "student",
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "lecturer" => Ok(UserRole::Lecturer),
            "student" => Ok(UserRole::Student),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Profile as returned by `/api/admin/profile` and `/api/lecturer/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub department: Option<String>,
    pub profile_image: Option<String>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            date_of_birth: user.date_of_birth,
            gender: user.gender.clone(),
            address: user.address.clone(),
            contact_number: user.contact_number.clone(),
            department: user.department.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}

/// Fields accepted by the multipart profile update. Absent parts leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 32))]
    pub gender: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 32))]
    pub contact_number: Option<String>,
    pub profile_image: Option<String>,
}

impl ProfileUpdate {
    pub fn apply_to(&self, user: &mut User) {
        if let Some(value) = &self.first_name {
            user.first_name = value.clone();
        }
        if let Some(value) = &self.last_name {
            user.last_name = value.clone();
        }
        if self.date_of_birth.is_some() {
            user.date_of_birth = self.date_of_birth;
        }
        if let Some(value) = &self.gender {
            user.gender = Some(value.clone());
        }
        if let Some(value) = &self.address {
            user.address = Some(value.clone());
        }
        if let Some(value) = &self.contact_number {
            user.contact_number = Some(value.clone());
        }
        if let Some(value) = &self.profile_image {
            user.profile_image = Some(value.clone());
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: ProfileResponse,
}
