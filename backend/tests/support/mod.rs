#![allow(dead_code)]
use std::{env, sync::OnceLock, time::Duration};

use chrono::Utc;
use portal_backend::{
    models::user::{User, UserRole},
    utils::password::hash_password,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Serialises tests that truncate shared tables.
pub async fn integration_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().await
}

/// Migrated pool for `TEST_DATABASE_URL`, or `None` when no database is configured.
pub async fn test_pool() -> Option<PgPool> {
    let Ok(url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return None;
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&url)
        .await
        .expect("connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    sqlx::query("TRUNCATE attendance, submit_assignment, student_results, lecturer_modules, events, users")
        .execute(&pool)
        .await
        .expect("truncate tables");
    Some(pool)
}

pub async fn seed_user(pool: &PgPool, role: UserRole, first_name: &str, last_name: &str) -> User {
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: format!("{}_{}@campus.test", first_name.to_lowercase(), Uuid::new_v4()),
        password_hash: hash_password("password123").expect("hash password"),
        role,
        first_name: first_name.into(),
        last_name: last_name.into(),
        date_of_birth: None,
        gender: None,
        address: None,
        contact_number: Some("0770000000".into()),
        department: Some("Computing".into()),
        profile_image: None,
        created_at: now,
        updated_at: now,
    };
    sqlx::query(
        "INSERT INTO users (id, email, password_hash, role, first_name, last_name, \
         contact_number, department, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.contact_number)
    .bind(&user.department)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await
    .expect("insert user");
    user
}

pub async fn seed_result(pool: &PgPool, student: &User, module: &str, batch: &str, results: &str) {
    sqlx::query(
        "INSERT INTO student_results (student_user_id, module, batch, results) VALUES ($1, $2, $3, $4)",
    )
    .bind(&student.id)
    .bind(module)
    .bind(batch)
    .bind(results)
    .execute(pool)
    .await
    .expect("insert student result");
}

pub async fn seed_lecturer_module(pool: &PgPool, lecturer: &User, module: &str) {
    sqlx::query("INSERT INTO lecturer_modules (lecturer_user_id, module) VALUES ($1, $2)")
        .bind(&lecturer.id)
        .bind(module)
        .execute(pool)
        .await
        .expect("insert lecturer module");
}
