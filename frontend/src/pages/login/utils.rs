use crate::api::Role;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Enter your email address.".into());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".into());
    }
    if password.is_empty() {
        return Err("Enter your password.".into());
    }
    Ok(())
}

/// Where a freshly signed-in user lands.
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/reports",
        Role::Lecturer => "/lecturer/profile",
        Role::Student | Role::Unknown => "/",
    }
}
