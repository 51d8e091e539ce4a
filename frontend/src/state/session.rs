//! Signed-in session: bearer token, its expiry and the cached profile snapshot.
//!
//! The session is an explicit value handed to every data-fetching
//! collaborator. Persistence and navigation go through [`KeyValueStore`] and
//! [`Navigator`] so the same code runs against `localStorage` in the browser
//! and in-memory doubles on the host.

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    api::{ApiError, Profile, Role},
    utils::{
        navigation::{default_navigator, Navigator},
        storage::{default_store, KeyValueStore},
    },
};

pub const TOKEN_KEY: &str = "token";
pub const TOKEN_EXPIRES_AT_KEY: &str = "token_expires_at";
pub const USER_KEY: &str = "user";
pub const LOGIN_ROUTE: &str = "/login";

/// Used when the login response does not state an expiry.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 12;

#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn KeyValueStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Session bound to the current target's storage and location.
    pub fn browser() -> Self {
        Self::new(default_store(), default_navigator())
    }

    /// The bearer token, provided it exists and has not expired.
    /// An expired token is cleared on the way out.
    pub fn credential(&self) -> Result<String, ApiError> {
        self.credential_at(Utc::now())
    }

    pub fn credential_at(&self, now: DateTime<Utc>) -> Result<String, ApiError> {
        let token = self
            .store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ApiError::MissingCredential)?;

        let expired = self
            .store
            .get(TOKEN_EXPIRES_AT_KEY)
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .is_some_and(|expires_at| expires_at.with_timezone(&Utc) <= now);
        if expired {
            log::info!("stored token expired; clearing session");
            self.clear();
            return Err(ApiError::MissingCredential);
        }
        Ok(token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential().is_ok()
    }

    pub fn start(
        &self,
        token: &str,
        expires_at: Option<DateTime<Utc>>,
        profile: &Profile,
    ) -> Result<(), String> {
        let expires_at =
            expires_at.unwrap_or_else(|| Utc::now() + Duration::hours(DEFAULT_TOKEN_TTL_HOURS));
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(TOKEN_EXPIRES_AT_KEY, &expires_at.to_rfc3339())?;
        self.cache_profile(profile)
    }

    pub fn cache_profile(&self, profile: &Profile) -> Result<(), String> {
        let json = serde_json::to_string(profile).map_err(|e| e.to_string())?;
        self.store.set(USER_KEY, &json)
    }

    pub fn cached_profile(&self) -> Option<Profile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("ignoring unreadable cached profile: {}", err);
                None
            }
        }
    }

    /// Cached snapshot, but only when it belongs to `role`.
    pub fn cached_profile_for(&self, role: Role) -> Option<Profile> {
        self.cached_profile()
            .filter(|profile| profile.role == role)
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, TOKEN_EXPIRES_AT_KEY, USER_KEY] {
            self.store.remove(key);
        }
    }

    pub fn navigate(&self, path: &str) {
        self.navigator.navigate(path);
    }

    /// Drop the session after the server rejected it and go to the login route.
    pub fn expire(&self) {
        self.clear();
        if self.navigator.current_path().as_deref() != Some(LOGIN_ROUTE) {
            self.navigator.navigate(LOGIN_ROUTE);
        }
    }
}
