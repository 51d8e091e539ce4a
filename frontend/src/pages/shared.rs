use crate::{
    api::{ApiError, Profile, Role},
    state::session::SessionContext,
};

/// Fall back to the cached snapshot when the live profile cannot be fetched.
/// The snapshot only counts when it was cached for the same role.
pub fn profile_or_cached(
    result: Result<Profile, ApiError>,
    session: &SessionContext,
    role: Role,
) -> Result<Profile, ApiError> {
    match result {
        Ok(profile) => Ok(profile),
        Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
        Err(error) => match session.cached_profile_for(role) {
            Some(cached) => {
                log::warn!("{} profile fetch failed ({}); using cached copy", role.as_str(), error);
                Ok(cached)
            }
            None => Err(error),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Success(String),
    Error(String),
}

/// Status line shown after a submit. `None` hides it.
pub type MessageState = Option<Message>;
