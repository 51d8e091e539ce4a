use crate::{
    api::{ApiClient, ApiError, Profile, ProfileUpdate, Role},
    pages::shared::profile_or_cached,
};

pub async fn load_lecturer_profile(api: &ApiClient) -> Result<Profile, ApiError> {
    profile_or_cached(api.get_lecturer_profile().await, api.session(), Role::Lecturer)
}

/// Submit the form and refresh the cached snapshot with what the server kept.
pub async fn save_profile(api: &ApiClient, update: ProfileUpdate) -> Result<Profile, ApiError> {
    let saved = api.update_lecturer_profile(update).await?;
    let snapshot = match api.session().cached_profile_for(Role::Lecturer) {
        Some(cached) => cached.merged_with(saved.clone()),
        None => saved.clone(),
    };
    if let Err(err) = api.session().cache_profile(&snapshot) {
        log::warn!("could not cache updated profile: {}", err);
    }
    Ok(saved)
}
