use crate::{
    api::{ApiClient, ApiError, EventAnnouncement},
    reconcile::{sort_by_date, SortOrder},
};

/// Fetch announcements and order them by date.
pub async fn fetch_events(
    api: &ApiClient,
    order: SortOrder,
) -> Result<Vec<EventAnnouncement>, ApiError> {
    let mut events = api.get_events().await?;
    sort_by_date(&mut events, order);
    Ok(events)
}
