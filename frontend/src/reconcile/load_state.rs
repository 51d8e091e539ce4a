use crate::api::ApiError;

/// Phase of a single fetched resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    /// A cancelled fetch belongs to a disposed view and leaves the state loading.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(ApiError::Cancelled) => LoadState::Loading,
            Err(error) => LoadState::Failed(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_results_are_not_surfaced() {
        let state: LoadState<u8> = LoadState::from_result(Err(ApiError::Cancelled));
        assert!(state.is_loading());

        let state: LoadState<u8> = LoadState::from_result(Err(ApiError::Unauthorized));
        assert_eq!(state.error(), Some(&ApiError::Unauthorized));

        assert_eq!(LoadState::from_result(Ok(3u8)).ready(), Some(&3));
    }
}
