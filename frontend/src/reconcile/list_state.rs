use super::filtered_list::{FilteredList, Searchable};
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
}

/// A searchable list plus whether its first fetch has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub list: FilteredList<T>,
    pub phase: ListPhase,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            list: FilteredList::default(),
            phase: ListPhase::Loading,
        }
    }
}

impl<T: Searchable + Clone> ListState<T> {
    pub fn begin_loading(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// Fold a fetch result in. Failures keep the previous rows and only log.
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>, what: &str) {
        match result {
            Ok(rows) => {
                self.list.set_raw(rows);
                self.phase = ListPhase::Ready;
            }
            Err(ApiError::Cancelled) => {}
            Err(error) => {
                log::warn!("{} fetch failed: {}", what, error);
                self.phase = ListPhase::Ready;
            }
        }
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.list.set_term(term);
    }

    pub fn term(&self) -> &str {
        self.list.term()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }
}
