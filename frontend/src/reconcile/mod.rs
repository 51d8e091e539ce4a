//! Local view state: editable copies with a confirmed baseline, searchable
//! lists, date ordering and the load phases views move through.

pub mod editable;
pub mod filtered_list;
pub mod image;
pub mod list_state;
pub mod load_state;
pub mod sort;

pub use editable::Editable;
pub use filtered_list::{FilteredList, Searchable};
pub use image::{ImageFallback, PendingFile, ProfileImage, DEFAULT_AVATAR};
pub use list_state::{ListPhase, ListState};
pub use load_state::LoadState;
pub use sort::{sort_by_date, Dated, SortOrder};
