//! Model layer - records and view state
//!
//! - `CollegeRecord` - one row of the static data set
//! - `ListView` - filter/sort/paginate controller over all records
//! - `ModalStack` - modal overlay management

pub mod college;
pub mod list_view;
pub mod modal;
pub mod sort;

pub use college::{CollegeId, CollegeRecord};
pub use list_view::ListView;
pub use sort::{SortConfig, SortKey, SortPolicy};
