//! Employee directory state and derivations behind the HR dashboard.
//!
//! [`EmployeeStore`] owns the fetched directory, the filtered view and the
//! bookmark set. [`filter`] and [`analytics`] are pure functions over
//! employee slices and never touch the store on their own.

pub mod analytics;
pub mod assign;
pub mod error;
pub mod filter;
pub mod source;
pub mod store;

pub use analytics::{AnalyticsReport, BookmarkTrendPoint, DepartmentStats};
pub use assign::{AttributeAssigner, RandomAssigner};
pub use error::FetchError;
pub use filter::{SearchFilters, SearchState};
pub use source::{EmployeeSource, HttpEmployeeSource, StaticEmployeeSource};
pub use store::EmployeeStore;
