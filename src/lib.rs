//! In-Memory Employee Directory
//!
//! Employees are records held in a single in-memory collection, with pure
//! projections (filtered and sorted views, distinct departments, aggregate
//! stats) derived from it on every read. Nothing is persisted; a process
//! run is one session.

pub mod domain;
pub use domain::{
    DepartmentFilter, Employee, EmployeeDraft, Field, SortField, SortOrder, ValidationError,
    ViewState,
};

/// The employee collection and its mutation operations.
pub mod store;
pub use store::{Roster, Stats};
