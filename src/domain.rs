//! Domain models for the employee directory.
//!
//! This module contains the core domain types: the employee record and its
//! validated draft, and the view state used to derive the displayed list.

/// Employee record, draft, and field validation.
pub mod employee;
pub use employee::{Employee, EmployeeDraft, Field, ValidationError, KNOWN_DEPARTMENTS};

/// View state and the pure list projection.
pub mod view;
pub use view::{project, DepartmentFilter, SortField, SortOrder, ViewState};
