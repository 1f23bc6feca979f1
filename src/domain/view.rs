//! View parameters and the pure list projection.
//!
//! The [`ViewState`] lives alongside the collection but is independent of
//! it: changing it never mutates employee records. [`project`] derives the
//! displayed list from scratch on every call and never mutates its input.

use std::{cmp::Ordering, str::FromStr};

use thiserror::Error;

use super::Employee;

/// Parameters controlling the derived employee list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text search term, matched case-insensitively against name,
    /// position and email. Empty matches everyone.
    pub search: String,
    /// Department restriction.
    pub department: DepartmentFilter,
    /// Field the list is ordered by.
    pub sort_by: SortField,
    /// Direction of the ordering.
    pub order: SortOrder,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: DepartmentFilter::All,
            sort_by: SortField::Name,
            order: SortOrder::Asc,
        }
    }
}

impl ViewState {
    /// Compares two employees under the current sort settings.
    ///
    /// Descending order reverses the final comparison result.
    #[must_use]
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = self.sort_by.compare(a, b);
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Department restriction applied to the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    /// No restriction; every employee passes.
    #[default]
    All,
    /// Only employees whose department matches exactly.
    Named(String),
}

impl DepartmentFilter {
    /// Whether an employee in `department` passes the filter.
    #[must_use]
    pub fn matches(&self, department: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == department,
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = std::convert::Infallible;

    /// Parses a filter value. The literal `all` (any case) is the sentinel
    /// meaning "no restriction"; anything else is an exact department name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

/// Fields the employee list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Order by name (default).
    #[default]
    Name,
    /// Order by job title.
    Position,
    /// Order by department.
    Department,
    /// Order numerically by salary.
    Salary,
    /// Order chronologically by join date; records without one sort first.
    JoinDate,
}

impl SortField {
    fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::Position => a.position().cmp(b.position()),
            Self::Department => a.department().cmp(b.department()),
            Self::Salary => a.salary().cmp(&b.salary()),
            Self::JoinDate => a.join_date().cmp(&b.join_date()),
        }
    }
}

/// Error returned when a sort field label is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort field {0:?} (expected name, position, department, salary or join-date)")]
pub struct ParseSortFieldError(String);

impl FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "position" => Ok(Self::Position),
            "department" => Ok(Self::Department),
            "salary" => Ok(Self::Salary),
            "join-date" | "join_date" | "joindate" => Ok(Self::JoinDate),
            _ => Err(ParseSortFieldError(s.to_string())),
        }
    }
}

/// Direction of the list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Derives the displayed list from the collection and the view state.
///
/// Employees pass when the search term is a case-insensitive substring of
/// their name, position or email AND the department filter matches. The
/// survivors are ordered by the sort field; the sort is stable, so equal
/// keys keep their input order. A new sequence is returned; the source
/// collection is never mutated.
#[must_use]
pub fn project<'a>(employees: &'a [Employee], view: &ViewState) -> Vec<&'a Employee> {
    let needle = view.search.to_lowercase();

    let mut rows: Vec<&Employee> = employees
        .iter()
        .filter(|employee| {
            matches_search(employee, &needle) && view.department.matches(employee.department())
        })
        .collect();

    rows.sort_by(|a, b| view.compare(a, b));
    rows
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    employee.name().to_lowercase().contains(needle)
        || employee.position().to_lowercase().contains(needle)
        || employee.email().to_lowercase().contains(needle)
}
