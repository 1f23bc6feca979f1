//! The in-memory employee collection.
//!
//! The [`Roster`] owns the collection exclusively: collaborators read
//! derived data and submit mutations through it, never touching records
//! directly. All mutations are synchronous and run to completion before
//! the next one is dispatched, so no locking is needed.

use tracing::debug;

use crate::domain::{
    employee::{Employee, EmployeeDraft, ValidationError},
    view::{project, ViewState},
};

/// The employee collection and its mutation operations.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
}

/// Aggregate figures over the full collection.
///
/// Recomputed from scratch on every read; always derived from the whole
/// collection, not the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of employees.
    pub employees: usize,
    /// Average salary, rounded to the nearest whole unit; 0 when the
    /// collection is empty.
    pub average_salary: u64,
    /// Number of distinct departments.
    pub departments: usize,
    /// Sum of all salaries.
    pub total_payroll: u64,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Creates a roster seeded with the three example records every
    /// session starts from.
    ///
    /// # Panics
    ///
    /// Panics if the built-in seed records fail validation, which would be
    /// a bug in the seed data itself.
    #[must_use]
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        for draft in seed_drafts() {
            roster.add(&draft).expect("seed records are valid");
        }
        roster
    }

    /// Validates a draft and appends it as a new record.
    ///
    /// The new record's id is one greater than the highest id currently in
    /// the collection (1 for an empty collection). Note that after a
    /// mid-collection delete this can reuse an id; safe while the store is
    /// single-session, but any persistent or multi-writer extension must
    /// switch to a monotonic counter.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] without touching the collection if a
    /// required field is empty or a typed field does not parse.
    pub fn add(&mut self, draft: &EmployeeDraft) -> Result<Employee, ValidationError> {
        let fields = draft.validate()?;

        let id = self
            .employees
            .iter()
            .map(Employee::id)
            .max()
            .unwrap_or(0)
            + 1;

        let employee = Employee::new(id, fields);
        debug!(id, name = employee.name(), "adding employee");
        self.employees.push(employee.clone());
        Ok(employee)
    }

    /// Validates a draft and wholly replaces the fields of the record with
    /// the given id. The id itself never changes.
    ///
    /// Returns `Ok(false)` as a silent no-op when no record has the id;
    /// this cannot happen through the provided front-ends but must not
    /// panic or insert when triggered externally.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] without touching the collection if
    /// the draft is invalid.
    pub fn update(&mut self, id: u32, draft: &EmployeeDraft) -> Result<bool, ValidationError> {
        let fields = draft.validate()?;

        let Some(slot) = self.employees.iter_mut().find(|e| e.id() == id) else {
            debug!(id, "update targeted an unknown id; ignoring");
            return Ok(false);
        };

        *slot = Employee::new(id, fields);
        debug!(id, "updated employee");
        Ok(true)
    }

    /// Removes the record with the given id.
    ///
    /// Returns `false` as a silent no-op when no record has the id. There
    /// are no cascading effects.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(index) = self.employees.iter().position(|e| e.id() == id) else {
            debug!(id, "remove targeted an unknown id; ignoring");
            return false;
        };

        self.employees.remove(index);
        debug!(id, "removed employee");
        true
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// The full collection, in insertion order.
    ///
    /// Insertion order is incidental; the collection has no ordering
    /// invariant.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The distinct departments currently present, in first-seen order.
    ///
    /// Derived from the collection on every call, so it tracks additions,
    /// removals and edits automatically.
    #[must_use]
    pub fn departments(&self) -> Vec<&str> {
        let mut departments = Vec::new();
        for employee in &self.employees {
            if !departments.contains(&employee.department()) {
                departments.push(employee.department());
            }
        }
        departments
    }

    /// Aggregate figures over the full collection.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let total_payroll: u64 = self.employees.iter().map(Employee::salary).sum();
        let count = self.employees.len() as u64;

        // Average rounded to the nearest unit; guard the empty division.
        let average_salary = if count == 0 {
            0
        } else {
            (total_payroll + count / 2) / count
        };

        Stats {
            employees: self.employees.len(),
            average_salary,
            departments: self.departments().len(),
            total_payroll,
        }
    }

    /// Derives the filtered, sorted list for the given view state.
    #[must_use]
    pub fn project(&self, view: &ViewState) -> Vec<&Employee> {
        project(&self.employees, view)
    }
}

fn seed_drafts() -> [EmployeeDraft; 3] {
    [
        EmployeeDraft {
            name: "Alice Johnson".to_string(),
            position: "Senior Developer".to_string(),
            department: "Engineering".to_string(),
            salary: "85000".to_string(),
            email: "alice@company.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            join_date: "2022-03-15".to_string(),
        },
        EmployeeDraft {
            name: "Bob Smith".to_string(),
            position: "Product Manager".to_string(),
            department: "Product".to_string(),
            salary: "95000".to_string(),
            email: "bob@company.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            join_date: "2021-08-22".to_string(),
        },
        EmployeeDraft {
            name: "Carol Davis".to_string(),
            position: "UX Designer".to_string(),
            department: "Design".to_string(),
            salary: "70000".to_string(),
            email: "carol@company.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            join_date: "2023-01-10".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::domain::{Field, ViewState};

    use super::*;

    fn dave() -> EmployeeDraft {
        EmployeeDraft {
            name: "Dave Miller".to_string(),
            position: "Account Executive".to_string(),
            department: "Sales".to_string(),
            salary: "60000".to_string(),
            email: "dave@x.com".to_string(),
            ..EmployeeDraft::default()
        }
    }

    #[test]
    fn seeded_roster_contains_the_three_examples() {
        let roster = Roster::seeded();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get(1).unwrap().name(), "Alice Johnson");
        assert_eq!(roster.get(2).unwrap().name(), "Bob Smith");
        assert_eq!(roster.get(3).unwrap().name(), "Carol Davis");
    }

    #[test]
    fn add_grows_by_one_with_a_strictly_greater_id() {
        let mut roster = Roster::seeded();
        let before = roster.len();
        let highest = roster.employees().iter().map(Employee::id).max().unwrap();

        let added = roster.add(&dave()).unwrap();

        assert_eq!(roster.len(), before + 1);
        assert!(added.id() > highest);
        assert_eq!(added.id(), 4);
    }

    #[test]
    fn add_on_an_empty_roster_assigns_id_one() {
        let mut roster = Roster::new();
        assert_eq!(roster.add(&dave()).unwrap().id(), 1);
    }

    #[test]
    fn add_after_removing_the_highest_id_reuses_it() {
        // MAX+1 semantics: deleting the record with the highest id frees
        // that id for the next addition.
        let mut roster = Roster::seeded();
        assert!(roster.remove(3));

        assert_eq!(roster.add(&dave()).unwrap().id(), 3);
    }

    #[test]
    fn invalid_add_leaves_the_collection_unchanged() {
        let mut roster = Roster::seeded();
        let mut draft = dave();
        draft.position.clear();

        let error = roster.add(&draft).unwrap_err();

        assert_eq!(error, ValidationError::MissingFields(vec![Field::Position]));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn update_replaces_the_record_wholly() {
        let mut roster = Roster::seeded();
        let mut draft = roster.get(2).unwrap().to_draft();
        draft.position = "VP of Product".to_string();
        draft.salary = "120000".to_string();

        assert_eq!(roster.update(2, &draft), Ok(true));

        let updated = roster.get(2).unwrap();
        assert_eq!(updated.id(), 2);
        assert_eq!(updated.name(), "Bob Smith");
        assert_eq!(updated.position(), "VP of Product");
        assert_eq!(updated.salary(), 120000);
    }

    #[test]
    fn update_round_trips_through_get() {
        let mut roster = Roster::seeded();
        let mut draft = roster.get(1).unwrap().to_draft();
        draft.department = "Platform".to_string();

        roster.update(1, &draft).unwrap();

        assert_eq!(roster.get(1).unwrap().to_draft(), draft);
    }

    #[test]
    fn update_of_an_unknown_id_is_a_no_op() {
        let mut roster = Roster::seeded();
        let snapshot = roster.employees().to_vec();

        assert_eq!(roster.update(99, &dave()), Ok(false));

        assert_eq!(roster.employees(), snapshot);
    }

    #[test]
    fn invalid_update_leaves_the_collection_unchanged() {
        let mut roster = Roster::seeded();
        let snapshot = roster.employees().to_vec();
        let mut draft = roster.get(1).unwrap().to_draft();
        draft.salary = "not a number".to_string();

        assert!(roster.update(1, &draft).is_err());
        assert_eq!(roster.employees(), snapshot);
    }

    #[test]
    fn remove_of_an_unknown_id_is_a_no_op() {
        let mut roster = Roster::seeded();

        assert!(!roster.remove(99));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn departments_are_distinct_in_first_seen_order() {
        let mut roster = Roster::seeded();
        let mut second_engineer = dave();
        second_engineer.department = "Engineering".to_string();
        roster.add(&second_engineer).unwrap();

        assert_eq!(roster.departments(), ["Engineering", "Product", "Design"]);
    }

    #[test]
    fn departments_track_edits() {
        let mut roster = Roster::seeded();
        let mut draft = roster.get(3).unwrap().to_draft();
        draft.department = "Research".to_string();
        roster.update(3, &draft).unwrap();

        assert_eq!(
            roster.departments(),
            ["Engineering", "Product", "Research"]
        );
    }

    #[test]
    fn stats_on_an_empty_collection_are_all_zero() {
        let stats = Roster::new().stats();
        assert_eq!(
            stats,
            Stats {
                employees: 0,
                average_salary: 0,
                departments: 0,
                total_payroll: 0,
            }
        );
    }

    #[test]
    fn stats_aggregate_the_full_collection() {
        let stats = Roster::seeded().stats();
        assert_eq!(stats.employees, 3);
        assert_eq!(stats.total_payroll, 250_000);
        assert_eq!(stats.average_salary, 83_333);
        assert_eq!(stats.departments, 3);
    }

    #[test]
    fn stats_average_rounds_to_nearest() {
        let mut roster = Roster::new();
        let mut a = dave();
        a.salary = "1".to_string();
        let mut b = dave();
        b.name = "Eve Porter".to_string();
        b.salary = "2".to_string();

        roster.add(&a).unwrap();
        roster.add(&b).unwrap();

        // (1 + 2) / 2 = 1.5, rounded up.
        assert_eq!(roster.stats().average_salary, 2);
    }

    #[test]
    fn directory_scenario_end_to_end() {
        let mut roster = Roster::seeded();

        let added = roster.add(&dave()).unwrap();
        assert_eq!(added.id(), 4);
        assert_eq!(roster.len(), 4);

        assert!(roster.remove(2));
        assert_eq!(roster.len(), 3);
        assert!(roster.get(2).is_none());
        assert!(roster.employees().iter().all(|e| e.name() != "Bob Smith"));

        let view = ViewState {
            search: "ali".to_string(),
            ..ViewState::default()
        };
        let rows = roster.project(&view);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Alice Johnson");
    }
}
