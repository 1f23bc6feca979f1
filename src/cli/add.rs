use clap::Parser;
use roster::{EmployeeDraft, Roster};
use tracing::instrument;

use super::{form, terminal::Colorize};

/// Command arguments for `roster add`.
#[derive(Debug, Parser)]
#[command(about = "Add a new employee")]
pub struct Add {
    /// Full name.
    #[arg(long)]
    name: Option<String>,

    /// Job title.
    #[arg(long)]
    position: Option<String>,

    /// Department.
    #[arg(long)]
    department: Option<String>,

    /// Annual salary (whole number).
    #[arg(long)]
    salary: Option<String>,

    /// Contact email.
    #[arg(long)]
    email: Option<String>,

    /// Phone number.
    #[arg(long)]
    phone: Option<String>,

    /// Join date (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    join_date: Option<String>,

    /// Never prompt; missing required fields fail validation instead.
    #[arg(long)]
    no_input: bool,
}

impl Add {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, roster: &mut Roster) -> anyhow::Result<()> {
        let mut draft = EmployeeDraft {
            name: self.name.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            // The form arrives with today's date prefilled.
            join_date: self.join_date.unwrap_or_else(today),
        };

        if !self.no_input {
            form::prompt_missing(roster, &mut draft)?;
        }

        match roster.add(&draft) {
            Ok(employee) => {
                println!(
                    "{}",
                    format!("✅ Added {} (#{})", employee.name(), employee.id()).success()
                );
                Ok(())
            }
            Err(error) => {
                eprintln!("{}", format!("⚠️  {error}").warning());
                anyhow::bail!("employee was not added");
            }
        }
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use roster::Roster;

    use super::*;

    fn flags_only(name: &str, salary: &str) -> Add {
        Add {
            name: Some(name.to_string()),
            position: Some("Account Executive".to_string()),
            department: Some("Sales".to_string()),
            salary: Some(salary.to_string()),
            email: Some("dave@x.com".to_string()),
            phone: None,
            join_date: Some("2024-06-01".to_string()),
            no_input: true,
        }
    }

    #[test]
    fn add_run_appends_a_record() {
        let mut roster = Roster::seeded();

        flags_only("Dave Miller", "60000")
            .run(&mut roster)
            .expect("add should succeed");

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.get(4).unwrap().name(), "Dave Miller");
    }

    #[test]
    fn add_run_rejects_an_unparseable_salary() {
        let mut roster = Roster::seeded();

        let result = flags_only("Dave Miller", "lots").run(&mut roster);

        assert!(result.is_err());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn add_run_without_input_rejects_missing_fields() {
        let mut roster = Roster::seeded();
        let add = Add {
            name: None,
            position: None,
            department: None,
            salary: None,
            email: None,
            phone: None,
            join_date: None,
            no_input: true,
        };

        assert!(add.run(&mut roster).is_err());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn add_run_defaults_the_join_date_to_today() {
        let mut roster = Roster::seeded();
        let mut add = flags_only("Dave Miller", "60000");
        add.join_date = None;

        add.run(&mut roster).expect("add should succeed");

        assert_eq!(
            roster.get(4).unwrap().join_date(),
            Some(chrono::Local::now().date_naive())
        );
    }
}
