use clap::Parser;
use roster::Roster;
use tracing::instrument;

use super::{form, terminal::Colorize};

/// Command arguments for `roster edit`.
#[derive(Debug, Parser)]
#[command(about = "Edit an existing employee")]
pub struct Edit {
    /// The id of the employee to edit.
    id: u32,

    /// New full name.
    #[arg(long)]
    name: Option<String>,

    /// New job title.
    #[arg(long)]
    position: Option<String>,

    /// New department.
    #[arg(long)]
    department: Option<String>,

    /// New annual salary (whole number).
    #[arg(long)]
    salary: Option<String>,

    /// New contact email.
    #[arg(long)]
    email: Option<String>,

    /// New phone number.
    #[arg(long)]
    phone: Option<String>,

    /// New join date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    join_date: Option<String>,
}

impl Edit {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, roster: &mut Roster) -> anyhow::Result<()> {
        let Some(existing) = roster.get(self.id) else {
            println!("{}", format!("No employee with id {}.", self.id).dim());
            return Ok(());
        };

        // Edited fields are merged over the original before the update is
        // submitted; the id itself is never editable.
        let mut draft = existing.to_draft();
        let no_flags = self.name.is_none()
            && self.position.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.join_date.is_none();

        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(position) = self.position {
            draft.position = position;
        }
        if let Some(department) = self.department {
            draft.department = department;
        }
        if let Some(salary) = self.salary {
            draft.salary = salary;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(phone) = self.phone {
            draft.phone = phone;
        }
        if let Some(join_date) = self.join_date {
            draft.join_date = join_date;
        }

        if no_flags {
            form::prompt_prefilled(roster, &mut draft)?;
        }

        match roster.update(self.id, &draft) {
            Ok(true) => {
                println!(
                    "{}",
                    format!("✅ Updated {} (#{})", draft.name, self.id).success()
                );
                Ok(())
            }
            Ok(false) => {
                // Unreachable through this command since existence was
                // checked above; kept as a harmless no-op.
                println!("{}", format!("No employee with id {}.", self.id).dim());
                Ok(())
            }
            Err(error) => {
                eprintln!("{}", format!("⚠️  {error}").warning());
                anyhow::bail!("employee was not updated");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use roster::Roster;

    use super::*;

    fn edit_position(id: u32, position: &str) -> Edit {
        Edit {
            id,
            name: None,
            position: Some(position.to_string()),
            department: None,
            salary: None,
            email: None,
            phone: None,
            join_date: None,
        }
    }

    #[test]
    fn edit_run_merges_the_flag_over_the_record() {
        let mut roster = Roster::seeded();

        edit_position(2, "VP of Product")
            .run(&mut roster)
            .expect("edit should succeed");

        let updated = roster.get(2).unwrap();
        assert_eq!(updated.position(), "VP of Product");
        assert_eq!(updated.name(), "Bob Smith");
        assert_eq!(updated.salary(), 95000);
    }

    #[test]
    fn edit_run_of_an_unknown_id_is_a_quiet_no_op() {
        let mut roster = Roster::seeded();
        let snapshot = roster.employees().to_vec();

        edit_position(99, "Ghost")
            .run(&mut roster)
            .expect("edit of a missing id should not fail");

        assert_eq!(roster.employees(), snapshot);
    }

    #[test]
    fn edit_run_rejects_an_emptied_required_field() {
        let mut roster = Roster::seeded();

        let result = edit_position(1, "").run(&mut roster);

        assert!(result.is_err());
        assert_eq!(roster.get(1).unwrap().position(), "Senior Developer");
    }
}
