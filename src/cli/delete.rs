use clap::Parser;
use dialoguer::Confirm;
use roster::Roster;
use tracing::instrument;

use super::terminal::Colorize;

/// Command arguments for `roster delete`.
#[derive(Debug, Parser)]
#[command(about = "Delete an employee")]
pub struct Delete {
    /// The id of the employee to delete.
    id: u32,

    /// Skip the confirmation prompt.
    #[arg(long, short)]
    yes: bool,
}

impl Delete {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, roster: &mut Roster) -> anyhow::Result<()> {
        let Some(employee) = roster.get(self.id) else {
            // A missing id is a no-op, not an error; the store guarantees
            // the same when triggered without this check.
            println!("{}", format!("No employee with id {}.", self.id).dim());
            return Ok(());
        };

        let name = employee.name().to_string();

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete {name} (#{})?", self.id))
                .default(false)
                .interact()?;
            if !confirmed {
                println!("Cancelled");
                return Ok(());
            }
        }

        roster.remove(self.id);
        println!("{}", format!("✅ Deleted {name} (#{})", self.id).success());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use roster::Roster;

    use super::*;

    #[test]
    fn delete_run_removes_the_record() {
        let mut roster = Roster::seeded();

        Delete { id: 2, yes: true }
            .run(&mut roster)
            .expect("delete should succeed");

        assert_eq!(roster.len(), 2);
        assert!(roster.get(2).is_none());
    }

    #[test]
    fn delete_run_of_an_unknown_id_is_a_quiet_no_op() {
        let mut roster = Roster::seeded();

        Delete { id: 99, yes: true }
            .run(&mut roster)
            .expect("delete of a missing id should not fail");

        assert_eq!(roster.len(), 3);
    }
}
