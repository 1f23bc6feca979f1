mod add;
mod browse;
mod delete;
mod edit;
mod form;
mod list;
mod stats;
mod terminal;

use add::Add;
use browse::Browse;
use clap::ArgAction;
use delete::Delete;
use edit::Edit;
use list::List;
use roster::Roster;
use stats::Stats;
use terminal::department_badge;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        // One process run is one session: the directory lives in memory,
        // seeded with the example records, and is gone on exit.
        let mut roster = Roster::seeded();

        self.command
            .unwrap_or_else(|| Command::Stats(Stats::default()))
            .run(&mut roster)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show headcount and payroll figures (default)
    Stats(Stats),

    /// List employees with search, filter and sort
    List(List),

    /// Add a new employee
    Add(Add),

    /// Edit an existing employee
    Edit(Edit),

    /// Delete an employee
    Delete(Delete),

    /// List the departments currently present
    Departments(Departments),

    /// Browse the directory interactively
    Browse(Browse),
}

impl Command {
    fn run(self, roster: &mut Roster) -> anyhow::Result<()> {
        match self {
            Self::Stats(command) => command.run(roster),
            Self::List(command) => command.run(roster),
            Self::Add(command) => command.run(roster),
            Self::Edit(command) => command.run(roster),
            Self::Delete(command) => command.run(roster),
            Self::Departments(command) => command.run(roster),
            Self::Browse(command) => command.run(roster),
        }
    }
}

#[derive(Debug, Default, clap::Parser)]
pub struct Departments {
    /// Suppress badges and counts, one department per line
    #[arg(long, short)]
    quiet: bool,
}

impl Departments {
    #[instrument(level = "debug", skip_all)]
    fn run(self, roster: &Roster) -> anyhow::Result<()> {
        let departments = roster.departments();

        if departments.is_empty() {
            println!("No departments yet. Add an employee with 'roster add'.");
            return Ok(());
        }

        for department in departments {
            if self.quiet {
                println!("{department}");
            } else {
                let count = roster
                    .employees()
                    .iter()
                    .filter(|employee| employee.department() == department)
                    .count();
                println!("{}  ({count})", department_badge(department));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use roster::Roster;

    use super::*;

    #[test]
    fn departments_run_succeeds_on_a_seeded_roster() {
        let roster = Roster::seeded();
        Departments::default()
            .run(&roster)
            .expect("departments should succeed");
    }

    #[test]
    fn departments_run_succeeds_on_an_empty_roster() {
        let roster = Roster::new();
        Departments { quiet: true }
            .run(&roster)
            .expect("departments should succeed with nothing to list");
    }
}
