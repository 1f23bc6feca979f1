use clap::Parser;
use roster::Roster;
use tracing::instrument;

use super::terminal::{format_usd, is_narrow};

/// Command arguments for `roster stats`.
#[derive(Debug, Parser, Default)]
#[command(about = "Show headcount and payroll figures")]
pub struct Stats {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress labels and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Stats {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, roster: &Roster) -> anyhow::Result<()> {
        let stats = roster.stats();

        if stats.employees == 0 {
            println!("No employees yet. Add one with 'roster add'.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => Self::output_json(&stats)?,
            OutputFormat::Table => {
                if self.quiet {
                    Self::output_quiet(&stats);
                } else {
                    render(&stats);
                }
            }
        }

        Ok(())
    }

    fn output_json(stats: &roster::Stats) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "employees": stats.employees,
            "average_salary": stats.average_salary,
            "departments": stats.departments,
            "total_payroll": stats.total_payroll,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_quiet(stats: &roster::Stats) {
        println!(
            "{}\t{}\t{}\t{}",
            stats.employees, stats.average_salary, stats.departments, stats.total_payroll
        );
    }
}

/// Renders the stats panel, shared with the interactive browser.
pub(super) fn render(stats: &roster::Stats) {
    // Short labels on narrow terminals.
    let labels: [&str; 4] = if is_narrow() {
        ["Employees", "Avg salary", "Depts", "Payroll"]
    } else {
        ["Total employees", "Average salary", "Departments", "Total payroll"]
    };
    let values = [
        stats.employees.to_string(),
        format_usd(stats.average_salary),
        stats.departments.to_string(),
        format_usd(stats.total_payroll),
    ];

    let label_width = labels.iter().map(|label| label.len()).max().unwrap_or(0);
    for (label, value) in labels.iter().zip(values) {
        println!("{label:<label_width$}  {value}");
    }
}

#[cfg(test)]
mod tests {
    use roster::Roster;

    use super::*;

    #[test]
    fn stats_run_reports_a_seeded_roster() {
        let roster = Roster::seeded();
        Stats::default().run(&roster).expect("stats should succeed");
    }

    #[test]
    fn stats_run_handles_an_empty_roster() {
        let roster = Roster::new();
        Stats::default()
            .run(&roster)
            .expect("stats should succeed with nothing to report");
    }

    #[test]
    fn stats_run_renders_json() {
        let roster = Roster::seeded();
        let stats = Stats {
            output: OutputFormat::Json,
            quiet: false,
        };

        stats.run(&roster).expect("json stats should succeed");
    }
}
