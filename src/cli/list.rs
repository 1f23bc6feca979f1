use anyhow::Context;
use clap::{Parser, ValueEnum};
use roster::{DepartmentFilter, Employee, Roster, SortField, SortOrder, ViewState};
use serde::Serialize;
use tracing::instrument;

use super::terminal::format_usd;

const DEFAULT_LIMIT: usize = 200;

/// Command arguments for `roster list`.
#[derive(Debug, Default, Parser)]
#[command(about = "List employees with search, filter and sort")]
pub struct List {
    /// Case-insensitive substring match against name, position and email.
    #[arg(long, short)]
    search: Option<String>,

    /// Department to restrict to ('all' means no restriction).
    #[arg(long, short, value_name = "DEPT")]
    department: Option<DepartmentFilter>,

    /// Field to sort by (name, position, department, salary, join-date).
    #[arg(long, value_parser = parse_sort_field, default_value = "name")]
    sort: SortField,

    /// Sort in descending order.
    #[arg(long)]
    desc: bool,

    /// Columns to display (comma-separated).
    #[arg(long, value_delimiter = ',', value_name = "COL")]
    columns: Vec<Column>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress headers and format rows for scripting.
    #[arg(long)]
    quiet: bool,

    /// Limit number of rows returned.
    #[arg(long)]
    limit: Option<usize>,

    /// Skip the first N rows.
    #[arg(long)]
    offset: Option<usize>,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Available table columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, ValueEnum)]
pub enum Column {
    Id,
    #[default]
    Name,
    Position,
    Department,
    Salary,
    Email,
    Phone,
    JoinDate,
}

#[derive(Debug, Clone, Serialize)]
struct SerializableRow<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    department: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    join_date: Option<String>,
}

impl List {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, roster: &Roster) -> anyhow::Result<()> {
        let columns = self.selected_columns();

        let view = ViewState {
            search: self.search.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
            sort_by: self.sort,
            order: if self.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            },
        };

        let mut rows = roster.project(&view);

        let effective_limit = self
            .limit
            .and_then(|value| (value > 0).then_some(value))
            .or(Some(DEFAULT_LIMIT));
        rows = apply_offset_limit(rows, self.offset, effective_limit);

        if rows.is_empty() {
            if !self.quiet && self.output == OutputFormat::Table {
                println!("No employees matched.");
            }
            return Ok(());
        }

        match self.output {
            OutputFormat::Table => {
                render_table(&rows, &columns, self.quiet);
                Ok(())
            }
            OutputFormat::Json => render_json(&rows, &columns),
            OutputFormat::Csv => {
                render_csv(&rows, &columns, self.quiet);
                Ok(())
            }
        }
    }

    fn selected_columns(&self) -> Vec<Column> {
        if !self.columns.is_empty() {
            return self.columns.clone();
        }

        if self.quiet {
            vec![Column::Id, Column::Name]
        } else {
            vec![
                Column::Id,
                Column::Name,
                Column::Position,
                Column::Department,
                Column::Salary,
                Column::Email,
            ]
        }
    }
}

fn apply_offset_limit<'a>(
    mut rows: Vec<&'a Employee>,
    offset: Option<usize>,
    limit: Option<usize>,
) -> Vec<&'a Employee> {
    if let Some(off) = offset {
        if off < rows.len() {
            rows.drain(..off);
        } else {
            rows.clear();
        }
    }

    if let Some(max) = limit {
        rows.truncate(max);
    }

    rows
}

/// Renders an aligned table, shared with the interactive browser.
pub(super) fn render_table(rows: &[&Employee], columns: &[Column], quiet: bool) {
    let headers: Vec<&str> = if quiet {
        Vec::new()
    } else {
        columns.iter().map(|column| column.header()).collect()
    };

    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|employee| {
            columns
                .iter()
                .map(|column| column.value(employee))
                .collect()
        })
        .collect();

    if quiet {
        for row in data {
            println!("{}", row.join("\t"));
        }
        return;
    }

    // Determine column widths for alignment.
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            data.iter()
                .map(|row| row[idx].len())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    for (header, width) in headers.iter().zip(&widths) {
        print!("{header:<width$}  ");
    }
    println!();

    for width in &widths {
        print!("{:-<width$}  ", "");
    }
    println!();

    for row in data {
        for (value, width) in row.iter().zip(&widths) {
            print!("{value:<width$}  ");
        }
        println!();
    }
}

fn render_json(rows: &[&Employee], columns: &[Column]) -> anyhow::Result<()> {
    let rows_out: Vec<SerializableRow<'_>> = rows
        .iter()
        .map(|employee| build_serializable_row(employee, columns))
        .collect();

    serde_json::to_writer_pretty(std::io::stdout(), &rows_out)
        .context("failed to render json output")?;
    println!();
    Ok(())
}

fn render_csv(rows: &[&Employee], columns: &[Column], quiet: bool) {
    if !quiet {
        let header_line = columns
            .iter()
            .map(|column| csv_escape(column.header()))
            .collect::<Vec<_>>()
            .join(",");
        println!("{header_line}");
    }

    for employee in rows {
        let values = columns
            .iter()
            .map(|column| csv_escape(&column.raw_value(employee)))
            .collect::<Vec<_>>()
            .join(",");
        println!("{values}");
    }
}

fn build_serializable_row<'a>(employee: &'a Employee, columns: &[Column]) -> SerializableRow<'a> {
    let mut row = SerializableRow {
        id: employee.id(),
        name: None,
        position: None,
        department: None,
        salary: None,
        email: None,
        phone: None,
        join_date: None,
    };

    for column in columns {
        match column {
            Column::Id => {}
            Column::Name => row.name = Some(employee.name()),
            Column::Position => row.position = Some(employee.position()),
            Column::Department => row.department = Some(employee.department()),
            Column::Salary => row.salary = Some(employee.salary()),
            Column::Email => row.email = Some(employee.email()),
            Column::Phone => row.phone = employee.phone(),
            Column::JoinDate => {
                row.join_date = employee
                    .join_date()
                    .map(|date| date.format("%Y-%m-%d").to_string());
            }
        }
    }

    row
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn parse_sort_field(value: &str) -> Result<SortField, String> {
    value.parse().map_err(|err| format!("{err}"))
}

impl Column {
    const fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Position => "Position",
            Self::Department => "Department",
            Self::Salary => "Salary",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::JoinDate => "Join Date",
        }
    }

    /// Human-facing cell value; salary is formatted as currency.
    fn value(self, employee: &Employee) -> String {
        match self {
            Self::Salary => format_usd(employee.salary()),
            _ => self.raw_value(employee),
        }
    }

    /// Unformatted cell value, used for CSV output.
    fn raw_value(self, employee: &Employee) -> String {
        match self {
            Self::Id => employee.id().to_string(),
            Self::Name => employee.name().to_string(),
            Self::Position => employee.position().to_string(),
            Self::Department => employee.department().to_string(),
            Self::Salary => employee.salary().to_string(),
            Self::Email => employee.email().to_string(),
            Self::Phone => employee.phone().unwrap_or_default().to_string(),
            Self::JoinDate => employee
                .join_date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use roster::Roster;

    use super::*;

    #[test]
    fn list_run_renders_a_seeded_roster() {
        let roster = Roster::seeded();
        List::default().run(&roster).expect("list should succeed");
    }

    #[test]
    fn list_run_with_filters_and_json_output() {
        let roster = Roster::seeded();
        let list = List {
            search: Some("ali".to_string()),
            output: OutputFormat::Json,
            ..List::default()
        };

        list.run(&roster).expect("filtered json list should succeed");
    }

    #[test]
    fn offset_past_the_end_clears_the_rows() {
        let roster = Roster::seeded();
        let rows = roster.project(&ViewState::default());

        assert!(apply_offset_limit(rows, Some(10), None).is_empty());
    }

    #[test]
    fn limit_truncates_the_rows() {
        let roster = Roster::seeded();
        let rows = roster.project(&ViewState::default());

        assert_eq!(apply_offset_limit(rows, None, Some(2)).len(), 2);
    }

    #[test]
    fn csv_escape_quotes_embedded_commas() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
