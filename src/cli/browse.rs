use clap::Parser;
use dialoguer::{Confirm, Input, Select};
use roster::{DepartmentFilter, EmployeeDraft, Roster, SortField, SortOrder, ViewState};
use tracing::instrument;

use super::{
    form,
    list::{render_table, Column},
    stats,
    terminal::Colorize,
};

/// Command arguments for `roster browse`.
#[derive(Debug, Default, Parser)]
#[command(about = "Browse the directory interactively")]
pub struct Browse {}

const MENU: [&str; 9] = [
    "show directory",
    "search",
    "filter by department",
    "sort",
    "add employee",
    "edit employee",
    "delete employee",
    "stats",
    "quit",
];

const LIST_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::Name,
    Column::Position,
    Column::Department,
    Column::Salary,
    Column::Email,
];

impl Browse {
    /// Runs the interactive session loop.
    ///
    /// The view state lives here, alongside the collection, for the whole
    /// session; menu actions mutate one or the other and the directory is
    /// re-derived on every render.
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, roster: &mut Roster) -> anyhow::Result<()> {
        let mut view = ViewState::default();

        loop {
            let choice = Select::new()
                .with_prompt("Employee directory")
                .items(&MENU)
                .default(0)
                .interact()?;

            match MENU[choice] {
                "show directory" => show(roster, &view),
                "search" => {
                    view.search = Input::<String>::new()
                        .with_prompt("search (empty to clear)")
                        .allow_empty(true)
                        .interact_text()?;
                }
                "filter by department" => view.department = pick_department(roster)?,
                "sort" => pick_sort(&mut view)?,
                "add employee" => add(roster)?,
                "edit employee" => edit(roster, &view)?,
                "delete employee" => delete(roster, &view)?,
                "stats" => stats::render(&roster.stats()),
                _ => break,
            }
        }

        Ok(())
    }
}

fn show(roster: &Roster, view: &ViewState) {
    if !view.search.is_empty() {
        println!("{}", format!("search: {:?}", view.search).dim());
    }
    if let DepartmentFilter::Named(department) = &view.department {
        println!("{}", format!("department: {department}").dim());
    }

    let rows = roster.project(view);
    if rows.is_empty() {
        println!("No employees matched.");
        return;
    }

    render_table(&rows, &LIST_COLUMNS, false);
}

fn pick_department(roster: &Roster) -> anyhow::Result<DepartmentFilter> {
    let mut choices = vec!["All departments".to_string()];
    choices.extend(roster.departments().iter().map(ToString::to_string));

    let selection = Select::new()
        .with_prompt("department")
        .items(&choices)
        .default(0)
        .interact()?;

    if selection == 0 {
        Ok(DepartmentFilter::All)
    } else {
        Ok(DepartmentFilter::Named(choices.swap_remove(selection)))
    }
}

fn pick_sort(view: &mut ViewState) -> anyhow::Result<()> {
    const FIELDS: [(&str, SortField); 5] = [
        ("name", SortField::Name),
        ("position", SortField::Position),
        ("department", SortField::Department),
        ("salary", SortField::Salary),
        ("join date", SortField::JoinDate),
    ];

    let labels: Vec<&str> = FIELDS.iter().map(|(label, _)| *label).collect();
    let field = Select::new()
        .with_prompt("sort by")
        .items(&labels)
        .default(0)
        .interact()?;
    view.sort_by = FIELDS[field].1;

    let order = Select::new()
        .with_prompt("order")
        .items(&["ascending", "descending"])
        .default(0)
        .interact()?;
    view.order = if order == 0 {
        SortOrder::Asc
    } else {
        SortOrder::Desc
    };

    Ok(())
}

fn add(roster: &mut Roster) -> anyhow::Result<()> {
    let mut draft = EmployeeDraft {
        join_date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        ..EmployeeDraft::default()
    };
    form::prompt_missing(roster, &mut draft)?;

    // Validation failures are recoverable: report and return to the menu.
    match roster.add(&draft) {
        Ok(employee) => println!(
            "{}",
            format!("✅ Added {} (#{})", employee.name(), employee.id()).success()
        ),
        Err(error) => eprintln!("{}", format!("⚠️  {error}").warning()),
    }

    Ok(())
}

fn edit(roster: &mut Roster, view: &ViewState) -> anyhow::Result<()> {
    let Some(id) = pick_employee(roster, view, "edit which employee?")? else {
        return Ok(());
    };
    let Some(existing) = roster.get(id) else {
        return Ok(());
    };

    let mut draft = existing.to_draft();
    form::prompt_prefilled(roster, &mut draft)?;

    match roster.update(id, &draft) {
        Ok(true) => println!("{}", format!("✅ Updated {} (#{id})", draft.name).success()),
        Ok(false) => println!("{}", format!("No employee with id {id}.").dim()),
        Err(error) => eprintln!("{}", format!("⚠️  {error}").warning()),
    }

    Ok(())
}

fn delete(roster: &mut Roster, view: &ViewState) -> anyhow::Result<()> {
    let Some(id) = pick_employee(roster, view, "delete which employee?")? else {
        return Ok(());
    };
    let Some(employee) = roster.get(id) else {
        return Ok(());
    };
    let name = employee.name().to_string();

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {name} (#{id})?"))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Cancelled");
        return Ok(());
    }

    roster.remove(id);
    println!("{}", format!("✅ Deleted {name} (#{id})").success());
    Ok(())
}

/// Picks an employee from the current (filtered, sorted) view.
fn pick_employee(
    roster: &Roster,
    view: &ViewState,
    prompt: &str,
) -> anyhow::Result<Option<u32>> {
    let rows = roster.project(view);
    if rows.is_empty() {
        println!("No employees matched.");
        return Ok(None);
    }

    let labels: Vec<String> = rows
        .iter()
        .map(|employee| format!("{} (#{})", employee.name(), employee.id()))
        .collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(rows[selection].id()))
}
