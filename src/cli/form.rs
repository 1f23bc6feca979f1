//! Interactive employee forms.
//!
//! These prompts stand in for the add-form and edit-dialog collaborators:
//! they collect transient field drafts, which are discarded once submitted
//! or cancelled, and hand the result to the store for validation.

use dialoguer::{Input, Select};
use roster::{domain::KNOWN_DEPARTMENTS, EmployeeDraft, Field, Roster};

/// Prompts for every field that is still empty in the draft.
///
/// Used by `roster add` when some flags were omitted. Optional fields
/// accept an empty answer.
pub(super) fn prompt_missing(roster: &Roster, draft: &mut EmployeeDraft) -> anyhow::Result<()> {
    for field in Field::ALL {
        if !draft.value(field).is_empty() {
            continue;
        }

        let value = prompt_field(roster, field, "")?;
        set_value(draft, field, value);
    }

    Ok(())
}

/// Prompts for every field, prefilled with the draft's current values.
///
/// Used by the edit dialog: the caller starts from the existing record and
/// the answers are merged over it before the update is submitted.
pub(super) fn prompt_prefilled(roster: &Roster, draft: &mut EmployeeDraft) -> anyhow::Result<()> {
    for field in Field::ALL {
        let current = draft.value(field).to_string();
        let value = prompt_field(roster, field, &current)?;
        set_value(draft, field, value);
    }

    Ok(())
}

fn prompt_field(roster: &Roster, field: Field, initial: &str) -> anyhow::Result<String> {
    match field {
        Field::Department => prompt_department(roster, initial),
        Field::Salary => {
            let mut input = Input::<String>::new()
                .with_prompt(field.label())
                .validate_with(|value: &String| {
                    value
                        .parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| "salary must be a whole number")
                });
            if !initial.is_empty() {
                input = input.with_initial_text(initial);
            }
            Ok(input.interact_text()?)
        }
        Field::Phone | Field::JoinDate => {
            let mut input = Input::<String>::new()
                .with_prompt(format!("{} (optional)", field.label()))
                .allow_empty(true);
            if !initial.is_empty() {
                input = input.with_initial_text(initial);
            }
            Ok(input.interact_text()?)
        }
        Field::Name | Field::Position | Field::Email => {
            let mut input = Input::<String>::new().with_prompt(field.label());
            if !initial.is_empty() {
                input = input.with_initial_text(initial);
            }
            Ok(input.interact_text()?)
        }
    }
}

/// Department choices are the derived set plus the built-in ones, with a
/// free-text escape hatch.
fn prompt_department(roster: &Roster, initial: &str) -> anyhow::Result<String> {
    let mut choices: Vec<String> = roster
        .departments()
        .iter()
        .map(ToString::to_string)
        .collect();
    for known in KNOWN_DEPARTMENTS {
        if !choices.iter().any(|choice| choice == known) {
            choices.push(known.to_string());
        }
    }
    choices.push("other".to_string());

    let default = choices
        .iter()
        .position(|choice| choice == initial)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("department")
        .items(&choices)
        .default(default)
        .interact()?;

    if selection == choices.len() - 1 {
        Ok(Input::<String>::new()
            .with_prompt("department name")
            .interact_text()?)
    } else {
        Ok(choices.swap_remove(selection))
    }
}

fn set_value(draft: &mut EmployeeDraft, field: Field, value: String) {
    match field {
        Field::Name => draft.name = value,
        Field::Position => draft.position = value,
        Field::Department => draft.department = value,
        Field::Salary => draft.salary = value,
        Field::Email => draft.email = value,
        Field::Phone => draft.phone = value,
        Field::JoinDate => draft.join_date = value,
    }
}
