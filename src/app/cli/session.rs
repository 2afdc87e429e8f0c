//! Interactive session over one shared catalog.

use dialoguer::Select;

use super::catalog::{print_catalog, print_import, print_select};
use super::prompt::{print_formats, print_generate};
use super::print_status;
use crate::app::api::{self, ArtSession};
use crate::domain::{AppError, CatalogName, Status};

const MENU_BACK_OPTION: &str = "[back]";
const CLEAR_OPTION: &str = "(clear)";

#[derive(Clone, Copy)]
enum Action {
    Browse,
    Select,
    Generate,
    Formats,
    Import,
    Status,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Select,
        Action::Generate,
        Action::Formats,
        Action::Import,
        Action::Browse,
        Action::Status,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Browse => "Show catalog",
            Action::Select => "Select a value",
            Action::Generate => "Generate prompt",
            Action::Formats => "Show formats",
            Action::Import => "Import suggestions",
            Action::Status => "Status",
            Action::Quit => "Quit",
        }
    }
}

pub fn run_session(offline: bool) -> Result<(), AppError> {
    let mut session = api::open_session(offline)?;

    loop {
        let labels: Vec<&str> = Action::ALL.iter().map(|action| action.label()).collect();
        let Some(index) = pick("Action", &labels)? else {
            return Ok(());
        };

        match Action::ALL[index] {
            Action::Browse => {
                if let Some(name) = prompt_catalog()? {
                    print_catalog(name, &session.list(name));
                }
            }
            Action::Select => {
                if let Some((name, category, value)) = prompt_value(&session)? {
                    let outcome = session.select(name, &category, value.as_deref())?;
                    print_select(&outcome);
                }
            }
            Action::Generate => print_generate(&session.generate()?),
            Action::Formats => print_formats(&session.formats()?, None),
            Action::Import => {
                if let Some(name) = prompt_catalog()? {
                    println!("{}", Status::Importing(name));
                    print_import(&session.import(name));
                }
            }
            Action::Status => print_status(&session.status()),
            Action::Quit => return Ok(()),
        }
        println!();
    }
}

fn prompt_catalog() -> Result<Option<CatalogName>, AppError> {
    let labels: Vec<String> = CatalogName::ALL.iter().map(|name| name.to_string()).collect();
    Ok(pick("Catalog", &labels)?.map(|index| CatalogName::ALL[index]))
}

/// Walk catalog, category and value. `None` as the value clears the slot.
fn prompt_value(
    session: &ArtSession,
) -> Result<Option<(CatalogName, String, Option<String>)>, AppError> {
    loop {
        let Some(name) = prompt_catalog()? else {
            return Ok(None);
        };
        let categories = session.list(name);
        if categories.is_empty() {
            println!("ℹ️ {} has no categories", name);
            continue;
        }

        let mut category_items: Vec<String> =
            categories.iter().map(|category| category.name.clone()).collect();
        category_items.push(MENU_BACK_OPTION.to_string());
        let Some(category_index) = pick("Category", &category_items)? else {
            return Ok(None);
        };
        if category_index == category_items.len() - 1 {
            continue;
        }

        let category = &categories[category_index];
        let mut value_items: Vec<String> = category
            .values
            .iter()
            .map(|value| {
                let selected = category.selected.as_deref() == Some(value.as_str());
                format!("{} {}", if selected { "●" } else { "○" }, value)
            })
            .collect();
        value_items.push(CLEAR_OPTION.to_string());
        value_items.push(MENU_BACK_OPTION.to_string());
        let Some(value_index) = pick("Value", &value_items)? else {
            return Ok(None);
        };

        let value = match value_index {
            i if i == value_items.len() - 1 => continue,
            i if i == value_items.len() - 2 => None,
            i => Some(category.values[i].clone()),
        };
        return Ok(Some((name, category.name.clone(), value)));
    }
}

/// Pick one item. Esc, `q` and Ctrl-C return `None`.
fn pick<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>, AppError> {
    match Select::new().with_prompt(prompt).items(items).default(0).interact_opt() {
        Ok(index) => Ok(index),
        Err(err) if super::is_interrupted(&err) => Ok(None),
        Err(err) => {
            Err(AppError::Interaction(format!("Failed to read {}: {}", prompt.to_lowercase(), err)))
        }
    }
}
