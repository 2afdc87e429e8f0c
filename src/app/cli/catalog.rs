//! Catalog, select and import output.

use crate::app::api::{self, CategoryListing, ImportOutcome, SelectOutcome};
use crate::domain::{AppError, CatalogName, Status};

pub fn run_catalog(offline: bool, section: Option<CatalogName>) -> Result<(), AppError> {
    let catalogs = api::catalog(offline, section)?;

    for (index, (name, categories)) in catalogs.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_catalog(*name, categories);
    }
    Ok(())
}

pub(super) fn print_catalog(name: CatalogName, categories: &[CategoryListing]) {
    println!("{}", name);
    if categories.is_empty() {
        println!("  (no categories)");
    }
    for category in categories {
        print_category(category);
    }
}

fn print_category(category: &CategoryListing) {
    match category.help {
        Some(help) => println!("  {}: {}", category.name, help),
        None => println!("  {}", category.name),
    }
    for value in &category.values {
        let selected = category.selected.as_deref() == Some(value.as_str());
        let marker = if selected { "●" } else { "○" };
        println!("    {} {}", marker, value);
    }
}

pub fn run_select(
    offline: bool,
    section: CatalogName,
    category: &str,
    value: Option<&str>,
) -> Result<(), AppError> {
    let outcome = api::select(offline, section, category, value)?;
    print_select(&outcome);
    Ok(())
}

pub(super) fn print_select(outcome: &SelectOutcome) {
    match &outcome.value {
        Some(value) => println!("✅ {} / {}: {}", outcome.catalog, outcome.category, value),
        None => println!("✅ Cleared {} / {}", outcome.catalog, outcome.category),
    }
    println!("{} selection(s) in total", outcome.total_selected);
}

pub fn run_import(offline: bool, section: CatalogName) -> Result<(), AppError> {
    println!("{}", Status::Importing(section));
    let outcome = api::import(offline, section)?;
    print_import(&outcome);
    Ok(())
}

pub(super) fn print_import(outcome: &ImportOutcome) {
    println!("{}", outcome.status);
    match &outcome.category {
        Some(category) => {
            println!("{} / {}:", outcome.catalog, category.name);
            for value in category.values() {
                println!("  • {}", value);
            }
        }
        None => println!("ℹ️ {} has no categories to import into", outcome.catalog),
    }
}
