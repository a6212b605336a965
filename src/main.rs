use anyhow::{bail, Context, Result};
use groceries::categorizer::categorize_ingredient;
use groceries::config::AppConfig;
use groceries::grocery_list::{GroceryList, MergeOutcome};
use groceries::ingredient_parser::parse_ingredient;
use groceries::observability::init_logging;
use groceries::scaling::scale_ingredients;
use groceries::store::{GroceryStore, JsonFileStore};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

mod cli;

use cli::Command;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let cli = cli::parse_args();
    debug!(command = ?cli.command, "Parsed command line");

    let store = JsonFileStore::new(&config.list_path);
    match cli.command {
        Command::Parse { line } => {
            let parsed = parse_ingredient(&line);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::Categorize { names } => {
            for name in names {
                println!("{}: {}", name, categorize_ingredient(&name));
            }
        }
        Command::Scale {
            new_servings,
            original_servings,
            file,
        } => {
            let ingredients = match file {
                Some(path) => read_file(&path)?,
                None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
            };
            println!(
                "{}",
                scale_ingredients(ingredients.trim_end(), &new_servings, &original_servings)
            );
        }
        Command::Add { files } => {
            let mut list = store.load()?;
            for path in &files {
                let outcomes = list.add_ingredients(&read_file(path)?);
                let added = outcomes
                    .iter()
                    .filter(|outcome| matches!(outcome, MergeOutcome::Added(_)))
                    .count();
                let merged = outcomes
                    .iter()
                    .filter(|outcome| matches!(outcome, MergeOutcome::Merged(_)))
                    .count();
                info!(file = %path.display(), added, merged, "Recipe merged into grocery list");
            }
            store.save(&list)?;
            print_grouped(&list);
        }
        Command::Show { json } => {
            let list = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(list.items())?);
            } else {
                print_grouped(&list);
            }
        }
        Command::Complete { id, undo } => {
            let mut list = store.load()?;
            if !list.set_completed(&id, !undo) {
                bail!("No grocery item with id '{}'", id);
            }
            store.save(&list)?;
            info!(%id, completed = !undo, "Grocery item updated");
        }
    }

    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_grouped(list: &GroceryList) {
    if list.is_empty() {
        println!("Grocery list is empty");
        return;
    }

    for (category, items) in list.grouped() {
        println!("{}", category);
        for item in items {
            println!("  {}  ({})", item, item.id);
        }
    }
    println!("{} of {} items remaining", list.remaining(), list.len());
}
