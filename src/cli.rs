use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Recipe ingredient parsing, scaling and grocery lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse one ingredient line and print it as JSON
    Parse {
        /// Ingredient line, e.g. "2 1/2 cups flour"
        line: String,
    },
    /// Print the grocery category of each ingredient name
    Categorize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Scale an ingredient block from ORIGINAL to NEW servings
    Scale {
        new_servings: String,
        original_servings: String,
        /// Ingredient block file; stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Merge recipe ingredient files into the stored grocery list
    Add {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the stored grocery list
    Show {
        /// Print the raw items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a grocery item as completed
    Complete {
        id: String,
        /// Mark the item as not completed instead
        #[arg(long)]
        undo: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
