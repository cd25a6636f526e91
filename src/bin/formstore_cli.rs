use clap::{Parser, Subcommand};
use formstore::schema::SchemaValidator;
use formstore::{load_store_config, FormSchema, FormStore, LoadOutcome};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the store configuration file
    #[arg(short, long, default_value = "config/store_config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether a schema is loaded and whether the cache holds a local copy
    Status {},
    /// Pretty-print the resident schema
    Show {},
    /// Persist the resident schema to the cache
    Save {},
    /// Import a schema document from a file, replacing the resident schema
    Import {
        /// Path to the schema JSON file
        path: PathBuf,
    },
    /// Export the resident schema as a backup file into a directory
    Export {
        /// Directory receiving the backup file
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Delete the cached schema and reload from the default document
    Reset {},
    /// Check a schema document without touching the store
    Validate {
        /// Path to the schema JSON file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Validate never needs the store
    if let Commands::Validate { path } = &cli.command {
        return handle_validate(path);
    }

    info!("Loading config from: {}", cli.config);
    let config = load_store_config(Some(&cli.config))?;

    let mut store = FormStore::from_config(&config)?;
    let outcome = store.load().await;

    match cli.command {
        Commands::Status {} => handle_status(&store, outcome),
        Commands::Show {} => handle_show(&store)?,
        Commands::Save {} => {
            store.save()?;
            println!("Schema saved to cache");
        }
        Commands::Import { path } => {
            store.import(&path).await?;
            println!("Imported schema from {}", path.display());
        }
        Commands::Export { dir } => match store.export_to(&dir)? {
            Some(path) => println!("Exported schema to {}", path.display()),
            None => println!("No resident schema; nothing exported"),
        },
        Commands::Reset {} => {
            let outcome = store.reset_to_default().await?;
            println!("Reset to default ({:?})", outcome);
        }
        Commands::Validate { .. } => unreachable!(), // Already handled above
    }

    Ok(())
}

fn handle_status(store: &FormStore, outcome: LoadOutcome) {
    println!("loaded: {}", store.is_loaded());
    println!("source: {:?}", outcome);
    println!("local changes: {}", store.has_local_changes());
}

fn handle_show(store: &FormStore) -> Result<(), Box<dyn std::error::Error>> {
    match store.schema() {
        Some(schema) => println!("{}", serde_json::to_string_pretty(schema)?),
        None => println!("No resident schema"),
    }
    Ok(())
}

fn handle_validate(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;

    let validator = SchemaValidator::new();
    validator.validate_document(&value)?;

    let schema: FormSchema = serde_json::from_value(value)?;
    validator.validate(&schema)?;

    println!("{} is a valid schema document", path.display());
    Ok(())
}
