//! Teachers CLI - terminal form for the teachers record set

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use teachers::config::{self, TeachersConfig};
use teachers::session::{self, TermSource};
use teachers::storage::TeacherStore;
use teachers::ui::{self, Icons};
use teachers::{FormInput, Outcome, TeacherForm};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "teachers")]
#[command(version)]
#[command(about = "Teachers record form - add, list and delete teachers in a local SQLite file")]
#[command(long_about = r#"
Teachers keeps a small record set of teachers (name, age, email, subject)
in a local SQLite file and shows it as a form above a table.

Example usage:
  teachers                      # interactive form
  teachers add --name Ada --age 30 --email ada@x.io --subject Math
  teachers list --format json
  teachers delete --id 1
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default)
    Form,

    /// Add a teacher
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        age: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,
    },

    /// List all teachers
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Delete a teacher by id
    Delete {
        #[arg(long)]
        id: i64,
    },

    /// Write a config file
    Init {
        /// Database path to record in the config
        #[arg(long)]
        db: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => {
            let (database, store) = open_store(cli.database.as_deref(), cli.config.as_deref())?;
            ui::header("Teachers Database");
            ui::status(Icons::DATABASE, "Database", &database.display().to_string());
            let mut form = TeacherForm::new(store)?;
            session::run(&mut form, &mut TermSource::new())?;
        }

        Commands::Add { name, age, email, subject } => {
            let (_, store) = open_store(cli.database.as_deref(), cli.config.as_deref())?;
            let mut form = TeacherForm::new(store)?;
            *form.input_mut() = FormInput::new(name, age, email, subject);
            match form.add() {
                Ok(Outcome::Added(teacher)) => {
                    ui::success(&format!("Added {}", teacher));
                    println!("{}", ui::teachers_table(form.rows(), None));
                }
                Ok(other) => tracing::debug!("Unexpected outcome {:?}", other),
                Err(notice) => {
                    ui::notice(&notice);
                    return Err(notice.into());
                }
            }
        }

        Commands::List { format } => {
            let (_, store) = open_store(cli.database.as_deref(), cli.config.as_deref())?;
            let rows = store.list_all()?;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
                "text" => {
                    println!("{}", ui::teachers_table(&rows, None));
                    println!("{}", ui::dim(&format!("{} teacher(s)", rows.len())));
                }
                other => anyhow::bail!("unknown format '{}' (expected text or json)", other),
            }
        }

        Commands::Delete { id } => {
            let (_, store) = open_store(cli.database.as_deref(), cli.config.as_deref())?;
            if store.delete_by_id(id)? {
                ui::success(&format!("Deleted teacher #{}", id));
            } else {
                ui::info("Nothing deleted", &format!("no teacher with id {}", id));
            }
        }

        Commands::Init { db, force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            let contents = TeachersConfig {
                database: Some(db.unwrap_or_else(|| config::DEFAULT_DATABASE.to_string())),
            };
            config::write_config(&path, &contents, force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}

/// Resolve the database path and run the schema initializer. Failure here
/// is fatal: nothing is shown without working storage.
fn open_store(
    database: Option<&Path>,
    config_path: Option<&Path>,
) -> anyhow::Result<(PathBuf, TeacherStore)> {
    let loaded = config::load_config(config_path)?;
    let database = config::resolve_database(database, loaded.as_ref());

    tracing::info!("Opening {}", database.display());
    let store = TeacherStore::open(&database)?;
    Ok((database, store))
}
