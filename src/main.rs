use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use lpa_journey::config::JourneyConfig;
use lpa_journey::domain::services::JourneyServices;
use lpa_journey::domain::types::{ActorUid, LpaId, LpaType};
use lpa_journey::engine::JourneyService;
use lpa_journey::journey::FormValues;
use lpa_journey::navigation::Section;
use lpa_journey::paths;
use lpa_journey::store::{FileDonorStore, FixtureAddressLookup};
use lpa_journey::structured_logger::StructuredLogger;

const BUILD_SHA: &str = env!("LPA_JOURNEY_GIT_SHA");

#[derive(Parser)]
#[command(name = "lpa")]
#[command(about = "Fill in a Lasting Power of Attorney one section at a time")]
#[command(version, long_version = BUILD_SHA)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Configuration file (defaults to ~/.lpa-journey/config.yaml, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new LPA and print it
    New {
        /// property-and-affairs or personal-welfare
        #[arg(long, default_value = "property-and-affairs")]
        lpa_type: LpaType,

        /// The donor's email address
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Print the task list
    Tasks { lpa_id: String },
    /// Print the whole document
    Show { lpa_id: String },
    /// Submit a section's form, given as KEY=VALUE pairs
    Submit {
        lpa_id: String,

        /// Section slug, e.g. your-details
        section: Section,

        /// Actor the section is about, for address and remove pages or when editing
        #[arg(long)]
        id: Option<ActorUid>,

        #[arg(trailing_var_arg = true)]
        fields: Vec<String>,
    },
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn open_logger() -> Option<Arc<StructuredLogger>> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let logger = paths::logs_dir().and_then(|dir| StructuredLogger::new(&session_id, &dir));
    match logger {
        Ok(logger) => Some(Arc::new(logger)),
        Err(e) => {
            eprintln!("[lpa] Warning: submission log unavailable: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = JourneyConfig::resolve(cli.config.as_deref())?;

    let store = FileDonorStore::new(config.documents_dir()?);
    let lookup = FixtureAddressLookup::new(&config.address_fixtures);
    let mut service = JourneyService::new(store, lookup, JourneyServices::default(), config);
    if let Some(logger) = open_logger() {
        service = service.with_logger(logger);
    }

    match cli.command {
        Command::New { lpa_type, email } => {
            let document = service.create(lpa_type, &email).await?;
            print_json(&document)?;
        }
        Command::Tasks { lpa_id } => {
            let tasks = service.task_list(&LpaId::from(lpa_id)).await?;
            print_json(&tasks)?;
        }
        Command::Show { lpa_id } => {
            let document = service.document(&LpaId::from(lpa_id)).await?;
            print_json(&document)?;
        }
        Command::Submit {
            lpa_id,
            section,
            id,
            fields,
        } => {
            let form = FormValues::parse_args(&fields).map_err(anyhow::Error::msg)?;
            let response = service
                .submit(&LpaId::from(lpa_id), section, id, &form)
                .await?;
            print_json(&response)?;
        }
    }

    Ok(())
}
