//! CLI command definitions and dispatch.

pub mod counts;
pub mod delete;
pub mod edit;
pub mod list;
pub mod upload;

use clap::{Parser, Subcommand};

use coursehub_admin::{AdminConsole, HttpVideoApi};
use coursehub_core::error::AppError;
use coursehub_entity::video::VideoType;

use crate::output::OutputFormat;

/// CourseHub admin console
#[derive(Debug, Parser)]
#[command(name = "coursehub-admin", version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the CourseHub server
    #[arg(
        long,
        env = "COURSEHUB_API_URL",
        default_value = "http://localhost:5000"
    )]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List videos
    List(list::ListArgs),
    /// Upload a video file
    Upload(upload::UploadArgs),
    /// Edit a video's details
    Edit(edit::EditArgs),
    /// Delete a video
    Delete(delete::DeleteArgs),
    /// Show notification badge counters
    Counts(counts::CountsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let mut console = AdminConsole::new(HttpVideoApi::new(self.api_url.clone()));
        match &self.command {
            Commands::List(args) => list::execute(args, &mut console, self.format).await,
            Commands::Upload(args) => upload::execute(args, &mut console, self.format).await,
            Commands::Edit(args) => edit::execute(args, &console, self.format).await,
            Commands::Delete(args) => delete::execute(args, &mut console).await,
            Commands::Counts(args) => counts::execute(args, &console, self.format).await,
        }
    }
}

/// Parse `general` / `masterclass` for clap.
pub fn parse_video_type(s: &str) -> Result<VideoType, String> {
    s.parse::<VideoType>().map_err(|e| e.to_string())
}

/// Map a dialoguer failure.
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}
