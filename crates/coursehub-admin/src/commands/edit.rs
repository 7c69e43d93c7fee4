//! Video edit command.

use clap::Args;
use uuid::Uuid;

use coursehub_admin::{AdminConsole, HttpVideoApi, VideoApi};
use coursehub_core::error::AppError;
use coursehub_entity::video::VideoChanges;

use crate::output::{self, OutputFormat, VideoRow};

/// Arguments for the edit command. Omitted fields are left unchanged.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Video ID
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category; an empty string clears it
    #[arg(short, long)]
    pub category: Option<String>,

    /// Publish (true) or hide (false)
    #[arg(long)]
    pub active: Option<bool>,
}

/// Execute the edit command
pub async fn execute(
    args: &EditArgs,
    console: &AdminConsole<HttpVideoApi>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let changes = VideoChanges {
        title: args.title.clone(),
        description: args.description.clone(),
        category: args.category.clone(),
        is_active: args.active,
    };
    changes.validate()?;

    let video = console.api().update(args.id, &changes).await?;
    match format {
        OutputFormat::Json => output::print_json(&video),
        OutputFormat::Table => {
            output::print_list(&[VideoRow::from(&video)], format);
            output::print_success("Video updated successfully!");
        }
    }
    Ok(())
}
