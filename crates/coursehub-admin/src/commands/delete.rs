//! Video delete command.

use clap::Args;
use uuid::Uuid;

use coursehub_admin::{AdminConsole, HttpVideoApi};
use coursehub_core::error::AppError;

use crate::output;

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Video ID
    pub id: Uuid,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the delete command
pub async fn execute(
    args: &DeleteArgs,
    console: &mut AdminConsole<HttpVideoApi>,
) -> Result<(), AppError> {
    if !args.yes {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!("Delete video {}? This cannot be undone.", args.id))
            .default(false)
            .interact()
            .map_err(super::input_error)?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let deleted = console.delete(args.id).await;
    let message = console
        .notice()
        .map(|n| n.message.clone())
        .unwrap_or_default();
    if deleted {
        output::print_success(&message);
        Ok(())
    } else {
        Err(AppError::external(message))
    }
}
