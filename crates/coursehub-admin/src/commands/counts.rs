//! Notification counters command.

use clap::Args;

use coursehub_admin::{AdminConsole, HttpVideoApi};
use coursehub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the counts command
#[derive(Debug, Args)]
pub struct CountsArgs {
    /// User to count unread notifications for
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Execute the counts command
pub async fn execute(
    args: &CountsArgs,
    console: &AdminConsole<HttpVideoApi>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let payload = console.counts(args.user.as_deref()).await?;
    match format {
        OutputFormat::Json => output::print_json(&payload),
        OutputFormat::Table => {
            let c = &payload.counts;
            println!("Notification counts for '{}':", payload.user);
            for (key, value) in [
                ("Quiz scores", c.quiz_scores),
                ("Quiz completed", c.quiz_completed),
                ("Course remarks", c.course_remarks),
                ("General courses", c.general_courses),
                ("Masterclass courses", c.masterclass_courses),
                ("Important info", c.important_info),
                ("Admin messages", c.admin_messages),
                ("Course completed", c.course_completed),
            ] {
                output::print_kv(key, &value.to_string());
            }
        }
    }
    Ok(())
}
