//! Video listing command.

use clap::Args;

use coursehub_admin::{AdminConsole, HttpVideoApi, VideoQuery};
use coursehub_core::error::AppError;
use coursehub_entity::video::VideoType;

use crate::output::{self, OutputFormat, VideoRow};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,

    /// Videos per page
    #[arg(short, long, default_value_t = 20)]
    pub limit: u64,

    /// Only videos of this type (general, masterclass)
    #[arg(short = 't', long = "type", value_parser = super::parse_video_type)]
    pub video_type: Option<VideoType>,

    /// Match title, description or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Hide inactive videos
    #[arg(long)]
    pub active_only: bool,
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    console: &mut AdminConsole<HttpVideoApi>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let query = VideoQuery::new()
        .with_page_size(args.limit)
        .with_type(args.video_type)
        .with_search(args.search.clone().unwrap_or_default())
        .with_admin(!args.active_only)
        .with_page(args.page);
    console.load(query).await;

    let browser = console.browser();
    if let Some(message) = browser.error() {
        return Err(AppError::external(message));
    }
    let Some(listing) = browser.listing() else {
        return Ok(());
    };

    match format {
        OutputFormat::Json => output::print_json(listing),
        OutputFormat::Table => {
            let rows: Vec<VideoRow> = listing.videos.iter().map(VideoRow::from).collect();
            output::print_list(&rows, format);
            println!(
                "Page {} of {} ({} videos)",
                listing.page,
                browser.total_pages().max(1),
                listing.total_count
            );
            let pager = browser.pager();
            if !pager.is_empty() {
                println!("{pager}");
            }
        }
    }
    Ok(())
}
