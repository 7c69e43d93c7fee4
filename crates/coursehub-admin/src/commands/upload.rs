//! Video upload command.

use std::path::PathBuf;

use clap::Args;

use coursehub_admin::{AdminConsole, HttpVideoApi, NoticeKind, SelectedFile};
use coursehub_core::error::AppError;
use coursehub_entity::video::VideoType;

use crate::output::{self, OutputFormat, VideoRow};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path to the video file
    pub file: PathBuf,

    /// Title (prompted if not provided)
    #[arg(long)]
    pub title: Option<String>,

    /// Description (prompted if not provided)
    #[arg(short, long)]
    pub description: Option<String>,

    /// general or masterclass
    #[arg(short = 't', long = "type", value_parser = super::parse_video_type, default_value = "general")]
    pub video_type: VideoType,

    /// Category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Access code, required for masterclass videos (prompted if missing)
    #[arg(short, long)]
    pub access_code: Option<String>,
}

fn prompt(label: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(super::input_error)
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    console: &mut AdminConsole<HttpVideoApi>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let file = SelectedFile::from_path(&args.file).await?;

    let form = console.upload_form_mut();
    form.video_type = args.video_type;
    form.select_file(file).map_err(AppError::validation)?;
    form.title = match &args.title {
        Some(title) => title.clone(),
        None => prompt("Title")?,
    };
    form.description = match &args.description {
        Some(description) => description.clone(),
        None => prompt("Description")?,
    };
    form.category = args.category.clone().unwrap_or_default();
    form.access_code = match &args.access_code {
        Some(code) => code.clone(),
        None if args.video_type.requires_access_code() => prompt("Access code")?,
        None => String::new(),
    };

    if let Some(file) = form.file() {
        println!(
            "Uploading '{}' ({})...",
            file.name,
            output::format_size(file.size_bytes() as i64)
        );
    }

    let uploaded = console.submit_upload().await;
    let notice = console.notice().cloned();
    match (uploaded, notice) {
        (Some(video), _) => {
            match format {
                OutputFormat::Json => output::print_json(&video),
                OutputFormat::Table => {
                    output::print_list(&[VideoRow::from(&video)], format);
                    output::print_success(&format!("Video uploaded (id: {})", video.id));
                }
            }
            Ok(())
        }
        (None, Some(notice)) if notice.kind == NoticeKind::Error => {
            Err(AppError::external(notice.message))
        }
        (None, _) => Err(AppError::internal("Upload did not complete")),
    }
}
