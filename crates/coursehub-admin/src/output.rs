//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use coursehub_entity::video::Video;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Video display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct VideoRow {
    id: String,
    title: String,
    #[tabled(rename = "type")]
    video_type: String,
    category: String,
    status: String,
    size: String,
    uploaded: String,
}

impl From<&Video> for VideoRow {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title.clone(),
            video_type: video.video_type.to_string(),
            category: video.category.clone().unwrap_or_else(|| "-".to_string()),
            status: if video.is_active { "active" } else { "inactive" }.to_string(),
            size: format_size(video.size_bytes),
            uploaded: video.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Human-readable size, e.g. `12.5 MB`.
pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes.max(0) as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No videos found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
