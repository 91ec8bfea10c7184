//! CLI output shared by both binaries.
//!
//! Status lines go to stdout and are built here as plain strings so their
//! wording can be tested.  Diagnostics from library code go through
//! `tracing` to stderr; the level defaults to `warn` and is overridden by
//! `RUST_LOG`.

use chrono::{DateTime, TimeZone};
use rotator_core::RotationSettings;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::storage::config::{
    ConfigError, ConfigSource, SCHEDULE_CONFIG_FILE,
};

const SEPARATOR_WIDTH: usize = 60;

/// Initialises `tracing` output on stderr.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Printed when the catalog for `settings` is empty.
pub fn no_images_lines(settings: &RotationSettings) -> Vec<String> {
    vec![
        format!("No images found in folder: {}", settings.image_folder.display()),
        format!("   Supported formats: {}", settings.formats_display()),
    ]
}

/// One-shot confirmation.
pub fn applied_line(file_name: &str) -> String {
    format!("Set wallpaper: {file_name}")
}

/// Continuous-mode confirmation, prefixed with the local wall-clock time.
pub fn timestamped_applied_line<Tz>(now: &DateTime<Tz>, file_name: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("[{}] {}", now.format("%H:%M:%S"), applied_line(file_name))
}

/// Notice describing where the continuous entry point's settings came from.
pub fn config_source_lines(source: &ConfigSource, settings: &RotationSettings) -> Vec<String> {
    let defaults = || {
        vec![
            "Using default settings:".to_string(),
            format!("   - Image folder: {}", settings.image_folder.display()),
            format!("   - Interval: {} minute(s)", settings.interval_minutes),
            format!("   - Formats: {}", settings.formats_display()),
        ]
    };

    match source {
        ConfigSource::File(path) => vec![format!("Loaded config from: {}", path.display())],
        ConfigSource::Missing(path) => {
            let mut lines = vec![format!("Config file not found: {}", path.display())];
            lines.extend(defaults());
            lines
        }
        ConfigSource::Invalid(err) => {
            let mut lines = vec![format!("Error reading config: {err}")];
            lines.extend(defaults());
            lines
        }
    }
}

/// Startup banner of the continuous entry point.
pub fn rotation_banner_lines(image_count: usize, settings: &RotationSettings) -> Vec<String> {
    vec![
        format!(
            "Found {image_count} images in {}",
            settings.image_folder.display()
        ),
        format!(
            "Rotation interval: {} minute(s) ({} seconds)",
            settings.interval_minutes,
            settings.interval().as_secs()
        ),
        "Starting wallpaper rotation... (Press Ctrl+C to stop)".to_string(),
        separator(),
    ]
}

/// Farewell after Ctrl+C.
pub fn shutdown_lines() -> Vec<String> {
    vec![
        String::new(),
        separator(),
        "Wallpaper rotation stopped by user.".to_string(),
        "   Current wallpaper will remain set.".to_string(),
    ]
}

/// Fatal message for a strict config failure.
pub fn config_error_lines(err: &ConfigError) -> Vec<String> {
    match err {
        ConfigError::NotFound { path } => vec![
            format!("Error: {SCHEDULE_CONFIG_FILE} not found at {}", path.display()),
            format!(
                "Please create a {SCHEDULE_CONFIG_FILE} file in the same directory as this program."
            ),
        ],
        other => vec![format!("Error reading config: {other}")],
    }
}

pub fn task_exists_line(task_name: &str) -> String {
    format!("Task '{task_name}' already exists. Skipping creation.")
}

pub fn task_created_line(task_name: &str, interval_minutes: u32) -> String {
    format!("Task '{task_name}' created to run every {interval_minutes} minutes.")
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn eprint_lines(lines: &[String]) {
    for line in lines {
        eprintln!("{line}");
    }
}
