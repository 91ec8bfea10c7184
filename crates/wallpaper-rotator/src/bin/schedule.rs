//! One-shot wallpaper change, meant to be run by Windows Task Scheduler.
//!
//! Every run:
//!
//! 1. loads `config.toml` strictly (any problem: message on stderr, exit 1);
//! 2. registers the recurring task that re-runs this program, unless a task
//!    with the configured name already exists;
//! 3. rescans the image folder and applies one random image.
//!
//! Failures in steps 2 and 3 are reported and the process still exits 0, so
//! the scheduler keeps firing on the next interval.

use tracing::warn;

use rotator_core::ScheduleSettings;
use wallpaper_rotator::application::register_task::{
    ensure_registered, RecurringTask, Registration,
};
use wallpaper_rotator::application::rotate::{display_name, rotate_once, RotationOutcome};
use wallpaper_rotator::infrastructure::scheduler::SchtasksRunner;
use wallpaper_rotator::infrastructure::storage::config::{self, ConfigError, SCHEDULE_CONFIG_FILE};
use wallpaper_rotator::infrastructure::wallpaper::NativeWallpaperSetter;
use wallpaper_rotator::output;

fn main() {
    output::init_logging();

    if let Err(err) = real_main() {
        match err.downcast_ref::<ConfigError>() {
            Some(config_err) => output::eprint_lines(&output::config_error_lines(config_err)),
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

/// Only a config failure is returned as an error; everything after it is
/// reported in place.
fn real_main() -> anyhow::Result<()> {
    let path = config::config_file_path(SCHEDULE_CONFIG_FILE)?;
    let settings = config::load_schedule_settings(&path)?;

    register(&settings);
    rotate(&settings);
    Ok(())
}

fn register(settings: &ScheduleSettings) {
    let program = match std::env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Could not determine this program's path; task not registered: {e}");
            return;
        }
    };

    let task = RecurringTask::from_settings(settings, program);
    match ensure_registered(&SchtasksRunner::new(), &task) {
        Ok(Registration::AlreadyPresent) => {
            println!("{}", output::task_exists_line(&task.name));
        }
        Ok(Registration::Created) => {
            println!(
                "{}",
                output::task_created_line(&task.name, task.interval_minutes.get())
            );
        }
        Err(e) => {
            warn!("task registration failed: {e:?}");
            eprintln!("Could not register task '{}': {e}", task.name);
        }
    }
}

fn rotate(settings: &ScheduleSettings) {
    match rotate_once(&settings.rotation, &NativeWallpaperSetter::new()) {
        Ok(RotationOutcome::Applied(path)) => {
            println!("{}", output::applied_line(&display_name(&path)));
        }
        Ok(RotationOutcome::NoImages) => {
            output::print_lines(&output::no_images_lines(&settings.rotation));
        }
        Err(e) => eprintln!("Failed to set wallpaper: {e}"),
    }
}
