//! Foreground wallpaper rotation.
//!
//! Loads `desktop_wallpaper.toml` (falling back to defaults), scans the image
//! folder once, then applies a random image every interval until Ctrl+C.
//!
//! ```text
//! main()
//!  └─ load_rotation_settings()   -- lenient, never fails
//!  └─ ImageCatalog::scan()       -- once, at startup
//!  └─ run_continuous()           -- apply, sleep, repeat
//!       └─ ctrl_c()              -- ends the loop during a sleep
//! ```
//!
//! Exit code 0 on Ctrl+C or when no images are found, 1 when the OS refuses
//! the wallpaper change.

use anyhow::Context;
use chrono::Local;
use tracing::{error, info};

use rotator_core::ImageCatalog;
use wallpaper_rotator::application::rotate::{display_name, run_continuous, LoopExit};
use wallpaper_rotator::infrastructure::storage::config::{self, ROTATE_CONFIG_FILE};
use wallpaper_rotator::infrastructure::wallpaper::NativeWallpaperSetter;
use wallpaper_rotator::output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    output::init_logging();

    let program_dir = config::program_dir()?;
    let config_path = config::config_file_path(ROTATE_CONFIG_FILE)?;
    let load = config::load_rotation_settings(&config_path, &program_dir);
    output::print_lines(&output::config_source_lines(&load.source, &load.settings));
    let settings = load.settings;

    let catalog = ImageCatalog::scan(&settings.image_folder, &settings.extensions);
    if catalog.is_empty() {
        output::print_lines(&output::no_images_lines(&settings));
        return Ok(());
    }

    println!();
    output::print_lines(&output::rotation_banner_lines(catalog.len(), &settings));
    info!(
        "rotating {} images every {:?}",
        catalog.len(),
        settings.interval()
    );

    // ── Rotation loop ─────────────────────────────────────────────────────────
    let setter = NativeWallpaperSetter::new();
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            // Without a signal handler the loop can only end on an error.
            error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let exit = run_continuous(&catalog, &setter, settings.interval(), shutdown, |image| {
        println!(
            "{}",
            output::timestamped_applied_line(&Local::now(), &display_name(image))
        );
    })
    .await
    .context("wallpaper rotation stopped")?;

    if exit == LoopExit::Shutdown {
        output::print_lines(&output::shutdown_lines());
    }
    Ok(())
}
