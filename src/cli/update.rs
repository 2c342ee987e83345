use super::display_name;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use vendorup::core::{VendorError, VendorResult};
use vendorup::di::ServiceContainer;
use vendorup::updater::create_updater;

pub struct UpdateOptions {
    pub path: PathBuf,
    pub force: bool,
    pub yes: bool,
}

pub async fn run(options: UpdateOptions) -> VendorResult<()> {
    if !options.path.is_dir() {
        return Err(VendorError::Path(format!(
            "Package directory not found: {}",
            options.path.display()
        )));
    }
    let path = fs::canonicalize(&options.path).map_err(|e| {
        VendorError::Path(format!(
            "Failed to resolve {}: {}",
            options.path.display(),
            e
        ))
    })?;
    let path = path.as_path();

    let container = ServiceContainer::new()?;
    let metadata = container.metadata_store.read_metadata(path)?;
    let name = display_name(&metadata, path);

    let updater = create_updater(&metadata, path, &container)?;
    println!("Checking {} for new releases...", updater.identity());
    let resolved = updater.resolve().await?;

    let current = updater.current_version();
    let latest = resolved.latest_version();

    if current == latest && !options.force {
        println!("✓ {} is already up to date ({})", name, current);
        return Ok(());
    }

    println!("{}: {} → {}", name, current, latest);
    println!("  download: {}", updater.select_url(&resolved));

    if !options.yes && !confirm(&format!("Replace {}?", path.display()))? {
        println!("Update cancelled.");
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map_err(|e| VendorError::Config(format!("Invalid progress template: {}", e)))?,
    );
    spinner.set_message(format!("Updating {} to {}", name, latest));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = updater.apply(&resolved).await;
    spinner.finish_and_clear();
    let outcome = result?;

    println!("✓ Updated {} to {}", name, outcome.version);
    println!("  from {}", outcome.url);

    Ok(())
}

fn confirm(prompt: &str) -> VendorResult<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| VendorError::Config(format!("Failed to read input: {}", e)))
}
