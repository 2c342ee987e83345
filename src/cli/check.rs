use super::display_name;
use std::path::{Path, PathBuf};
use vendorup::core::{VendorError, VendorResult};
use vendorup::di::ServiceContainer;
use vendorup::updater::create_updater;

enum CheckStatus {
    UpToDate { version: String },
    Outdated { current: String, latest: String },
}

pub async fn run(paths: Vec<PathBuf>) -> VendorResult<()> {
    let container = ServiceContainer::new()?;

    println!("Checking {} package(s) for new releases...", paths.len());

    let mut outdated_count = 0;
    let mut up_to_date_count = 0;
    let mut failed_count = 0;

    for path in &paths {
        match check_package(&container, path).await {
            Ok((name, CheckStatus::UpToDate { version })) => {
                up_to_date_count += 1;
                println!("  ✓ {}: up to date ({})", name, version);
            }
            Ok((name, CheckStatus::Outdated { current, latest })) => {
                outdated_count += 1;
                println!("  ⚠️  {}: {} → {}", name, current, latest);
            }
            Err(e) => {
                failed_count += 1;
                eprintln!("  ✗ {}: {}", path.display(), e);
            }
        }
    }

    println!();
    println!(
        "{} outdated, {} up to date, {} failed",
        outdated_count, up_to_date_count, failed_count
    );

    if failed_count > 0 {
        return Err(VendorError::CheckFailed(format!(
            "{} of {} package(s) could not be checked",
            failed_count,
            paths.len()
        )));
    }

    Ok(())
}

async fn check_package(
    container: &ServiceContainer,
    path: &Path,
) -> VendorResult<(String, CheckStatus)> {
    let metadata = container.metadata_store.read_metadata(path)?;
    let name = display_name(&metadata, path);

    let updater = create_updater(&metadata, path, container)?;
    let resolved = updater.resolve().await?;

    let current = updater.current_version().to_string();
    let latest = resolved.latest_version().to_string();

    tracing::debug!(package = %name, %current, %latest, "checked release");

    let status = if current == latest {
        CheckStatus::UpToDate { version: current }
    } else {
        CheckStatus::Outdated { current, latest }
    };

    Ok((name, status))
}
