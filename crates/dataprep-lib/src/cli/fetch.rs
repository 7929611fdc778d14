use crate::cli::FetchParams;
use crate::cli::verify::write_and_validate_manifest;
use crate::config::SourceFile;
use crate::download::{download_all, resolve_download_items};
use crate::error::DataPrepError;
use crate::extract::{extract_gzip, remove_if_exists};
use crate::verification::ValidationOutcome;
use std::path::Path;

/// Runs the whole acquisition: download, extract, write the manifest and
/// validate it. Operational failures abort with an error; checksum
/// mismatches are returned in the outcome.
pub async fn run_fetch(params: FetchParams) -> Result<ValidationOutcome, DataPrepError> {
    let FetchParams {
        app_config,
        base_url,
    } = params;
    let output = &app_config.output;

    std::fs::create_dir_all(&output.path).map_err(|e| DataPrepError::DataDirectoryCreation {
        path: output.path.clone(),
        reason: e.to_string(),
    })?;
    tracing::info!("Download directory: {}", output.path.display());

    let items = resolve_download_items(&base_url, &app_config.source.files)?;
    download_all(&items, &output.path).await?;

    extract_compressed(&app_config.source.files, &output.path)?;

    let outcome = write_and_validate_manifest(output)?;
    if outcome.is_success() {
        tracing::info!("Download completed");
    }
    Ok(outcome)
}

/// Decompresses every source file that has a decompression target, then
/// removes the compressed downloads.
pub fn extract_compressed(files: &[SourceFile], dir: &Path) -> Result<(), DataPrepError> {
    let compressed = files
        .iter()
        .filter_map(|file| {
            file.decompress_to
                .as_deref()
                .map(|target| (file.name.as_str(), target))
        })
        .collect::<Vec<_>>();
    if compressed.is_empty() {
        return Ok(());
    }

    tracing::info!("Extracting compressed files");
    for (name, target) in &compressed {
        let written = extract_gzip(&dir.join(name), &dir.join(target))?;
        tracing::debug!(source = %name, destination = %target, bytes = written, "Extracted");
    }

    tracing::info!("Removing temporary .gz files");
    for (name, _) in &compressed {
        remove_if_exists(&dir.join(name))?;
    }

    Ok(())
}
