use super::types::DownloadItem;
use crate::error::DataPrepError;
use eyre::{Result, WrapErr};
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Downloads every item into `output_dir`, one request at a time.
///
/// The first failure aborts the remaining downloads. Existing files with the
/// same name are truncated and overwritten.
pub async fn download_all(
    items: &[DownloadItem],
    output_dir: impl AsRef<Path>,
) -> Result<(), DataPrepError> {
    let output_dir = output_dir.as_ref();
    let client = reqwest::Client::new();

    for item in items {
        info!("Downloading {}", item.file_name);
        let output_path = output_dir.join(&item.file_name);
        let bytes = download_one(&client, item, &output_path)
            .await
            .map_err(|e| DataPrepError::FileDownload {
                file: item.file_name.clone(),
                url: item.url.to_string(),
                reason: format!("{e:#}"),
            })?;
        debug!(url = %item.url, output = %output_path.display(), bytes, "Downloaded");
    }

    Ok(())
}

async fn download_one(
    client: &reqwest::Client,
    item: &DownloadItem,
    output_path: &Path,
) -> Result<u64> {
    let mut response = client
        .get(item.url.clone())
        .send()
        .await
        .wrap_err_with(|| format!("Failed to request {}", item.url))?
        .error_for_status()
        .wrap_err_with(|| format!("Server rejected request for {}", item.url))?;

    let file = tokio::fs::File::create(output_path)
        .await
        .wrap_err_with(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = tokio::io::BufWriter::new(file);

    let mut written = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .wrap_err_with(|| format!("Failed to read from {}", item.url))?
    {
        writer
            .write_all(&chunk)
            .await
            .wrap_err_with(|| format!("Failed to write to {}", output_path.display()))?;
        written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .wrap_err_with(|| format!("Failed to flush {}", output_path.display()))?;

    Ok(written)
}
