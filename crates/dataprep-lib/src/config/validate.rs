use super::Config;
use crate::error::DataPrepError;
use itertools::Itertools;
use url::Url;

/// Parses the source base URL, rejecting anything that is not an absolute
/// http(s) URL.
pub fn parse_base_url(base_url: &str) -> Result<Url, DataPrepError> {
    let url = Url::parse(base_url).map_err(|e| DataPrepError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DataPrepError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

pub fn validate_config(config: &Config) -> Result<(), DataPrepError> {
    parse_base_url(&config.source.base_url)?;

    if config.source.files.is_empty() {
        return Err(DataPrepError::ConfigValidation {
            details: "source.files must not be empty".to_string(),
        });
    }

    let duplicate_names = config
        .source
        .files
        .iter()
        .map(|file| file.name.as_str())
        .duplicates()
        .collect::<Vec<_>>();
    if !duplicate_names.is_empty() {
        return Err(DataPrepError::ConfigValidation {
            details: format!(
                "duplicate source file names: {}",
                duplicate_names.join(", ")
            ),
        });
    }

    let duplicate_targets = config
        .source
        .files
        .iter()
        .filter_map(|file| file.decompress_to.as_deref())
        .duplicates()
        .collect::<Vec<_>>();
    if !duplicate_targets.is_empty() {
        return Err(DataPrepError::ConfigValidation {
            details: format!(
                "duplicate decompression targets: {}",
                duplicate_targets.join(", ")
            ),
        });
    }

    if let Some(file) = config
        .source
        .files
        .iter()
        .find(|file| file.decompress_to.as_deref() == Some(file.name.as_str()))
    {
        return Err(DataPrepError::ConfigValidation {
            details: format!("{} decompresses onto itself", file.name),
        });
    }

    if config.output.expected_files.is_empty() {
        return Err(DataPrepError::ConfigValidation {
            details: "output.expected_files must not be empty".to_string(),
        });
    }

    let duplicate_expected = config
        .output
        .expected_files
        .iter()
        .duplicates()
        .collect::<Vec<_>>();
    if !duplicate_expected.is_empty() {
        return Err(DataPrepError::ConfigValidation {
            details: format!(
                "duplicate expected files: {}",
                duplicate_expected.iter().join(", ")
            ),
        });
    }

    Ok(())
}
