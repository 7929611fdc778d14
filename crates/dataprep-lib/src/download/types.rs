use crate::config::SourceFile;
use crate::error::DataPrepError;
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadItem {
    pub file_name: String,
    pub url: Url,
}

/// Resolves every source file against the base URL, preserving order.
///
/// The base URL is treated as a directory even without a trailing slash,
/// so `.../2025-09-14` + `data/listings.csv.gz` keeps the date segment.
pub fn resolve_download_items(
    base_url: &Url,
    files: &[SourceFile],
) -> Result<Vec<DownloadItem>, DataPrepError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    files
        .iter()
        .map(|file| {
            let url = base
                .join(file.path.trim_start_matches('/'))
                .map_err(|e| DataPrepError::InvalidBaseUrl {
                    url: format!("{}{}", base, file.path),
                    reason: e.to_string(),
                })?;
            Ok(DownloadItem {
                file_name: file.name.clone(),
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, SourceConfig};

    #[test]
    fn test_resolve_keeps_last_base_segment() {
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        let items = resolve_download_items(&base, &SourceConfig::default().files).unwrap();

        assert_eq!(items.len(), 7);
        assert_eq!(items[0].file_name, "listings.csv.gz");
        assert_eq!(
            items[0].url.as_str(),
            "https://data.insideairbnb.com/spain/comunidad-de-madrid/madrid/2025-09-14/data/listings.csv.gz"
        );
        assert_eq!(
            items[6].url.as_str(),
            "https://data.insideairbnb.com/spain/comunidad-de-madrid/madrid/2025-09-14/visualisations/neighbourhoods.geojson"
        );
    }

    #[test]
    fn test_resolve_accepts_trailing_slash_and_leading_slash() {
        let base = Url::parse("http://localhost:8080/snapshot/").unwrap();
        let files = vec![SourceFile::plain("a.csv", "/visualisations/a.csv")];

        let items = resolve_download_items(&base, &files).unwrap();

        assert_eq!(
            items[0].url.as_str(),
            "http://localhost:8080/snapshot/visualisations/a.csv"
        );
    }
}
