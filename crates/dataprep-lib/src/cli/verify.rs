use crate::cli::VerifyParams;
use crate::config::OutputConfig;
use crate::error::DataPrepError;
use crate::verification::{
    Manifest, ValidationOutcome, render_mismatch_report, validate, write_manifest,
};
use tracing::{error, info, warn};

/// Writes the generated manifest for the expected files and validates it
/// against the expected manifest, logging the result.
pub fn write_and_validate_manifest(
    output: &OutputConfig,
) -> Result<ValidationOutcome, DataPrepError> {
    let generated_path = output.generated_manifest_path();
    info!("Writing checksum manifest: {}", generated_path.display());
    let generated = write_manifest(&output.path, &output.expected_files, &generated_path)?;

    let expected = Manifest::load_if_exists(&output.expected_manifest_path())?;
    if expected.as_ref().is_some_and(|manifest| !manifest.is_empty()) {
        info!("Validating checksums against {}", output.expected_manifest);
    }

    let outcome = validate(&output.expected_files, &generated, expected.as_ref());
    match &outcome {
        ValidationOutcome::Skipped => warn!(
            "{} not found: skipping checksum validation",
            output.expected_manifest
        ),
        ValidationOutcome::Passed => info!("Checksum validation passed"),
        ValidationOutcome::Failed(mismatches) => {
            error!("{}", render_mismatch_report(mismatches))
        }
    }

    Ok(outcome)
}

pub async fn run_verify(params: VerifyParams) -> Result<ValidationOutcome, DataPrepError> {
    let VerifyParams { output } = params;

    tracing::info!("Data directory: {}", output.path.display());
    let outcome = write_and_validate_manifest(&output)?;

    if outcome.is_success() {
        tracing::info!("Verification completed");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::sha256_of_file;

    fn output_with_files(dir: &std::path::Path) -> OutputConfig {
        std::fs::write(dir.join("listings.csv"), "id\n1\n").unwrap();
        std::fs::write(dir.join("reviews.csv"), "listing_id\n1\n").unwrap();
        OutputConfig {
            path: dir.to_path_buf(),
            expected_files: vec!["listings.csv".to_string(), "reviews.csv".to_string()],
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_without_expected_manifest_validation_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_with_files(dir.path());

        let outcome = write_and_validate_manifest(&output).unwrap();

        assert_eq!(outcome, ValidationOutcome::Skipped);
        assert!(output.generated_manifest_path().exists());
    }

    #[test]
    fn test_matching_expected_manifest_passes() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_with_files(dir.path());
        write_and_validate_manifest(&output).unwrap();
        std::fs::copy(
            output.generated_manifest_path(),
            output.expected_manifest_path(),
        )
        .unwrap();

        let outcome = write_and_validate_manifest(&output).unwrap();

        assert_eq!(outcome, ValidationOutcome::Passed);
    }

    #[test]
    fn test_changed_file_fails_with_single_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_with_files(dir.path());
        write_and_validate_manifest(&output).unwrap();
        std::fs::copy(
            output.generated_manifest_path(),
            output.expected_manifest_path(),
        )
        .unwrap();
        let original_digest = sha256_of_file(&dir.path().join("reviews.csv")).unwrap();
        std::fs::write(dir.path().join("reviews.csv"), "listing_id\n2\n").unwrap();

        let outcome = write_and_validate_manifest(&output).unwrap();

        let mismatches = outcome.mismatches();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].file_name, "reviews.csv");
        assert_eq!(mismatches[0].expected.as_deref(), Some(original_digest.as_str()));
        assert_eq!(
            mismatches[0].actual,
            Some(sha256_of_file(&dir.path().join("reviews.csv")).unwrap())
        );
        assert!(!outcome.is_success());
    }
}
