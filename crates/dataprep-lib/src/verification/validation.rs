use super::manifest::Manifest;
use std::fmt;
use std::process::ExitCode;

/// A file whose generated digest differs from the expected one. Either side
/// may be missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub file_name: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.file_name,
            self.expected.as_deref().unwrap_or("none"),
            self.actual.as_deref().unwrap_or("none"),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    /// No expected manifest to compare against.
    Skipped,
    Failed(Vec<Mismatch>),
}

impl ValidationOutcome {
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            ValidationOutcome::Failed(mismatches) => mismatches,
            ValidationOutcome::Passed | ValidationOutcome::Skipped => &[],
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, ValidationOutcome::Failed(_))
    }

    /// Process exit status: 0 when validation passed or was skipped, 1 on
    /// any mismatch.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Report body for failed validation: a header followed by one indented
/// line per mismatch.
pub fn render_mismatch_report(mismatches: &[Mismatch]) -> String {
    let mut report = String::from("Checksum validation failed:");
    for mismatch in mismatches {
        report.push_str(&format!("\n  - {mismatch}"));
    }
    report
}

/// Compares the generated digests of `expected_files` against the expected
/// manifest. Every file is checked before returning.
pub fn compare_manifests(
    expected_files: &[String],
    generated: &Manifest,
    expected: &Manifest,
) -> Vec<Mismatch> {
    expected_files
        .iter()
        .filter_map(|file_name| {
            let actual = generated.digest_of(file_name);
            let expected = expected.digest_of(file_name);
            (actual != expected).then(|| Mismatch {
                file_name: file_name.clone(),
                expected: expected.map(str::to_string),
                actual: actual.map(str::to_string),
            })
        })
        .collect()
}

/// Validates `generated` against an optional expected manifest. A missing or
/// empty expected manifest skips validation.
pub fn validate(
    expected_files: &[String],
    generated: &Manifest,
    expected: Option<&Manifest>,
) -> ValidationOutcome {
    let Some(expected) = expected.filter(|manifest| !manifest.is_empty()) else {
        return ValidationOutcome::Skipped;
    };

    let mismatches = compare_manifests(expected_files, generated, expected);
    if mismatches.is_empty() {
        ValidationOutcome::Passed
    } else {
        ValidationOutcome::Failed(mismatches)
    }
}
