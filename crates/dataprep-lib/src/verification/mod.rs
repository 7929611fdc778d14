pub mod content_digest_hasher;
mod manifest;
mod validation;

pub use content_digest_hasher::sha256_of_file;
pub use manifest::{Manifest, ManifestEntry, write_manifest};
pub use validation::{
    Mismatch, ValidationOutcome, compare_manifests, render_mismatch_report, validate,
};
