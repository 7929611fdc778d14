mod gzip;

pub use gzip::{extract_gzip, remove_if_exists};
