#[allow(clippy::module_inception)]
mod download;
mod types;

pub use download::download_all;
pub use types::{DownloadItem, resolve_download_items};
