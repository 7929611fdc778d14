mod loader;
mod model;
mod validate;

pub use loader::load_config;
pub use model::{Config, DEFAULT_BASE_URL, OutputConfig, SourceConfig, SourceFile};
pub use validate::{parse_base_url, validate_config};
