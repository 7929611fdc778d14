use crate::config::{Config, OutputConfig};
use url::Url;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub app_config: Config,
    pub base_url: Url,
}

#[derive(Debug, Clone)]
pub struct VerifyParams {
    pub output: OutputConfig,
}
