use super::Config;
use crate::error::DataPrepError;
use config::Config as ConfigBuilder;
use config::{Environment, Map};

const ENV_PREFIX: &str = "DATAPREP";
const ENV_SECTIONS: [&str; 2] = ["SOURCE", "OUTPUT"];

/// Keeps only `DATAPREP_SOURCE__*` and `DATAPREP_OUTPUT__*` variables, so
/// unrelated `DATAPREP_*` variables never reach the config.
fn section_overrides(vars: impl IntoIterator<Item = (String, String)>) -> Map<String, String> {
    let prefixes = ENV_SECTIONS.map(|section| format!("{ENV_PREFIX}_{section}__"));
    vars.into_iter()
        .filter(|(key, _)| prefixes.iter().any(|prefix| key.starts_with(prefix.as_str())))
        .collect()
}

/// Loads the configuration, layering an optional config file and
/// `DATAPREP_*` environment variables over the built-in defaults.
pub fn load_config(config_path: Option<&str>) -> Result<Config, DataPrepError> {
    load_config_with_env(config_path, section_overrides(std::env::vars()))
}

fn load_config_with_env(
    config_path: Option<&str>,
    env: Map<String, String>,
) -> Result<Config, DataPrepError> {
    let mut builder = ConfigBuilder::builder();
    if let Some(config_path) = config_path {
        builder = builder.add_source(config::File::with_name(config_path));
    }

    let config_builder = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(Some(env)),
        )
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
