use crate::cli::args::Command;
use crate::cli::params::{FetchParams, VerifyParams};
use crate::config::{load_config, parse_base_url, validate_config};
use crate::error::DataPrepError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    Verify(VerifyParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, DataPrepError> {
    match command {
        Command::Fetch {
            config_path,
            output_dir,
            base_url,
        } => {
            let mut app_config = load_config(config_path.as_deref())?;
            if let Some(output_dir) = output_dir {
                app_config.output.path = PathBuf::from(output_dir);
            }
            if let Some(base_url) = base_url {
                app_config.source.base_url = base_url;
            }

            validate_config(&app_config)?;
            let base_url = parse_base_url(&app_config.source.base_url)?;

            Ok(ResolvedCommand::Fetch(FetchParams {
                app_config,
                base_url,
            }))
        }
        Command::Verify {
            config_path,
            output_dir,
        } => {
            let mut app_config = load_config(config_path.as_deref())?;
            if let Some(output_dir) = output_dir {
                app_config.output.path = PathBuf::from(output_dir);
            }

            validate_config(&app_config)?;

            if !app_config.output.path.is_dir() {
                return Err(DataPrepError::CliArgumentValidation {
                    details: format!(
                        "Data directory {} does not exist. Run 'dataprep fetch' first or pass --output-dir.",
                        app_config.output.path.display()
                    ),
                });
            }

            Ok(ResolvedCommand::Verify(VerifyParams {
                output: app_config.output,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_applies_cli_overrides() {
        let command = Command::Fetch {
            config_path: None,
            output_dir: Some("/tmp/dataprep-test".to_string()),
            base_url: Some("http://127.0.0.1:9/snapshot".to_string()),
        };

        let ResolvedCommand::Fetch(params) = resolve_command(command).unwrap() else {
            panic!("expected fetch params");
        };

        assert_eq!(
            params.app_config.output.path,
            PathBuf::from("/tmp/dataprep-test")
        );
        assert_eq!(params.base_url.as_str(), "http://127.0.0.1:9/snapshot");
    }

    #[test]
    fn test_fetch_rejects_invalid_base_url() {
        let command = Command::Fetch {
            config_path: None,
            output_dir: None,
            base_url: Some("not a url".to_string()),
        };

        assert!(matches!(
            resolve_command(command),
            Err(DataPrepError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_verify_requires_existing_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::Verify {
            config_path: None,
            output_dir: Some(dir.path().join("absent").display().to_string()),
        };

        assert!(matches!(
            resolve_command(command),
            Err(DataPrepError::CliArgumentValidation { .. })
        ));
    }
}
