use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::logging;
use crate::panel::ResultsPanel;
use crate::transport;

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Default)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
}

pub fn parse_cli_args(args: &[String]) -> Result<RuntimeOptions, String> {
    let mut options = RuntimeOptions::default();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--config" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
        index += 1;
    }
    Ok(options)
}

/// Serves newline-delimited JSON panel requests on stdin, one transport
/// response per line. This is the marshaling point: the backing search
/// process delivers batches here, serialized onto a single thread.
pub fn run_with_options(options: RuntimeOptions) -> Result<(), RuntimeError> {
    let config = config::load(options.config_path.as_deref())?;
    if let Err(error) = logging::init() {
        eprintln!("[glance-core] logging unavailable: {error}");
    }
    logging::info(&format!(
        "startup preview_limit={} groups={}",
        config.preview_limit,
        config.group_order.join(",")
    ));

    let mut panel = ResultsPanel::new(&config);
    serve(&mut panel, io::stdin().lock(), io::stdout().lock())
}

pub fn run() -> Result<(), RuntimeError> {
    run_with_options(RuntimeOptions::default())
}

fn serve(
    panel: &mut ResultsPanel,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), RuntimeError> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let response = transport::handle_json(panel, trimmed);
        writeln!(output, "{response}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_cli_args;

    #[test]
    fn parses_config_path_argument() {
        let args = vec!["--config".to_string(), "/tmp/panel.toml".to_string()];
        let options = parse_cli_args(&args).unwrap();
        assert_eq!(
            options.config_path.as_deref(),
            Some(std::path::Path::new("/tmp/panel.toml"))
        );
    }

    #[test]
    fn rejects_unknown_argument() {
        let args = vec!["--verbose".to_string()];
        assert!(parse_cli_args(&args).is_err());
    }

    #[test]
    fn rejects_config_flag_without_value() {
        let args = vec!["--config".to_string()];
        assert!(parse_cli_args(&args).is_err());
    }
}
