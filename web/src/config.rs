use ::config::{ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use types::{Result, err};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// Settings for the server host, read from `traindesk.toml` and `TRAINDESK_*`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// `EnvFilter` directives. `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_filter() -> String {
    "info".into()
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::build(
            ::config::Config::builder()
                .add_source(File::with_name("traindesk").required(false))
                .add_source(Environment::with_prefix("TRAINDESK")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| err!("invalid configuration: {e}"))
    }
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_format {
        LogFormat::Full => builder.init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;

    fn from_toml(toml: &str) -> Result<Config> {
        Config::build(::config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn defaults_apply_to_an_empty_file() {
        let config = from_toml("").unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Full);
    }

    #[test]
    fn reads_values_from_toml() {
        let config = from_toml("log_filter = \"web=debug\"\nlog_format = \"compact\"").unwrap();
        assert_eq!(config.log_filter, "web=debug");
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let e = from_toml("log_format = \"json\"").unwrap_err();
        assert!(e.message.starts_with("invalid configuration"));
    }
}
