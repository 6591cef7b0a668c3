use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

const LOG_LEVELS: [&str; 6] = ["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

/// Runtime configuration, sourced from CLI flags and environment variables.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The interface address the HTTP server binds to
    #[arg(short = 'H', long, env, default_value = "0.0.0.0")]
    pub host: String,

    /// The port the HTTP server listens on
    #[arg(short, long, env, default_value_t = 8000)]
    pub port: u16,

    /// A list of full CORS origin URLs allowed to receive server responses,
    /// or "*" to leave the API open to any origin (EventSource clients are
    /// typically served from a different origin than this server).
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value = "INFO",
        value_parser = clap::builder::PossibleValuesParser::new(LOG_LEVELS)
            .map(|s| s.parse::<LevelFilter>().unwrap()),
    )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    pub fn new() -> Self {
        dotenv().ok();
        Config::parse()
    }

    /// The externally visible base URL for this server, used in summaries
    /// and management hints.
    pub fn api_base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(["webstream_platform_rs"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_port_8000() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.api_base_url(), "http://0.0.0.0:8000");
    }

    #[test]
    fn log_level_flag_overrides_the_default() {
        let config = Config::parse_from(["webstream_platform_rs", "--log-level-filter", "DEBUG"]);
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }

    #[test]
    fn allowed_origins_split_on_commas() {
        let config = Config::parse_from([
            "webstream_platform_rs",
            "--allowed-origins",
            "http://localhost:3000,https://localhost:3000",
        ]);
        assert_eq!(config.allowed_origins.len(), 2);
    }
}
