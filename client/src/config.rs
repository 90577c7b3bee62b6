use std::time::Duration;

use squadboard_shared::{DEFAULT_TOP_N, ViewMode};

pub const SQUADS_PATH: &str = "/api/squads";
pub const MEMBERS_PATH: &str = "/api/members";

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 3;
pub const USER_AGENT: &str = "squadboard/0.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Built-in sample data.
    Static,
    /// `GET /api/squads` and `GET /api/members` against [`Config::api_url`].
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: DataSource,
    pub api_url: String,
    pub view_mode: ViewMode,
    pub top_n: usize,
    pub http_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            source: data_source(),
            api_url: api_url(),
            view_mode: view_mode(),
            top_n: top_n(),
            http_timeout: http_timeout(),
            connect_timeout: connect_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DataSource::Remote,
            api_url: DEFAULT_API_URL.to_string(),
            view_mode: ViewMode::default(),
            top_n: DEFAULT_TOP_N,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

pub fn data_source() -> DataSource {
    std::env::var("SQUADBOARD_SOURCE")
        .ok()
        .and_then(|value| match value.trim().to_ascii_lowercase().as_str() {
            "static" | "sample" => Some(DataSource::Static),
            "remote" | "api" => Some(DataSource::Remote),
            _ => None,
        })
        .unwrap_or(DataSource::Remote)
}

pub fn api_url() -> String {
    std::env::var("SQUADBOARD_API_URL")
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn view_mode() -> ViewMode {
    std::env::var("SQUADBOARD_VIEW")
        .ok()
        .and_then(|value| value.parse::<ViewMode>().ok())
        .unwrap_or_default()
}

pub fn top_n() -> usize {
    std::env::var("SQUADBOARD_TOP_N")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_TOP_N)
}

pub fn http_timeout() -> Duration {
    std::env::var("SQUADBOARD_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
}

pub fn connect_timeout() -> Duration {
    std::env::var("SQUADBOARD_CONNECT_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "SQUADBOARD_SOURCE",
        "SQUADBOARD_API_URL",
        "SQUADBOARD_VIEW",
        "SQUADBOARD_TOP_N",
        "SQUADBOARD_HTTP_TIMEOUT_SECS",
        "SQUADBOARD_CONNECT_TIMEOUT_SECS",
    ];

    #[test]
    fn unset_environment_yields_defaults() {
        let unset: Vec<(&str, Option<&str>)> = VARS.iter().map(|name| (*name, None)).collect();
        temp_env::with_vars(unset, || {
            assert_eq!(Config::from_env(), Config::default());
        });
    }

    #[test]
    fn reads_every_setting_from_environment() {
        temp_env::with_vars(
            [
                ("SQUADBOARD_SOURCE", Some("Static")),
                ("SQUADBOARD_API_URL", Some(" http://127.0.0.1:8080/ ")),
                ("SQUADBOARD_VIEW", Some("member")),
                ("SQUADBOARD_TOP_N", Some("5")),
                ("SQUADBOARD_HTTP_TIMEOUT_SECS", Some("30")),
                ("SQUADBOARD_CONNECT_TIMEOUT_SECS", Some("1")),
            ],
            || {
                let config = Config::from_env();
                assert_eq!(config.source, DataSource::Static);
                assert_eq!(config.api_url, "http://127.0.0.1:8080");
                assert_eq!(config.view_mode, ViewMode::Member);
                assert_eq!(config.top_n, 5);
                assert_eq!(config.http_timeout, Duration::from_secs(30));
                assert_eq!(config.connect_timeout, Duration::from_secs(1));
            },
        );
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        temp_env::with_vars(
            [
                ("SQUADBOARD_SOURCE", Some("ftp")),
                ("SQUADBOARD_API_URL", Some("   ")),
                ("SQUADBOARD_VIEW", Some("teams")),
                ("SQUADBOARD_TOP_N", Some("0")),
                ("SQUADBOARD_HTTP_TIMEOUT_SECS", Some("soon")),
                ("SQUADBOARD_CONNECT_TIMEOUT_SECS", Some("0")),
            ],
            || {
                assert_eq!(Config::from_env(), Config::default());
            },
        );
    }
}
