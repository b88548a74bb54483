//! Configuration for the `todomvc` binary.
//!
//! Loads configuration from environment variables with sensible defaults.
//! The store itself reads no configuration.

use serde::{Deserialize, Serialize};
use std::env;

/// Log directive used when neither `TODOMVC_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn,todomvc=info";

/// Binary configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `tracing-subscriber` env-filter directive
    pub log_filter: String,
    /// Start with the demo items instead of an empty list
    pub seed_demo: bool,
    /// Prompt printed before each REPL line
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_demo: false,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Load a `.env` file from the working directory if there is one, then
    /// read the environment. Variables already set win over the file.
    #[must_use]
    pub fn load() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            tracing::trace!(%err, "No .env file loaded");
        }
        Self::from_env()
    }

    /// Load configuration from environment variables.
    ///
    /// - `TODOMVC_LOG` (falls back to `RUST_LOG`, then [`DEFAULT_LOG_FILTER`])
    /// - `TODOMVC_SEED_DEMO` (`true`/`false`, default `false`)
    /// - `TODOMVC_PROMPT` (default `"> "`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if it is set. Unparseable values fall back to defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_filter: lookup("TODOMVC_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
            seed_demo: lookup("TODOMVC_SEED_DEMO")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.seed_demo),
            prompt: lookup("TODOMVC_PROMPT").unwrap_or(defaults.prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_in(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.seed_demo);
    }

    #[test]
    fn reads_variables() {
        let config = Config::from_lookup(lookup_in(&[
            ("TODOMVC_LOG", "debug"),
            ("TODOMVC_SEED_DEMO", "true"),
            ("TODOMVC_PROMPT", "todo> "),
        ]));
        assert_eq!(config.log_filter, "debug");
        assert!(config.seed_demo);
        assert_eq!(config.prompt, "todo> ");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let config = Config::from_lookup(lookup_in(&[("RUST_LOG", "trace")]));
        assert_eq!(config.log_filter, "trace");

        let config = Config::from_lookup(lookup_in(&[("RUST_LOG", "trace"), ("TODOMVC_LOG", "info")]));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_dotenv_file_contents() {
        let file = "# local overrides\nTODOMVC_SEED_DEMO=true\nTODOMVC_PROMPT=\"todo> \"\n";
        let vars: HashMap<String, String> = dotenvy::from_read_iter(file.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        let config = Config::from_lookup(|key: &str| vars.get(key).cloned());
        assert!(config.seed_demo);
        assert_eq!(config.prompt, "todo> ");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn bad_bool_falls_back() {
        let config = Config::from_lookup(lookup_in(&[("TODOMVC_SEED_DEMO", "yes please")]));
        assert!(!config.seed_demo);
    }
}
