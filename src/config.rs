//! Runtime configuration read from `CUISENAIRE_*` environment variables.

use tracing::warn;

use crate::types::{is_valid_target, DEFAULT_TARGET_WIDTH, MAX_TARGET_WIDTH, MIN_TARGET_WIDTH};

pub const DEFAULT_FRAME_MS: u64 = 50;
const MIN_FRAME_MS: u64 = 10;
const MAX_FRAME_MS: u64 = 1000;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Target width used by the first start.
    pub target_width: u32,
    /// Seed for the rod generator; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Log file; logging is off when unset.
    pub log_path: Option<String>,
    /// Upper bound on how long the loop waits for input between frames.
    pub frame_ms: u64,
    /// Start with the instructions panel hidden.
    pub hide_instructions: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            seed: None,
            log_path: None,
            frame_ms: DEFAULT_FRAME_MS,
            hide_instructions: false,
        }
    }
}

const LOG_PATH_KEY: &str = "CUISENAIRE_LOG_PATH";

impl AppConfig {
    /// Create from environment variables.
    ///
    /// Invalid values are reported with `warn!`, so install the log subscriber
    /// (see [`AppConfig::log_path_from_env`]) before calling this.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Only the log file path, read ahead of the rest so logging is up before
    /// any other value is validated.
    pub fn log_path_from_env() -> Option<String> {
        read(env_lookup, LOG_PATH_KEY)
    }

    /// Build from any key lookup. Malformed values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| read(&lookup, key);

        let target_width = match get("CUISENAIRE_TARGET_WIDTH") {
            None => DEFAULT_TARGET_WIDTH,
            Some(raw) => match raw.parse::<u32>() {
                Ok(w) if is_valid_target(w) => w,
                Ok(w) => {
                    warn!(
                        value = w,
                        min = MIN_TARGET_WIDTH,
                        max = MAX_TARGET_WIDTH,
                        "CUISENAIRE_TARGET_WIDTH out of range, using default"
                    );
                    DEFAULT_TARGET_WIDTH
                }
                Err(_) => {
                    warn!(value = %raw, "CUISENAIRE_TARGET_WIDTH is not a number, using default");
                    DEFAULT_TARGET_WIDTH
                }
            },
        };

        let seed = get("CUISENAIRE_SEED").and_then(|s| match s.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(value = %s, "CUISENAIRE_SEED is not a u64, using a random seed");
                None
            }
        });

        let frame_ms = match get("CUISENAIRE_FRAME_MS") {
            None => DEFAULT_FRAME_MS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) => ms.clamp(MIN_FRAME_MS, MAX_FRAME_MS),
                Err(_) => {
                    warn!(value = %raw, "CUISENAIRE_FRAME_MS is not a number, using default");
                    DEFAULT_FRAME_MS
                }
            },
        };

        let hide_instructions = get("CUISENAIRE_HIDE_HELP")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            target_width,
            seed,
            log_path: get(LOG_PATH_KEY),
            frame_ms,
            hide_instructions,
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Trimmed value of `key`; blank counts as unset.
fn read(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }

    #[test]
    fn test_reads_all_keys() {
        let c = config(&[
            ("CUISENAIRE_TARGET_WIDTH", "15"),
            ("CUISENAIRE_SEED", "42"),
            ("CUISENAIRE_LOG_PATH", " /tmp/rods.log "),
            ("CUISENAIRE_FRAME_MS", "100"),
            ("CUISENAIRE_HIDE_HELP", "TRUE"),
        ]);
        assert_eq!(c.target_width, 15);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.log_path.as_deref(), Some("/tmp/rods.log"));
        assert_eq!(c.frame_ms, 100);
        assert!(c.hide_instructions);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let c = config(&[
            ("CUISENAIRE_TARGET_WIDTH", "25"),
            ("CUISENAIRE_SEED", "abc"),
            ("CUISENAIRE_LOG_PATH", "   "),
            ("CUISENAIRE_FRAME_MS", "fast"),
        ]);
        assert_eq!(c.target_width, DEFAULT_TARGET_WIDTH);
        assert_eq!(c.seed, None);
        assert_eq!(c.log_path, None);
        assert_eq!(c.frame_ms, DEFAULT_FRAME_MS);
    }

    #[test]
    fn test_frame_ms_is_clamped() {
        assert_eq!(config(&[("CUISENAIRE_FRAME_MS", "1")]).frame_ms, 10);
        assert_eq!(config(&[("CUISENAIRE_FRAME_MS", "99999")]).frame_ms, 1000);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn warnings(pairs: &[(&str, &str)]) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            config(pairs);
        });
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_invalid_values_are_logged() {
        let logged = warnings(&[
            ("CUISENAIRE_TARGET_WIDTH", "abc"),
            ("CUISENAIRE_SEED", "-1"),
            ("CUISENAIRE_FRAME_MS", "fast"),
        ]);
        assert!(logged.contains("WARN"));
        assert!(logged.contains("CUISENAIRE_TARGET_WIDTH is not a number"));
        assert!(logged.contains("abc"));
        assert!(logged.contains("CUISENAIRE_SEED is not a u64"));
        assert!(logged.contains("CUISENAIRE_FRAME_MS is not a number"));
        assert!(logged.contains("fast"));
    }

    #[test]
    fn test_out_of_range_target_is_logged_with_value() {
        let logged = warnings(&[("CUISENAIRE_TARGET_WIDTH", "25")]);
        assert!(logged.contains("CUISENAIRE_TARGET_WIDTH out of range"));
        assert!(logged.contains("value=25"));
        assert!(!logged.contains("is not a number"));
    }

    #[test]
    fn test_valid_values_log_nothing() {
        assert_eq!(warnings(&[("CUISENAIRE_TARGET_WIDTH", "12")]), "");
    }

    #[test]
    fn test_log_path_is_read_on_its_own() {
        assert_eq!(
            read(|_| Some("  /tmp/x.log ".to_string()), LOG_PATH_KEY).as_deref(),
            Some("/tmp/x.log")
        );
        assert_eq!(read(|_| Some("   ".to_string()), LOG_PATH_KEY), None);
        let _ = AppConfig::log_path_from_env();
    }
}
