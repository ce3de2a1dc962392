use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build from an arbitrary key lookup; bad or zero timeouts fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = match lookup("RSS_FETCH_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let user_agent = match lookup("RSS_USER_AGENT") {
            Some(v) if !v.trim().is_empty() => v,
            _ => default_user_agent(),
        };
        FetchConfig { timeout, user_agent }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg(pairs: &[(&str, &str)]) -> FetchConfig {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        FetchConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = cfg(&[]);
        assert_eq!(c, FetchConfig::default());
        assert_eq!(c.timeout, Duration::from_secs(30));
        assert!(c.user_agent.starts_with("rss-reader/"));
    }

    #[test]
    fn overrides() {
        let c = cfg(&[("RSS_FETCH_TIMEOUT_SECS", "5"), ("RSS_USER_AGENT", "bot/1.0")]);
        assert_eq!(c.timeout, Duration::from_secs(5));
        assert_eq!(c.user_agent, "bot/1.0");
    }

    #[test]
    fn bad_timeout_falls_back() {
        for v in ["0", "-3", "soon", ""] {
            assert_eq!(cfg(&[("RSS_FETCH_TIMEOUT_SECS", v)]).timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS), "{v:?}");
        }
    }
}
