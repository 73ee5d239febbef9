//! Mirror instance configuration.
//!
//! The endpoint list is deployment configuration, not part of the engine's
//! contract: the engine takes whatever ordered list it is given. Defaults
//! live here, overridable per invocation via `--instance` flags or the
//! `MIRRORTUBE_INSTANCES` environment variable.

/// Environment variable holding a comma-separated instance list.
pub const INSTANCES_ENV: &str = "MIRRORTUBE_INSTANCES";

/// Default mirror list, ordered by observed uptime.
pub const DEFAULT_INSTANCES: &[&str] = &[
    "https://pipedapi.kavin.rocks",
    "https://api.piped.privacy.com.de",
    "https://pipedapi.drgns.space",
    "https://api.piped.chalos.xyz",
    "https://pipedapi.tokhmi.xyz",
    "https://api.piped.projectsegfau.lt",
    "https://pipedapi.adminforge.de",
    "https://piped-api.lunar.icu",
];

/// Resolves the instance list: `--instance` flags win, then the
/// environment variable, then the built-in defaults.
pub fn resolve_instances(flags: &[String]) -> Vec<String> {
    if !flags.is_empty() {
        return flags.to_vec();
    }
    if let Ok(value) = std::env::var(INSTANCES_ENV) {
        let from_env = parse_instance_list(&value);
        if !from_env.is_empty() {
            return from_env;
        }
    }
    DEFAULT_INSTANCES.iter().map(ToString::to_string).collect()
}

/// Parses a comma-separated instance list, dropping empty segments.
pub fn parse_instance_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_win() {
        let flags = vec!["https://my.mirror".to_string()];
        assert_eq!(resolve_instances(&flags), flags);
    }

    #[test]
    fn test_defaults_are_non_empty() {
        assert!(!DEFAULT_INSTANCES.is_empty());
    }

    #[test]
    fn test_parse_instance_list() {
        let parsed = parse_instance_list("https://a.example, https://b.example,,");
        assert_eq!(parsed, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_instance_list("  ,").is_empty());
    }
}
