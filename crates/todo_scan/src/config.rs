// crates/todo_scan/src/config.rs

use std::env;
use todo_index::MarkerSet;

/// Environment variable holding a comma-separated marker list.
pub const MARKERS_ENV: &str = "TODO_MARKERS";

/// Where the marker keywords came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerSource {
    Flag,
    Env,
    Default,
}

/// Runtime configuration composed from CLI flags and the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub markers: MarkerSet,
    pub marker_source: MarkerSource,
    pub verbose: bool,
    pub quiet: bool,
}

impl AppConfig {
    /// `--markers` wins over `TODO_MARKERS`, which wins over the defaults.
    pub fn resolve(markers_flag: Option<&str>, verbose: bool, quiet: bool) -> Self {
        Self::resolve_with(markers_flag, env::var(MARKERS_ENV).ok(), verbose, quiet)
    }

    fn resolve_with(
        markers_flag: Option<&str>,
        markers_env: Option<String>,
        verbose: bool,
        quiet: bool,
    ) -> Self {
        let (markers, marker_source) = match (markers_flag, markers_env) {
            (Some(flag), _) => (MarkerSet::parse(flag), MarkerSource::Flag),
            (None, Some(from_env)) if !from_env.trim().is_empty() => {
                (MarkerSet::parse(&from_env), MarkerSource::Env)
            }
            _ => (MarkerSet::default(), MarkerSource::Default),
        };
        if markers.is_empty() {
            log::warn!("no usable marker keywords configured; nothing will match");
        }
        Self {
            markers,
            marker_source,
            verbose,
            quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flag_or_env() {
        let config = AppConfig::resolve_with(None, None, false, false);
        assert_eq!(config.marker_source, MarkerSource::Default);
        assert_eq!(config.markers.keywords(), vec!["TODO", "FIXME", "HACK", "XXX", "BUG"]);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = AppConfig::resolve_with(None, Some("NOTE,TODO".to_string()), false, false);
        assert_eq!(config.marker_source, MarkerSource::Env);
        assert_eq!(config.markers.keywords(), vec!["NOTE", "TODO"]);
    }

    #[test]
    fn blank_env_is_ignored() {
        let config = AppConfig::resolve_with(None, Some("  ".to_string()), false, false);
        assert_eq!(config.marker_source, MarkerSource::Default);
    }

    #[test]
    fn flag_beats_env() {
        let config =
            AppConfig::resolve_with(Some("HACK"), Some("NOTE".to_string()), true, false);
        assert_eq!(config.marker_source, MarkerSource::Flag);
        assert_eq!(config.markers.keywords(), vec!["HACK"]);
        assert!(config.verbose);
    }

    #[test]
    fn empty_flag_means_no_markers() {
        let config = AppConfig::resolve_with(Some(""), None, false, false);
        assert!(config.markers.is_empty());
    }
}
