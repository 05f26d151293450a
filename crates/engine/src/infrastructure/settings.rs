//! Runner configuration loaded from the environment.
//!
//! | Variable                   | Default            |
//! |----------------------------|--------------------|
//! | `CIVMOD_TEMPLATE_PATH`     | unset (blank doc)  |
//! | `CIVMOD_CATALOG_PATH`      | unset (no catalog) |
//! | `CIVMOD_EXPORT_PATH`       | `mod-export.json`  |
//! | `CIVMOD_EXPORT_PRETTY`     | `true`             |
//! | `CIVMOD_STRICT_EXPORT`     | `false`            |
//! | `CIVMOD_CATALOG_TTL_SECS`  | `300`              |

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_EXPORT_PATH: &str = "mod-export.json";
pub const DEFAULT_CATALOG_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    pub template_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub export_path: PathBuf,
    pub export_pretty: bool,
    /// Refuse to write the export while validation reports problems.
    pub strict_export: bool,
    pub catalog_ttl: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            template_path: None,
            catalog_path: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            export_pretty: true,
            strict_export: false,
            catalog_ttl: Duration::from_secs(DEFAULT_CATALOG_TTL_SECS),
        }
    }
}

impl WizardConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            template_path: text("CIVMOD_TEMPLATE_PATH").map(PathBuf::from),
            catalog_path: text("CIVMOD_CATALOG_PATH").map(PathBuf::from),
            export_path: text("CIVMOD_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
            export_pretty: parse_flag(
                "CIVMOD_EXPORT_PRETTY",
                text("CIVMOD_EXPORT_PRETTY"),
                defaults.export_pretty,
            ),
            strict_export: parse_flag(
                "CIVMOD_STRICT_EXPORT",
                text("CIVMOD_STRICT_EXPORT"),
                defaults.strict_export,
            ),
            catalog_ttl: text("CIVMOD_CATALOG_TTL_SECS")
                .and_then(|s| match s.parse::<u64>() {
                    Ok(secs) => Some(Duration::from_secs(secs)),
                    Err(_) => {
                        tracing::warn!(value = %s, "Invalid CIVMOD_CATALOG_TTL_SECS, using default");
                        None
                    }
                })
                .unwrap_or(defaults.catalog_ttl),
        }
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> bool {
    let Some(value) = value else {
        return default;
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value = %value, default, "Unrecognized boolean, using default");
            default
        }
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> WizardConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WizardConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), WizardConfig::default());
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = config_from(&[
            ("CIVMOD_TEMPLATE_PATH", " templates/rome.json "),
            ("CIVMOD_EXPORT_PATH", "out/rome.json"),
            ("CIVMOD_EXPORT_PRETTY", "no"),
            ("CIVMOD_STRICT_EXPORT", "TRUE"),
            ("CIVMOD_CATALOG_TTL_SECS", "5"),
        ]);
        assert_eq!(config.template_path, Some(PathBuf::from("templates/rome.json")));
        assert_eq!(config.export_path, PathBuf::from("out/rome.json"));
        assert!(!config.export_pretty);
        assert!(config.strict_export);
        assert_eq!(config.catalog_ttl, Duration::from_secs(5));
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config = config_from(&[
            ("CIVMOD_STRICT_EXPORT", "maybe"),
            ("CIVMOD_CATALOG_TTL_SECS", "soon"),
            ("CIVMOD_CATALOG_PATH", "   "),
        ]);
        assert!(!config.strict_export);
        assert_eq!(config.catalog_ttl, Duration::from_secs(DEFAULT_CATALOG_TTL_SECS));
        assert_eq!(config.catalog_path, None);
    }
}
