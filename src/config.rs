//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root. The
//! interesting part is the responsive grid table: viewport-width breakpoints
//! mapped to column counts, which become the packing capacity for
//! [`crate::pack::pack_rows`].
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [grid]
//! # Below every breakpoint (phones), use this many columns.
//! columns = 2
//!
//! # Widest matching min_width wins.
//! breakpoints = [
//!     { min_width = 1280, columns = 6 },
//!     { min_width = 900,  columns = 4 },
//!     { min_width = 600,  columns = 3 },
//! ]
//!
//! [processing]
//! max_threads = 4   # Max parallel layout workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the phone column count
//! [grid]
//! columns = 1
//! ```
//!
//! Unknown keys are rejected to catch typos early. A column count of zero
//! anywhere is rejected at load time, so `pack_rows` never sees a capacity
//! it would refuse.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Responsive grid settings (breakpoints, column counts).
    pub grid: GridConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.columns == 0 {
            return Err(ConfigError::Validation(
                "grid.columns must be at least 1".into(),
            ));
        }
        for bp in &self.grid.breakpoints {
            if bp.columns == 0 {
                return Err(ConfigError::Validation(format!(
                    "grid.breakpoints: columns must be at least 1 (min_width = {})",
                    bp.min_width
                )));
            }
        }
        Ok(())
    }
}

/// Responsive grid settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Column count used below every breakpoint.
    pub columns: u32,
    /// Viewport-width thresholds. Order in the file does not matter; the
    /// matching breakpoint with the largest `min_width` wins.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            breakpoints: vec![
                Breakpoint {
                    min_width: 600,
                    columns: 3,
                },
                Breakpoint {
                    min_width: 900,
                    columns: 4,
                },
                Breakpoint {
                    min_width: 1280,
                    columns: 6,
                },
            ],
        }
    }
}

/// One viewport-width threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Breakpoint {
    /// Applies to viewports at least this many CSS pixels wide.
    pub min_width: u32,
    /// Grid columns (packing capacity) at and above `min_width`.
    pub columns: u32,
}

impl GridConfig {
    /// Column count for a measured viewport width.
    ///
    /// The viewport measurement itself belongs to the caller (a UI layer or
    /// the preview renderer); this is just the table lookup.
    pub fn columns_for_width(&self, viewport_width: u32) -> u32 {
        self.breakpoints
            .iter()
            .filter(|bp| bp.min_width <= viewport_width)
            .max_by_key(|bp| bp.min_width)
            .map(|bp| bp.columns)
            .unwrap_or(self.columns)
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel layout workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_threads: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_threads.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file does not exist. The loaded config is validated before return.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // columns_for_width tests
    // =========================================================================

    #[test]
    fn width_below_all_breakpoints_uses_base_columns() {
        let grid = GridConfig::default();
        assert_eq!(grid.columns_for_width(400), 2);
    }

    #[test]
    fn widest_matching_breakpoint_wins() {
        let grid = GridConfig::default();
        assert_eq!(grid.columns_for_width(700), 3);
        assert_eq!(grid.columns_for_width(1000), 4);
        assert_eq!(grid.columns_for_width(2560), 6);
    }

    #[test]
    fn breakpoint_boundary_is_inclusive() {
        let grid = GridConfig::default();
        assert_eq!(grid.columns_for_width(900), 4);
        assert_eq!(grid.columns_for_width(899), 3);
    }

    #[test]
    fn breakpoint_order_in_file_is_irrelevant() {
        let grid = GridConfig {
            columns: 1,
            breakpoints: vec![
                Breakpoint {
                    min_width: 1200,
                    columns: 5,
                },
                Breakpoint {
                    min_width: 500,
                    columns: 2,
                },
            ],
        };
        assert_eq!(grid.columns_for_width(1300), 5);
        assert_eq!(grid.columns_for_width(600), 2);
    }

    #[test]
    fn no_breakpoints_always_base_columns() {
        let grid = GridConfig {
            columns: 3,
            breakpoints: vec![],
        };
        assert_eq!(grid.columns_for_width(5000), 3);
    }

    // =========================================================================
    // Loading and validation tests
    // =========================================================================

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.grid.columns, 2);
        assert_eq!(config.grid.breakpoints.len(), 3);
    }

    #[test]
    fn sparse_config_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "[grid]\ncolumns = 1\n").unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.grid.columns, 1);
        // Unnamed fields keep their defaults.
        assert_eq!(config.grid.breakpoints.len(), 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "[grid]\ncolums = 3\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_columns_rejected_at_load() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "[grid]\ncolumns = 0\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn zero_breakpoint_columns_rejected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            "[grid]\nbreakpoints = [{ min_width = 600, columns = 0 }]\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "[grid\ncolumns = ").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn effective_threads_clamps_to_cores() {
        let cores = std::thread::available_parallelism().unwrap().get();
        assert_eq!(
            effective_threads(&ProcessingConfig {
                max_threads: Some(9999)
            }),
            cores
        );
        assert_eq!(effective_threads(&ProcessingConfig { max_threads: None }), cores);
        assert_eq!(
            effective_threads(&ProcessingConfig {
                max_threads: Some(1)
            }),
            1
        );
    }
}
