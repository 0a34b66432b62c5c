use crate::error::{EngineError, Result};
use derive_builder::Builder;
use hashbrown::HashSet;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "tests/";
pub const DEFAULT_EXTENSION: &str = "rs";

pub type ExcludedNames = HashSet<String>;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    /// Extensions without the leading dot.
    #[builder(default = "vec![DEFAULT_EXTENSION.to_string()]")]
    pub extensions: Vec<String>,
    /// Bare file names that are never counted.
    #[builder(default)]
    pub excluded_names: ExcludedNames,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            excluded_names: ExcludedNames::new(),
        }
    }
}

impl FilterConfig {
    /// Normalizes extensions (`.rs` and `rs` are equivalent) and rejects empty ones.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] when no extension is configured or one is blank.
    pub fn normalized(mut self) -> Result<Self> {
        if self.extensions.is_empty() {
            return Err(EngineError::Config(
                "at least one extension is required".to_string(),
            ));
        }
        for ext in &mut self.extensions {
            let trimmed = ext.trim().trim_start_matches('.');
            if trimmed.is_empty() {
                return Err(EngineError::Config(format!("invalid extension: '{ext}'")));
            }
            *ext = trimmed.to_string();
        }
        Ok(self)
    }

    /// Suffix match on the file name, so `foo.rs` and `.rs` both match `rs`.
    pub fn matches_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            name.strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,
}
