//! Build configuration.

use std::path::PathBuf;

use crate::Variant;

/// Default palette source, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "src/dracula.yml";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "theme";

/// Where to read the palette from and what to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub source: PathBuf,
    pub out_dir: PathBuf,
    /// Variants to write. Empty means all of them.
    pub variants: Vec<Variant>,
    /// Write the files on separate threads.
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            variants: Vec::new(),
            parallel: true,
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Restricts the build to the given variants.
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }

    /// Writes the files one after another.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The variants to build, deduplicated and in output order.
    pub fn selected_variants(&self) -> Vec<Variant> {
        if self.variants.is_empty() {
            return Variant::ALL.to_vec();
        }
        let mut selected = self.variants.clone();
        selected.sort();
        selected.dedup();
        selected
    }
}
