//! Factory configuration.

use css_cascade::Origin;
use std::path::PathBuf;

/// Settings for a [`crate::StyleSheetFactory`].
#[derive(Clone, Debug, Default)]
pub struct FactoryConfig {
    /// Directory relative sheet paths are resolved against. `None` uses the
    /// process working directory.
    pub base_dir: Option<PathBuf>,
    /// Cascade origin given to every loaded sheet.
    pub origin: Origin,
}

impl FactoryConfig {
    #[inline]
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}
