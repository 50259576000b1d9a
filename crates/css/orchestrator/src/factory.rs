//! Loading, caching and combining style sheets.
//!
//! Sheets loaded by path are parsed once and cached for as long as the factory stays
//! initialised; the first successful parse for a path wins and is never replaced.
//! Inline sheets are parsed on every request and never touch the cache.

extern crate alloc;

use crate::config::FactoryConfig;
use crate::source::{FileSystemSource, StyleSource, decode};
use alloc::sync::Arc;
use anyhow::{Result, anyhow};
use css_cascade::StyleSheet;
use css_selectors::{SelectorRegistry, StructuralSelector};
use css_syntax::parse_stylesheet_at;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};

/// State that exists between `initialise` and `shutdown`.
struct FactoryInstance {
    /// Structural pseudo-class table.
    registry: SelectorRegistry,
    /// Parsed sheets keyed by source path. Append-only.
    sheets: RwLock<HashMap<String, Arc<StyleSheet>>>,
    /// Serialises cache misses so a path is parsed at most once.
    load_lock: Mutex<()>,
}

impl FactoryInstance {
    fn new() -> Self {
        Self {
            registry: SelectorRegistry::new(),
            sheets: RwLock::new(HashMap::new()),
            load_lock: Mutex::new(()),
        }
    }

    fn cached(&self, path: &str) -> Option<Arc<StyleSheet>> {
        self.sheets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .map(Arc::clone)
    }
}

/// Owner of the style sheet cache and the structural selector registry.
///
/// Create one per styling subsystem, call [`initialise`](Self::initialise) at startup and
/// [`shutdown`](Self::shutdown) at teardown. While uninitialised every load yields nothing
/// and every selector resolves to [`StructuralSelector::NONE`].
pub struct StyleSheetFactory {
    config: FactoryConfig,
    source: Arc<dyn StyleSource>,
    instance: Option<FactoryInstance>,
}

impl Default for StyleSheetFactory {
    #[inline]
    fn default() -> Self {
        Self::new(FactoryConfig::default())
    }
}

impl StyleSheetFactory {
    /// A factory reading sheets from the file system.
    pub fn new(config: FactoryConfig) -> Self {
        let source = FileSystemSource::new(config.base_dir.clone());
        Self::with_source(config, source)
    }

    /// A factory reading sheets from `source`.
    pub fn with_source<S>(config: FactoryConfig, source: S) -> Self
    where
        S: StyleSource + 'static,
    {
        Self {
            config,
            source: Arc::new(source),
            instance: None,
        }
    }

    /// Set up the cache and registry. Calling it again while initialised does nothing.
    pub fn initialise(&mut self) {
        if self.instance.is_none() {
            debug!("initialising style sheet factory");
            self.instance = Some(FactoryInstance::new());
        }
    }

    /// Drop the cache and registry. Does nothing if not initialised.
    pub fn shutdown(&mut self) {
        if let Some(instance) = self.instance.take() {
            let cached = instance
                .sheets
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len();
            debug!("shutting down style sheet factory ({cached} cached sheets)");
        }
    }

    #[inline]
    pub const fn is_initialised(&self) -> bool {
        self.instance.is_some()
    }

    #[inline]
    pub const fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Number of sheets currently cached.
    pub fn cached_len(&self) -> usize {
        self.instance.as_ref().map_or(0, |instance| {
            instance
                .sheets
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        })
    }

    /// The sheet at `path`, parsing and caching it on first use.
    ///
    /// A cached path returns the same instance without reading the source again. A failed
    /// read or parse returns `None` and leaves the cache untouched, so a later call retries.
    pub fn load_by_path(&self, path: &str) -> Option<Arc<StyleSheet>> {
        let Some(instance) = self.instance.as_ref() else {
            warn!("style sheet factory used before initialise; ignoring {path}");
            return None;
        };
        if let Some(sheet) = instance.cached(path) {
            trace!("style sheet cache hit for {path}");
            return Some(sheet);
        }

        let _guard = instance
            .load_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have finished the same load while we waited.
        if let Some(sheet) = instance.cached(path) {
            return Some(sheet);
        }

        match self.read_and_parse(path) {
            Ok(sheet) => {
                let sheet = Arc::new(sheet);
                instance
                    .sheets
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(path.to_owned(), Arc::clone(&sheet));
                debug!("cached style sheet {path} ({} rules)", sheet.len());
                Some(sheet)
            }
            Err(err) => {
                warn!("{err:#}");
                None
            }
        }
    }

    /// Parse inline `content` as a sheet. Never cached.
    ///
    /// `virtual_path` names the content in diagnostics and `start_line` is the line the
    /// content begins on in its enclosing document.
    pub fn load_by_content(
        &self,
        content: &str,
        virtual_path: &str,
        start_line: u32,
    ) -> Option<StyleSheet> {
        if self.instance.is_none() {
            warn!("style sheet factory used before initialise; ignoring {virtual_path}");
            return None;
        }
        match self.parse(content, virtual_path, start_line) {
            Ok(sheet) => Some(sheet),
            Err(err) => {
                warn!("{err:#}");
                None
            }
        }
    }

    /// Merge the sheet at `path` into `destination`. Returns whether anything was merged.
    pub fn combine_style_sheet(&self, destination: &mut StyleSheet, path: &str) -> bool {
        let Some(sheet) = self.load_by_path(path) else {
            return false;
        };
        destination.combine(&sheet);
        true
    }

    /// Merge inline `content` into `destination`. Returns whether anything was merged.
    pub fn combine_style_sheet_content(
        &self,
        destination: &mut StyleSheet,
        content: &str,
        virtual_path: &str,
        start_line: u32,
    ) -> bool {
        let Some(sheet) = self.load_by_content(content, virtual_path, start_line) else {
            return false;
        };
        destination.combine(&sheet);
        true
    }

    /// Resolve a structural pseudo-class such as `nth-child(2n+1)`.
    pub fn get_selector(&self, name: &str) -> StructuralSelector {
        self.instance
            .as_ref()
            .map_or(StructuralSelector::NONE, |instance| {
                instance.registry.resolve(name)
            })
    }

    fn read_and_parse(&self, path: &str) -> Result<StyleSheet> {
        let bytes = self.source.read(path)?;
        let text = decode(bytes, path)?;
        self.parse(&text, path, 1)
    }

    fn parse(&self, text: &str, source_path: &str, start_line: u32) -> Result<StyleSheet> {
        let parsed = parse_stylesheet_at(text, start_line);
        if !parsed.is_clean() {
            for diagnostic in &parsed.diagnostics {
                warn!("{source_path}:{diagnostic}");
            }
            return Err(anyhow!(
                "failed to parse style sheet {source_path}: {} invalid rule(s)",
                parsed.diagnostics.len()
            ));
        }
        Ok(StyleSheet::from_parsed(parsed.sheet, self.config.origin))
    }
}
