//! Theme catalog: a named registry with an always-valid active theme.
//!
//! The catalog owns every loaded [`Theme`] by name plus the active theme that
//! renderers consult. Activation is an atomic pointer swap: readers grab the
//! current `Arc<Theme>` lock-free, and a resolution that started before a swap
//! keeps using the theme it loaded. Registration and discovery take
//! `&mut self`; themes themselves are immutable and reconstructed wholesale on
//! reload.
//!
//! ## Change notification
//!
//! Consumers that cache or paint resolved styles subscribe with
//! [`ThemeCatalog::on_change`]; every activation — [`set_active`], [`use_theme`],
//! or a [`refresh`] that re-points the active name — invokes the listeners
//! with the newly active theme and nothing else.
//!
//! [`set_active`]: ThemeCatalog::set_active
//! [`use_theme`]: ThemeCatalog::use_theme
//! [`refresh`]: ThemeCatalog::refresh
//!
//! ## Discovery
//!
//! [`ThemeCatalog::load_dir`] walks a directory (non-recursive) for theme
//! files. When one base name exists with several recognized extensions, the
//! extension appearing earlier in [`THEME_EXTENSIONS`] wins. Files that fail
//! to parse are logged and skipped so one broken theme never blocks the rest.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use scopetint_resolve::Theme;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Recognized theme file extensions in resolution priority order.
pub const THEME_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Name the built-in fallback theme registers under.
pub const FALLBACK_THEME_NAME: &str = "plain";

/// Callback invoked with the newly activated theme.
pub type ChangeListener = Box<dyn Fn(&Arc<Theme>) + Send + Sync>;

/// The built-in do-nothing theme: no rules, all attributes unset, so every
/// scope resolves to the renderer's defaults.
static FALLBACK_THEME: Lazy<Arc<Theme>> =
    Lazy::new(|| Arc::new(Theme::default().with_name(FALLBACK_THEME_NAME)));

/// Registry of loaded themes and the active one.
pub struct ThemeCatalog {
    themes: BTreeMap<String, Arc<Theme>>,
    active: ArcSwap<Theme>,
    dirs: Vec<PathBuf>,
    listeners: Vec<ChangeListener>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeCatalog {
    /// Creates a catalog with the built-in fallback theme registered and
    /// active, so [`active`](Self::active) always has something to return.
    pub fn new() -> Self {
        let fallback = Arc::clone(&FALLBACK_THEME);
        let mut themes = BTreeMap::new();
        themes.insert(FALLBACK_THEME_NAME.to_string(), Arc::clone(&fallback));
        ThemeCatalog {
            themes,
            active: ArcSwap::new(fallback),
            dirs: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a parsed theme under a caller-chosen name, replacing any
    /// previous theme of that name.
    ///
    /// A theme that carries no document name adopts the registration name.
    /// Returns the registered handle.
    pub fn add_theme(&mut self, name: impl Into<String>, theme: Theme) -> Arc<Theme> {
        let name = name.into();
        let theme = if theme.name().is_some() {
            theme
        } else {
            theme.with_name(name.clone())
        };
        let theme = Arc::new(theme);
        self.themes.insert(name, Arc::clone(&theme));
        theme
    }

    /// Every registered theme name, sorted.
    pub fn list_theme_names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Looks up a registered theme by name.
    ///
    /// # Errors
    ///
    /// [`CatalogError::ThemeNotFound`] if no theme registered under `name`.
    pub fn load(&self, name: &str) -> Result<Arc<Theme>, CatalogError> {
        self.themes
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::ThemeNotFound(name.to_string()))
    }

    /// Activates a registered theme by name, notifying listeners.
    ///
    /// # Errors
    ///
    /// [`CatalogError::ThemeNotFound`] — the active theme and catalog state
    /// are left untouched.
    pub fn set_active(&self, name: &str) -> Result<(), CatalogError> {
        let theme = self.load(name)?;
        self.activate(theme);
        Ok(())
    }

    /// Activates a theme object directly, notifying listeners.
    ///
    /// The typed sibling of [`set_active`](Self::set_active) for callers that
    /// already hold a theme. A theme carrying a name is registered under it so
    /// it stays reachable by name; an unnamed theme is activated without
    /// appearing in the listing.
    pub fn use_theme(&mut self, theme: Theme) -> Arc<Theme> {
        let theme = match theme.name() {
            Some(name) => {
                let name = name.to_string();
                self.add_theme(name, theme)
            }
            None => Arc::new(theme),
        };
        self.activate(Arc::clone(&theme));
        theme
    }

    /// The currently active theme. Lock-free; never absent.
    pub fn active(&self) -> Arc<Theme> {
        self.active.load_full()
    }

    /// Subscribes to activation changes.
    pub fn on_change(&mut self, listener: impl Fn(&Arc<Theme>) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn activate(&self, theme: Arc<Theme>) {
        debug!(theme = theme.name().unwrap_or("<unnamed>"), "activating theme");
        self.active.store(Arc::clone(&theme));
        for listener in &self.listeners {
            listener(&theme);
        }
    }

    /// Loads one theme file and registers it.
    ///
    /// The registration name is the document's `name` when present, otherwise
    /// the file stem. `.json` files parse as JSON, everything else as YAML.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] if the file cannot be read,
    /// [`CatalogError::Malformed`] if its document is invalid.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<Theme>, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = if path.extension().is_some_and(|ext| ext == "json") {
            Theme::from_json(&content)
        } else {
            Theme::from_yaml(&content)
        };
        let theme = parsed.map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        let name = theme
            .name()
            .map(str::to_string)
            .or_else(|| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .unwrap_or_else(|| "untitled".to_string());
        Ok(self.add_theme(name, theme))
    }

    /// Discovers and registers every theme file in a directory.
    ///
    /// Non-recursive. Files are recognized by [`THEME_EXTENSIONS`]; when one
    /// base name carries several recognized extensions, the higher-priority
    /// extension wins. Unparseable files are logged and skipped. The directory
    /// is remembered for [`refresh`](Self::refresh).
    ///
    /// Returns the number of themes registered.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] if the directory cannot be read.
    pub fn load_dir(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        let files = discover_theme_files(path)?;
        let mut loaded = 0;
        for file in &files {
            match self.load_file(file) {
                Ok(theme) => {
                    debug!(
                        path = %file.display(),
                        theme = theme.name().unwrap_or("<unnamed>"),
                        "registered theme file"
                    );
                    loaded += 1;
                }
                Err(err) => {
                    warn!(path = %file.display(), error = %err, "skipping unloadable theme file");
                }
            }
        }
        if !self.dirs.iter().any(|dir| dir == path) {
            self.dirs.push(path.to_path_buf());
        }
        Ok(loaded)
    }

    /// Re-walks every directory previously given to
    /// [`load_dir`](Self::load_dir), re-registering themes wholesale.
    ///
    /// If the active theme's name still resolves after the reload, the active
    /// pointer moves to the freshly parsed instance and listeners are
    /// notified.
    ///
    /// Returns the number of themes registered.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] if a remembered directory cannot be read.
    pub fn refresh(&mut self) -> Result<usize, CatalogError> {
        let dirs = self.dirs.clone();
        let mut loaded = 0;
        for dir in dirs {
            loaded += self.load_dir(&dir)?;
        }
        let active_name = self.active().name().map(str::to_string);
        if let Some(name) = active_name {
            if let Ok(theme) = self.load(&name) {
                if !Arc::ptr_eq(&theme, &self.active()) {
                    self.activate(theme);
                }
            }
        }
        Ok(loaded)
    }
}

/// Walks one directory for theme files, applying extension priority per base
/// name. Results come back sorted for deterministic registration order.
fn discover_theme_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut best: BTreeMap<String, (usize, PathBuf)> = BTreeMap::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        let priority = match extension_priority(&file_name) {
            Some(priority) => priority,
            None => continue,
        };
        let stem = file_name[..file_name.len() - THEME_EXTENSIONS[priority].len()].to_string();
        let replace = match best.get(&stem) {
            Some((existing, _)) => priority < *existing,
            None => true,
        };
        if replace {
            best.insert(stem, (priority, path));
        }
    }

    Ok(best.into_values().map(|(_, path)| path).collect())
}

/// Position of the file's extension in [`THEME_EXTENSIONS`], if recognized.
fn extension_priority(file_name: &str) -> Option<usize> {
    THEME_EXTENSIONS
        .iter()
        .position(|ext| file_name.ends_with(ext))
}
