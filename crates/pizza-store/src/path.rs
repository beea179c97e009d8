//! # Path Safety Gate
//!
//! Every menu path goes through [`validate_menu_path`] before any file
//! system call.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                        Result                                    │
//! │  ─────                        ──────                                    │
//! │  data/pizza_menu.json         ✅ data/pizza_menu.json                   │
//! │  ./data/./menus/a.json        ✅ data/menus/a.json  ("." dropped)       │
//! │  data/../secret.json          ❌ parent segment                         │
//! │  /data/pizza_menu.json        ❌ absolute                               │
//! │  menu.json                    ❌ not under data/                        │
//! │  data                         ❌ no file name                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `..` is rejected outright rather than resolved, so `data/x/../y.json`
//! fails even though it would stay inside `data/`.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// The only directory the menu may live in.
pub const MENU_DIR: &str = "data";

/// Default relative location of the menu file.
pub const DEFAULT_MENU_PATH: &str = "data/pizza_menu.json";

/// Checks a relative menu path and returns its normalized form.
///
/// ## Example
/// ```rust
/// use pizza_store::path::validate_menu_path;
/// use std::path::Path;
///
/// let path = validate_menu_path("./data/pizza_menu.json").unwrap();
/// assert_eq!(path, Path::new("data/pizza_menu.json"));
///
/// assert!(validate_menu_path("data/../secret.json").is_err());
/// ```
pub fn validate_menu_path(path: impl AsRef<Path>) -> StoreResult<PathBuf> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                return Err(StoreError::unsafe_path(display, "absolute paths are not allowed"));
            }
            Component::ParentDir => {
                return Err(StoreError::unsafe_path(
                    display,
                    "parent directory segments are not allowed",
                ));
            }
            Component::CurDir => {}
            Component::Normal(part) => normalized.push(part),
        }
    }

    let mut parts = normalized.components();
    if parts.next() != Some(Component::Normal(OsStr::new(MENU_DIR))) {
        return Err(StoreError::unsafe_path(display, "path must be under data/"));
    }
    if parts.next().is_none() {
        return Err(StoreError::unsafe_path(display, "path must name a file"));
    }

    Ok(normalized)
}
