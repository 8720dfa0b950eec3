use std::path::{Path, PathBuf};

pub fn is_url(locator: &str) -> bool {
    locator.contains("://")
}

/// Heuristic for telling a file locator apart from a property path in the
/// string reference grammar: path separators, a URL scheme, or a recognized
/// document extension.
pub fn looks_like_locator(s: &str) -> bool {
    if s.contains("://") || s.contains('/') || s.contains('\\') {
        return true;
    }
    s.ends_with(".yaml") || s.ends_with(".yml") || s.ends_with(".json")
}

/// Expand "~/" and resolve relative paths against base_dir.
pub fn expand_path(raw_path: &str, base_dir: &Path) -> PathBuf {
    let path_str = raw_path.trim();

    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    let p = PathBuf::from(path_str);
    if p.is_absolute() {
        return p;
    }
    base_dir.join(p)
}

/// Directory containing `locator`, used to re-base nested file references.
/// URL locators have no local containing directory; callers keep their
/// current base.
pub fn locator_parent(locator: &str, base_dir: &Path) -> Option<PathBuf> {
    if is_url(locator) {
        return None;
    }
    expand_path(locator, base_dir)
        .parent()
        .map(Path::to_path_buf)
}
