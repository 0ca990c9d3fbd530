//! Path helpers for user-supplied locations

use std::path::{Path, PathBuf};

/// Expand a leading `~` against `home`.
///
/// `~` alone and `~/rest` are expanded; `~user` forms and every other input
/// are returned unchanged.
pub fn expand_home(input: &str, home: &Path) -> PathBuf {
    let trimmed = input.trim();
    if trimmed == "~" {
        return home.to_path_buf();
    }
    match trimmed.strip_prefix("~/") {
        Some(rest) => home.join(rest.trim_start_matches('/')),
        None => PathBuf::from(trimmed),
    }
}

/// Remove `suffix` from the end of `path`, component-wise.
///
/// `strip_trailing_components("/opt/clj/bin/clojure", "bin/clojure")`
/// yields `/opt/clj`. Returns `None` when `path` does not end with `suffix`.
pub fn strip_trailing_components(path: &Path, suffix: &Path) -> Option<PathBuf> {
    if !path.ends_with(suffix) {
        return None;
    }
    let mut stripped = path.to_path_buf();
    for _ in suffix.components() {
        stripped.pop();
    }
    Some(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_tilde_forms() {
        let home = Path::new("/home/dev");
        assert_eq!(expand_home("~", home), PathBuf::from("/home/dev"));
        assert_eq!(expand_home("~/.clojure", home), PathBuf::from("/home/dev/.clojure"));
        assert_eq!(expand_home("  ~/x ", home), PathBuf::from("/home/dev/x"));
    }

    #[test]
    fn expand_home_leaves_other_paths() {
        let home = Path::new("/home/dev");
        assert_eq!(expand_home("/opt/clojure", home), PathBuf::from("/opt/clojure"));
        assert_eq!(expand_home("~other/x", home), PathBuf::from("~other/x"));
    }

    #[test]
    fn strip_trailing_components_matches_whole_components() {
        let stripped =
            strip_trailing_components(Path::new("/opt/clj/bin/clojure"), Path::new("bin/clojure"));
        assert_eq!(stripped, Some(PathBuf::from("/opt/clj")));

        let mismatch =
            strip_trailing_components(Path::new("/opt/clj/sbin/clojure"), Path::new("bin/clojure"));
        assert_eq!(mismatch, None);
    }
}
