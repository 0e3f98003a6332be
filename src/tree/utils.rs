//! Shared utility functions for tree scanning

use std::path::{Path, PathBuf};

/// Normalize an extension token: trim, add a leading `.` if missing, lowercase.
/// Returns `None` for empty tokens.
pub fn normalize_extension(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() || token == "." {
        return None;
    }
    let ext = if token.starts_with('.') {
        token.to_lowercase()
    } else {
        format!(".{}", token.to_lowercase())
    };
    Some(ext)
}

/// Split a comma-separated list, trimming tokens and dropping empty ones.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Lowercased suffix of a file name including the dot, or `""` when the
/// name has no extension (`Makefile`, `.bashrc`, `notes.`).
pub fn file_suffix(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}

/// Get the name of a path, falling back to the whole path (e.g. `/`).
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Make the scan root absolute. Canonicalizes when the path exists so the
/// root name is never `.` or `..`.
pub fn resolve_root(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("py").as_deref(), Some(".py"));
        assert_eq!(normalize_extension(".py").as_deref(), Some(".py"));
        assert_eq!(normalize_extension(" .Md ").as_deref(), Some(".md"));
        assert_eq!(normalize_extension("tar.gz").as_deref(), Some(".tar.gz"));
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("   "), None);
        assert_eq!(normalize_extension("."), None);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a, b,,c ,"), vec!["a", "b", "c"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_file_suffix() {
        assert_eq!(file_suffix(Path::new("main.RS")), ".rs");
        assert_eq!(file_suffix(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(file_suffix(Path::new("Makefile")), "");
        assert_eq!(file_suffix(Path::new(".bashrc")), "");
        assert_eq!(file_suffix(Path::new("notes.")), "");
    }

    #[test]
    fn test_get_name() {
        assert_eq!(get_name(Path::new("/tmp/project")), "project");
        assert_eq!(get_name(Path::new("/")), "/");
    }

    #[test]
    fn test_resolve_root_missing_path_is_absolute() {
        let root = resolve_root(Path::new("definitely/not/here"));
        assert!(root.is_absolute());
        assert!(root.ends_with("definitely/not/here"));
    }
}
