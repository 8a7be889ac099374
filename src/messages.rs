/// Message templates used by the batch executor. Placeholders are literal
/// `{name}`, `{path}`, `{err}`, `{count}` and `{kind}` markers substituted
/// with [`fill`]. The executor receives a `&Messages` so alternative
/// catalogs can be swapped in.
#[derive(Debug, Clone)]
pub struct Messages {
    pub file_exists: &'static str,
    pub folder_exists: &'static str,
    pub not_found: &'static str,
    pub already_exists: &'static str,
    pub permission_denied: &'static str,
    pub unexpected: &'static str,
    pub renamed_summary: &'static str,
    pub created_summary: &'static str,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            file_exists: "File '{name}' already exists. Skipping...",
            folder_exists: "Folder '{name}' already exists. Skipping...",
            not_found: "'{path}' not found.",
            already_exists: "'{path}' already exists.",
            permission_denied: "Permission denied for '{path}'.",
            unexpected: "An unexpected error occurred: {err}",
            renamed_summary: "*** Renamed {count} {kind} Successfully! ***",
            created_summary: "*** Created {count} Folder(s) Successfully! ***",
        }
    }
}

/// Substitutes `{key}` markers in a template.
#[must_use]
pub fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_single_placeholder() {
        assert_eq!(
            fill("File '{name}' already exists. Skipping...", &[("name", "a.txt")]),
            "File 'a.txt' already exists. Skipping..."
        );
    }

    #[test]
    fn test_fill_multiple_placeholders() {
        assert_eq!(
            fill(
                "*** Renamed {count} {kind} Successfully! ***",
                &[("count", "3"), ("kind", "File(s)")]
            ),
            "*** Renamed 3 File(s) Successfully! ***"
        );
    }

    #[test]
    fn test_fill_leaves_unknown_markers() {
        assert_eq!(fill("keep {other}", &[("name", "x")]), "keep {other}");
    }
}
