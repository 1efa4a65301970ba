//! URL slugs derived from photo titles.

/// Convert a title into a URL slug.
///
/// Lowercases, drops everything but word characters, whitespace, and
/// hyphens, collapses whitespace/underscore runs into a single hyphen, and
/// trims leading and trailing hyphens. Non-ASCII letters (Hebrew titles)
/// are kept.
pub fn title_to_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_sep = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() || ch == '_' {
            pending_sep = true;
        } else if ch.is_alphanumeric() || ch == '-' {
            if pending_sep {
                slug.push('-');
                pending_sep = false;
            }
            slug.push(ch);
        }
    }

    slug.trim_matches('-').to_string()
}
