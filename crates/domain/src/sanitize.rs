//! Identifier sanitization shared by every generator.

/// Replace every character outside `[a-zA-Z0-9_]` with `_`, then lower-case.
///
/// The same input always yields the same token, so file names and group keys
/// derived from one id agree across area, floor, and label packages.
#[must_use]
pub fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
