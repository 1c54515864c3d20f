//! Display-name sanitization.

/// Strips everything but ASCII letters, digits, underscores and spaces,
/// then trims the edges.
///
/// Inner spaces and letter case survive. The result may be empty — an
/// empty display name is accepted, matching the permissive upstream
/// behavior (see DESIGN.md).
pub(crate) fn sanitize_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ' ')
        .collect();
    kept.trim().to_string()
}
