//! Splitting `+++`-fenced TOML front matter from a Markdown body.

/// The fence line opening and closing the front matter.
pub const FENCE: &str = "+++";

/// Split a document into its front matter and body.
///
/// Returns `None` when the document does not open with a fence line or
/// the fence is never closed.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
