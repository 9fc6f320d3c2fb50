//! Text helpers for dashboard cards.

/// Longest preview returned unchanged, in characters.
pub const PREVIEW_LIMIT: usize = 140;

/// Characters kept before the ellipsis when a preview is cut.
const PREVIEW_CUT: usize = PREVIEW_LIMIT - ELLIPSIS.len();

pub const ELLIPSIS: &str = "...";

/// Shorten `text` for a card preview.
///
/// Surrounding whitespace is trimmed first. Text of at most 140 characters is
/// returned as-is; longer text keeps its first 137 characters, drops trailing
/// whitespace from that cut, and gains `"..."`.
#[must_use]
pub fn preview(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= PREVIEW_LIMIT {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CUT).collect();
    format!("{}{ELLIPSIS}", cut.trim_end())
}
