//! Swatch palette for learning streams created without a color.

/// Fallback swatch, also the column default in storage.
pub const DEFAULT_COLOR: &str = "#6366F1";

pub const COLOR_PALETTE: [&str; 6] = [
    "#6366F1", "#22C55E", "#F97316", "#EC4899", "#0EA5E9", "#FACC15",
];

/// Pick a palette swatch from an arbitrary seed.
#[must_use]
pub fn palette_color(seed: u64) -> &'static str {
    let len = COLOR_PALETTE.len() as u64;
    usize::try_from(seed % len)
        .ok()
        .and_then(|idx| COLOR_PALETTE.get(idx))
        .copied()
        .unwrap_or(DEFAULT_COLOR)
}
