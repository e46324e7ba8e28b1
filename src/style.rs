// CSS value formatting for side-channel writes.

#[inline]
pub fn px(value: f32) -> String {
    format!("{:.2}px", value)
}

#[inline]
pub fn pct(value: f32) -> String {
    format!("{:.3}%", value)
}

/// Parse a previously stamped card key.
#[inline]
pub fn parse_key(raw: Option<String>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse().ok())
}
