//! Flip-clock digit planning.

/// Zero-padded two-digit face, as shown on each flip card.
#[inline]
pub fn two_digits(value: u32) -> String {
    format!("{:02}", value)
}

/// One pending flip from the currently shown face to the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flip {
    pub from: String,
    pub to: String,
}

/// Plan the flip for a digit pair currently showing `shown`.
///
/// `None` when the face already reads `value`.
pub fn plan_flip(shown: &str, value: u32) -> Option<Flip> {
    let next = two_digits(value);
    if shown.trim() == next {
        return None;
    }
    Some(Flip {
        from: shown.trim().to_string(),
        to: next,
    })
}
