use thiserror::Error;

/// Errors raised while defining entity kinds.
///
/// Everything past kind definition degrades to a no-op instead of failing:
/// unknown or detached handles, degenerate geometry and missing elements are
/// all skipped silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("kind `{0}` declares no channels")]
    NoChannels(&'static str),
    #[error("kind `{kind}` declares {count} channels (max {max})")]
    TooManyChannels {
        kind: &'static str,
        count: usize,
        max: usize,
    },
    #[error("kind `{kind}` declares channel `{axis}` twice")]
    DuplicateChannel {
        kind: &'static str,
        axis: &'static str,
    },
    #[error("kind `{kind}` smoothing factor {factor} outside (0, 1]")]
    InvalidSmoothing { kind: &'static str, factor: f32 },
    #[error("kind `{kind}` settle epsilon {epsilon} must be positive and finite")]
    InvalidEpsilon { kind: &'static str, epsilon: f32 },
}
