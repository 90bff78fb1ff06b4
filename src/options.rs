//! Per-call conversion settings.

use crate::{ExecutionMode, FillMode};

/// Settings for one conversion.
///
/// ```
/// use chanswiz::{ConvertOptions, ExecutionMode, FillMode};
///
/// let opts = ConvertOptions::new()
///     .with_fill(FillMode::Min)
///     .with_mode(ExecutionMode::Scalar);
/// assert_eq!(opts.fill, FillMode::Min);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ConvertOptions {
    /// Value policy for target channels the source lacks.
    pub fill: FillMode,
    /// Kernel preference; `Auto` defers to capability detection.
    pub mode: ExecutionMode,
}

impl ConvertOptions {
    /// Fill toward maximum, automatic kernel selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}
