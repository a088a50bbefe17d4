//! Renderer error types.

use thiserror::Error;

/// Rejected camera configurations.
///
/// A `Camera` is validated at construction, so a render call can never see
/// an invalid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("camera target coincides with the eye position")]
    DegenerateLookDirection,

    #[error("world up is parallel to the look direction")]
    DegenerateUp,
}
