//! Error types of the range slider core.
//!
//! None of these abort an interaction: the control falls back to its previous
//! state and logs. They are returned from the pure functions so callers can
//! tell a real value from a fallback.

use thiserror::Error;

/// Failure to map a handle pixel position into value space.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MappingError {
    /// The draggable range has zero width, so every position maps to a
    /// division by zero.
    #[error("degenerate track: start_left_x ({start_left_x}) == start_right_x ({start_right_x})")]
    DegenerateTrack {
        /// Left bound of the draggable range.
        start_left_x: f32,
        /// Right bound of the draggable range.
        start_right_x: f32,
    },
    /// The mapping produced NaN or an infinity (non-finite input position).
    #[error("pixel position {pixel_x} does not map to a finite value")]
    NonFinite {
        /// The offending pixel position.
        pixel_x: f32,
    },
}

/// Failure to resolve a [`RangeSliderStyle`](crate::style::RangeSliderStyle).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StyleError {
    /// The scale factor must be finite and strictly positive.
    #[error("invalid scale factor {0}; expected a finite value > 0")]
    InvalidScaleFactor(f64),
}
