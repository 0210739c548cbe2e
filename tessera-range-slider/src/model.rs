//! Value space of the range slider.
//!
//! [`RangeModel`] holds the configured bounds and the two reported values.
//! It knows nothing about layout beyond the [`PixelSpan`] it is handed when
//! values are recomputed from handle positions.

use tracing::warn;

use crate::error::MappingError;

const DEFAULT_MIN_VALUE: i32 = 0;
const DEFAULT_MAX_VALUE: i32 = 100;

/// The pixel bounds of the draggable range.
///
/// `start_left_x` is the resting x of the left handle and maps to value `0`
/// offset; `start_right_x` is the resting x of the right handle and maps to
/// `max_value - min_value`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PixelSpan {
    /// Left bound of the draggable range.
    pub start_left_x: f32,
    /// Right bound of the draggable range.
    pub start_right_x: f32,
}

impl PixelSpan {
    /// Creates a span from its two bounds.
    pub const fn new(start_left_x: f32, start_right_x: f32) -> Self {
        Self {
            start_left_x,
            start_right_x,
        }
    }

    /// Signed width of the span.
    pub fn width(&self) -> f32 {
        self.start_right_x - self.start_left_x
    }

    /// Maps `pixel_x` into value space; see [`map_pixel_to_value`].
    pub fn value_at(
        &self,
        pixel_x: f32,
        min_value: i32,
        max_value: i32,
    ) -> Result<i32, MappingError> {
        map_pixel_to_value(
            pixel_x,
            self.start_left_x,
            self.start_right_x,
            min_value,
            max_value,
        )
    }
}

/// Converts a handle pixel position into a reported value.
///
/// Computes `(max_value - min_value) * (pixel_x - start_left_x) /
/// (start_right_x - start_left_x)` and truncates toward zero. The result is
/// an offset within the range: `min_value` is not added back.
///
/// ```
/// use tessera_range_slider::model::map_pixel_to_value;
///
/// assert_eq!(map_pixel_to_value(60.0, 10.0, 210.0, 0, 100), Ok(25));
/// // 100 * 49.9 / 200 = 24.95, truncated
/// assert_eq!(map_pixel_to_value(59.9, 10.0, 210.0, 0, 100), Ok(24));
/// ```
///
/// # Errors
///
/// [`MappingError::DegenerateTrack`] when the span has zero width and
/// [`MappingError::NonFinite`] when the arithmetic leaves the finite range.
pub fn map_pixel_to_value(
    pixel_x: f32,
    start_left_x: f32,
    start_right_x: f32,
    min_value: i32,
    max_value: i32,
) -> Result<i32, MappingError> {
    let span = start_right_x - start_left_x;
    if span == 0.0 {
        return Err(MappingError::DegenerateTrack {
            start_left_x,
            start_right_x,
        });
    }
    let range = max_value.wrapping_sub(min_value) as f32;
    let value = range * (pixel_x - start_left_x) / span;
    if !value.is_finite() {
        return Err(MappingError::NonFinite { pixel_x });
    }
    Ok(value as i32)
}

/// Configured bounds plus the two values last derived from the handles.
///
/// `max_value < min_value` is accepted; the resulting values are then
/// negative or inverted, which is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeModel {
    min_value: i32,
    max_value: i32,
    left_value: i32,
    right_value: i32,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeModel {
    /// A model over `0..=100` with the full range selected.
    pub fn new() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            left_value: DEFAULT_MIN_VALUE,
            right_value: DEFAULT_MAX_VALUE,
        }
    }

    /// Lower bound of the value range.
    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    /// Upper bound of the value range.
    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    /// `(left_value, right_value)`.
    pub fn values(&self) -> (i32, i32) {
        (self.left_value, self.right_value)
    }

    /// Sets the lower bound; negative input is stored as `0`.
    ///
    /// Reported values are not recomputed until the next layout or move.
    pub fn set_min_value(&mut self, min_value: i32) {
        self.min_value = min_value.max(0);
    }

    /// Sets the upper bound; negative input is stored as `0`.
    ///
    /// Reported values are not recomputed until the next layout or move.
    pub fn set_max_value(&mut self, max_value: i32) {
        self.max_value = max_value.max(0);
    }

    /// Recomputes both values from the handle positions.
    ///
    /// Either both values change or neither does: if one position fails to
    /// map, the previous pair is kept and the error is returned.
    pub fn recompute(
        &mut self,
        span: PixelSpan,
        left_x: f32,
        right_x: f32,
    ) -> Result<(i32, i32), MappingError> {
        let mapped = span
            .value_at(left_x, self.min_value, self.max_value)
            .and_then(|left| {
                span.value_at(right_x, self.min_value, self.max_value)
                    .map(|right| (left, right))
            });
        match mapped {
            Ok((left, right)) => {
                self.left_value = left;
                self.right_value = right;
                Ok((left, right))
            }
            Err(err) => {
                warn!(%err, "keeping previous range values");
                Err(err)
            }
        }
    }
}
