//! # Density-Independent Pixels (Dp)
//!
//! Style dimensions are declared in [`Dp`] and converted to physical pixels
//! once, when a [`RangeSliderStyle`](crate::style::RangeSliderStyle) is
//! resolved against the host's scale factor.
//!
//! The scale factor is always passed explicitly; the slider core keeps no
//! global density state.
//!
//! ```
//! use tessera_range_slider::{Dp, Px};
//!
//! let handle = Dp(35.0);
//! assert_eq!(handle.to_px(1.0), Px(35));
//! assert_eq!(handle.to_px(2.75), Px(96)); // 96.25 truncated
//! ```

use crate::px::Px;

/// Density-independent pixels.
///
/// One dp equals one physical pixel at a scale factor of `1.0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts this dp value to whole physical pixels, truncating toward zero.
    pub fn to_px(self, scale_factor: f64) -> Px {
        Px((self.0 * scale_factor) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_truncates() {
        assert_eq!(Dp(16.0).to_px(1.5), Px(24));
        assert_eq!(Dp(2.0).to_px(1.3), Px(2));
        assert_eq!(Dp(35.0).to_px(0.5), Px(17));
    }
}
