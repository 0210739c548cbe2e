//! Physical pixel lengths used by the range slider layout.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel length that supports negative values
//!   (a view narrower than its padding produces negative track bounds)
//! - [`PxSize`] - A 2D size in physical pixel space
//! - [`Padding`] - Horizontal padding that insets the track from the view edges
//!
//! Handle positions themselves are fractional (pointer coordinates are not
//! snapped to the pixel grid), so they are carried as `f32` and only the
//! configured dimensions live in [`Px`].
//!
//! # Example
//!
//! ```
//! use tessera_range_slider::px::{Px, PxSize};
//!
//! let size = PxSize::new(Px(240), Px(61));
//! assert_eq!(size.height.half(), Px(30));
//! assert_eq!(size.width.to_f32(), 240.0);
//! ```

use std::ops::Sub;

/// A physical pixel length.
///
/// Arithmetic mirrors plain `i32` arithmetic; [`Px::half`] uses integer
/// division, which the layout formulas depend on for odd handle sizes.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Half of this length, rounded toward zero.
    pub fn half(self) -> Self {
        Px(self.0 / 2)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// The width in physical pixels.
    pub width: Px,
    /// The height in physical pixels.
    pub height: Px,
}

impl PxSize {
    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    pub const fn square(edge: Px) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }
}

/// Horizontal padding between the view edges and the track end caps.
///
/// The track end caps are centered exactly on the padded edges, and the
/// handles rest centered on them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Distance from the left view edge to the left end cap center.
    pub left: Px,
    /// Distance from the right view edge to the right end cap center.
    pub right: Px,
}

impl Padding {
    /// Creates padding from left and right insets.
    pub const fn new(left: Px, right: Px) -> Self {
        Self { left, right }
    }

    /// Same inset on both sides.
    pub const fn symmetric(inset: Px) -> Self {
        Self {
            left: inset,
            right: inset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_rounds_toward_zero() {
        assert_eq!(Px(35).half(), Px(17));
        assert_eq!(Px(-35).half(), Px(-17));
        assert_eq!(Px(0).half(), Px(0));
    }

    #[test]
    fn narrow_view_minus_padding_goes_negative() {
        assert_eq!(Px(10) - Px(25), Px(-15));
        assert_eq!((Px(30) - Px(20)).to_f32() - Px(20).half().to_f32(), 0.0);
    }
}
