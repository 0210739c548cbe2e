//! Size negotiation between the slider and its host layout.
//!
//! Hosts describe what they allow on each axis with an [`AxisConstraint`];
//! [`preferred_size`] answers with the size the slider wants. Each axis is
//! resolved independently.
//!
//! ```
//! use tessera_range_slider::{
//!     Px, PxSize,
//!     constraint::{AxisConstraint, SizeConstraints, preferred_size},
//! };
//!
//! let default = PxSize::new(Px(100), Px(50));
//! let size = preferred_size(
//!     SizeConstraints::new(AxisConstraint::Exact(Px(320)), AxisConstraint::Unconstrained),
//!     default,
//! );
//! assert_eq!(size, PxSize::new(Px(320), Px(50)));
//! ```

use crate::px::{Px, PxSize};

/// What the host allows along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisConstraint {
    /// The host dictates the exact size.
    Exact(Px),
    /// The slider may be at most this large ("wrap content" in a bounded
    /// parent).
    AtMost(Px),
    /// The host imposes nothing.
    Unconstrained,
}

impl AxisConstraint {
    /// Resolves this axis: an exact size wins, anything else falls back to
    /// `default`.
    ///
    /// The default is not clamped to an `AtMost` bound.
    pub fn resolve(self, default: Px) -> Px {
        match self {
            AxisConstraint::Exact(px) => px,
            AxisConstraint::AtMost(_) | AxisConstraint::Unconstrained => default,
        }
    }
}

/// Per-axis constraints handed down by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeConstraints {
    /// Horizontal constraint.
    pub width: AxisConstraint,
    /// Vertical constraint.
    pub height: AxisConstraint,
}

impl SizeConstraints {
    /// Creates constraints from both axes.
    pub const fn new(width: AxisConstraint, height: AxisConstraint) -> Self {
        Self { width, height }
    }

    /// Both axes fixed.
    pub const fn exact(size: PxSize) -> Self {
        Self {
            width: AxisConstraint::Exact(size.width),
            height: AxisConstraint::Exact(size.height),
        }
    }

    /// Neither axis constrained.
    pub const UNCONSTRAINED: Self = Self {
        width: AxisConstraint::Unconstrained,
        height: AxisConstraint::Unconstrained,
    };
}

/// Returns the preferred size of the slider under `constraints`, using
/// `default` for every axis the host leaves open.
pub fn preferred_size(constraints: SizeConstraints, default: PxSize) -> PxSize {
    PxSize::new(
        constraints.width.resolve(default.width),
        constraints.height.resolve(default.height),
    )
}
