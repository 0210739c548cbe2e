//! A framework-independent dual-handle range slider.
//!
//! The crate holds the parts of a range slider that carry real invariants:
//! mapping handle pixel positions to integer values, constraining drags so
//! the handles never cross, deciding which handle a pointer grabs, and
//! describing the layered track for drawing. Window management, event
//! dispatch and the actual canvas belong to the host, which talks to the
//! slider through three calls:
//!
//! - [`RangeSlider::resize`] on every layout pass,
//! - [`RangeSlider::handle_pointer_event`] for pointer down/move/up,
//! - [`RangeSlider::render`] onto any [`DrawSurface`].
//!
//! # Values
//!
//! A value is `(max - min) * (x - start_left_x) / (start_right_x -
//! start_left_x)` truncated toward zero, where `x` is the handle's left
//! edge. Values are recomputed on layout and after every accepted move, and
//! reported through the change callback only for moves.
//!
//! # Styling
//!
//! Dimensions and colors come from a [`RangeSliderStyle`], declared in
//! [`Dp`] and resolved once against the host's scale factor.
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod color;
pub mod constraint;
pub mod dp;
pub mod error;
pub mod model;
pub mod px;
pub mod slider;
pub mod style;
pub mod surface;

pub use glam::Vec2;

pub use crate::{
    color::Color,
    constraint::{AxisConstraint, SizeConstraints},
    dp::Dp,
    error::{MappingError, StyleError},
    model::{PixelSpan, RangeModel},
    px::{Padding, Px, PxSize},
    slider::{
        DragState, EventResponse, HandleKind, HandleRect, PointerEvent, PointerEventKind,
        RangeSlider, TrackGeometry,
    },
    style::{RangeSliderStyle, RangeSliderStyleBuilder, ResolvedStyle, TrackPaint},
    surface::{BlurMask, DrawCommand, DrawSurface, HandleImage, RecordingSurface, RectF},
};
