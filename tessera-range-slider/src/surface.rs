//! The drawing primitives the range slider needs from its host.
//!
//! The renderer only ever fills circles and rectangles and blits one of three
//! handle glyphs. Hosts implement [`DrawSurface`] over their canvas;
//! [`RecordingSurface`] captures a frame as a list of [`DrawCommand`]s.

use glam::Vec2;
use smallvec::SmallVec;

use crate::color::Color;

/// An axis-aligned rectangle in fractional pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl RectF {
    /// Creates a rectangle from its four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// The glyphs a host must be able to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleImage {
    /// Resting glyph of the left handle.
    Left,
    /// Resting glyph of the right handle.
    Right,
    /// Glyph of whichever handle is being dragged.
    Pressed,
}

/// How a blur mask spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlurStyle {
    /// Blur inside the glyph's shape only, leaving the outline crisp.
    Inner,
}

/// A blur mask effect applied while blitting a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurMask {
    /// Blur radius in physical pixels.
    pub radius: f32,
    /// Spread style.
    pub style: BlurStyle,
}

impl BlurMask {
    /// An inner blur of `radius` pixels.
    pub const fn inner(radius: f32) -> Self {
        Self {
            radius,
            style: BlurStyle::Inner,
        }
    }
}

/// A canvas the slider can paint on.
pub trait DrawSurface {
    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Draws a handle glyph with its top-left corner at `origin`.
    fn draw_image(&mut self, image: HandleImage, origin: Vec2, effect: Option<BlurMask>);
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// See [`DrawSurface::fill_circle`].
    Circle {
        /// Circle center.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// See [`DrawSurface::fill_rect`].
    Rect {
        /// Rectangle bounds.
        rect: RectF,
        /// Fill color.
        color: Color,
    },
    /// See [`DrawSurface::draw_image`].
    Image {
        /// Which glyph.
        image: HandleImage,
        /// Top-left corner.
        origin: Vec2,
        /// Optional mask effect.
        effect: Option<BlurMask>,
    },
}

/// A full frame is at most three track primitives, four overlay primitives
/// and two glyphs.
const FRAME_COMMANDS: usize = 9;

/// A [`DrawSurface`] that records what was drawn, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: SmallVec<[DrawCommand; FRAME_COMMANDS]>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, back to front.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops every recorded command, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded glyph blits, in order.
    pub fn images(&self) -> impl Iterator<Item = (HandleImage, Vec2, Option<BlurMask>)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Image {
                image,
                origin,
                effect,
            } => Some((image, origin, effect)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_image(&mut self, image: HandleImage, origin: Vec2, effect: Option<BlurMask>) {
        self.commands.push(DrawCommand::Image {
            image,
            origin,
            effect,
        });
    }
}
