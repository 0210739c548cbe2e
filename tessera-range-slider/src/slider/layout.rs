use glam::Vec2;
use tracing::debug;

use crate::{
    model::PixelSpan,
    px::{Padding, Px, PxSize},
};

/// One of the two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// The handle bounding the selection from below.
    Left,
    /// The handle bounding the selection from above.
    Right,
}

/// The grab box of a handle: its glyph bounds, top-left at `origin`.
///
/// Horizontally the box is half-open, `[x, x + width)`; vertically both
/// edges are excluded, `(y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Glyph size.
    pub size: Vec2,
}

impl HandleRect {
    /// Whether `point` grabs this handle.
    pub fn contains(&self, point: Vec2) -> bool {
        let within_x = point.x >= self.origin.x && point.x < self.origin.x + self.size.x;
        let within_y = point.y > self.origin.y && point.y < self.origin.y + self.size.y;
        within_x && within_y
    }
}

/// Pixel geometry of the track and of both handles.
///
/// Handle x/y coordinates are the top-left corners of their glyphs. At rest
/// each handle is centered on its track anchor, the padded view edge.
///
/// While dragging, `index_left_x + handle_width < index_right_x` holds for
/// every accepted move. The whole geometry is rebuilt on each layout, which
/// puts both handles back on their anchors.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// View size given by the last layout.
    pub view_size: PxSize,
    /// Padding given by the last layout.
    pub padding: Padding,
    /// Track bar thickness.
    pub track_thickness: Px,
    /// Handle glyph size.
    pub handle_size: PxSize,
    /// Leftmost x the left handle can rest at.
    pub start_left_x: f32,
    /// Rightmost x the right handle can rest at.
    pub start_right_x: f32,
    /// Current x of the left handle.
    pub index_left_x: f32,
    /// Current x of the right handle.
    pub index_right_x: f32,
    /// Fixed y of the left handle.
    pub index_left_y: f32,
    /// Fixed y of the right handle.
    pub index_right_y: f32,
}

impl TrackGeometry {
    /// Computes the bounds for a view and resets both handles to their
    /// anchors.
    ///
    /// Halving uses integer division on the view height and handle size, so
    /// odd sizes round toward zero.
    pub fn layout(
        view_size: PxSize,
        padding: Padding,
        track_thickness: Px,
        handle_size: PxSize,
    ) -> Self {
        let half_handle_width = handle_size.width.half().to_f32();
        let half_handle_height = handle_size.height.half().to_f32();

        let start_left_x = padding.left.to_f32() - half_handle_width;
        let start_right_x = (view_size.width - padding.right).to_f32() - half_handle_width;
        let handle_y =
            view_size.height.half().to_f32() - track_thickness.to_f32() / 2.0 - half_handle_height;

        debug!(
            width = view_size.width.0,
            height = view_size.height.0,
            start_left_x,
            start_right_x,
            handle_y,
            "range slider layout"
        );

        Self {
            view_size,
            padding,
            track_thickness,
            handle_size,
            start_left_x,
            start_right_x,
            index_left_x: start_left_x,
            index_right_x: start_right_x,
            index_left_y: handle_y,
            index_right_y: handle_y,
        }
    }

    /// The draggable range, for value mapping.
    pub fn span(&self) -> PixelSpan {
        PixelSpan::new(self.start_left_x, self.start_right_x)
    }

    /// Handle glyph width as used by the move constraints.
    pub fn handle_width(&self) -> f32 {
        self.handle_size.width.to_f32()
    }

    /// Vertical center line of the track.
    pub fn track_center_y(&self) -> f32 {
        self.view_size.height.half().to_f32()
    }

    /// Center of the left end cap.
    pub fn left_anchor_x(&self) -> f32 {
        self.padding.left.to_f32()
    }

    /// Center of the right end cap.
    pub fn right_anchor_x(&self) -> f32 {
        (self.view_size.width - self.padding.right).to_f32()
    }

    /// Current top-left corner of a handle glyph.
    pub fn handle_origin(&self, handle: HandleKind) -> Vec2 {
        match handle {
            HandleKind::Left => Vec2::new(self.index_left_x, self.index_left_y),
            HandleKind::Right => Vec2::new(self.index_right_x, self.index_right_y),
        }
    }

    /// Current grab box of a handle.
    pub fn handle_rect(&self, handle: HandleKind) -> HandleRect {
        HandleRect {
            origin: self.handle_origin(handle),
            size: Vec2::new(
                self.handle_size.width.to_f32(),
                self.handle_size.height.to_f32(),
            ),
        }
    }

    /// Moves `handle` to `candidate_x` if the move keeps the handles ordered
    /// and inside the track; returns whether it moved.
    pub fn try_move(&mut self, handle: HandleKind, candidate_x: f32) -> bool {
        match handle {
            HandleKind::Left => self.try_move_left(candidate_x),
            HandleKind::Right => self.try_move_right(candidate_x),
        }
    }

    /// Accepts `candidate_x` only strictly between the left bound and one
    /// handle width before the right handle.
    pub fn try_move_left(&mut self, candidate_x: f32) -> bool {
        let accepted = candidate_x < self.index_right_x - self.handle_width()
            && candidate_x > self.start_left_x;
        if accepted {
            self.index_left_x = candidate_x;
        }
        debug!(
            candidate_x,
            accepted,
            index_left_x = self.index_left_x,
            "move left handle"
        );
        accepted
    }

    /// Accepts `candidate_x` only strictly between one handle width after
    /// the left handle and the right bound.
    pub fn try_move_right(&mut self, candidate_x: f32) -> bool {
        let accepted = candidate_x > self.index_left_x + self.handle_width()
            && candidate_x < self.start_right_x;
        if accepted {
            self.index_right_x = candidate_x;
        }
        debug!(
            candidate_x,
            accepted,
            index_right_x = self.index_right_x,
            "move right handle"
        );
        accepted
    }
}
