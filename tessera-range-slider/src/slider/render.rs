use glam::Vec2;

use crate::{
    style::TrackPaint,
    surface::{DrawSurface, HandleImage, RectF},
};

use super::{interaction::DragState, layout::HandleKind, layout::TrackGeometry};

/// Where the selected color gives way to the unselected one on each side.
///
/// The boundary is the handle's center, `index_x + handle_width / 2` with
/// both halving and the final position truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SelectionBounds {
    pub left_center_x: f32,
    pub right_center_x: f32,
}

impl SelectionBounds {
    pub fn from_geometry(geometry: &TrackGeometry) -> Self {
        let half_handle = geometry.handle_size.width.half().to_f32();
        Self {
            left_center_x: (geometry.index_left_x + half_handle).trunc(),
            right_center_x: (geometry.index_right_x + half_handle).trunc(),
        }
    }
}

/// Draws the whole slider, back to front: selected track, unselected
/// overlays, then both handle glyphs.
pub(super) fn render_slider(
    surface: &mut impl DrawSurface,
    geometry: &TrackGeometry,
    drag: DragState,
    paint: &TrackPaint,
) {
    render_track(surface, geometry, paint);
    render_unselected_overlays(surface, geometry, paint);
    render_handle(surface, geometry, HandleKind::Left, drag, paint);
    render_handle(surface, geometry, HandleKind::Right, drag, paint);
}

fn cap_radius(geometry: &TrackGeometry) -> f32 {
    geometry.track_thickness.to_f32() / 2.0
}

fn track_rect(geometry: &TrackGeometry, left: f32, right: f32) -> RectF {
    let center_y = geometry.track_center_y();
    let half_thickness = cap_radius(geometry);
    RectF::new(
        left,
        center_y - half_thickness,
        right,
        center_y + half_thickness,
    )
}

fn render_track(surface: &mut impl DrawSurface, geometry: &TrackGeometry, paint: &TrackPaint) {
    let center_y = geometry.track_center_y();
    let left = geometry.left_anchor_x();
    let right = geometry.right_anchor_x();
    let radius = cap_radius(geometry);

    surface.fill_circle(Vec2::new(left, center_y), radius, paint.selected);
    surface.fill_circle(Vec2::new(right, center_y), radius, paint.selected);
    surface.fill_rect(track_rect(geometry, left, right), paint.selected);
}

fn render_unselected_overlays(
    surface: &mut impl DrawSurface,
    geometry: &TrackGeometry,
    paint: &TrackPaint,
) {
    let center_y = geometry.track_center_y();
    let left_anchor = geometry.left_anchor_x();
    let right_anchor = geometry.right_anchor_x();
    let radius = cap_radius(geometry);
    let bounds = SelectionBounds::from_geometry(geometry);

    if bounds.left_center_x > left_anchor {
        surface.fill_circle(Vec2::new(left_anchor, center_y), radius, paint.unselected);
        surface.fill_rect(
            track_rect(geometry, left_anchor, bounds.left_center_x),
            paint.unselected,
        );
    }

    if bounds.right_center_x < right_anchor {
        surface.fill_circle(Vec2::new(right_anchor, center_y), radius, paint.unselected);
        surface.fill_rect(
            track_rect(geometry, bounds.right_center_x, right_anchor),
            paint.unselected,
        );
    }
}

fn render_handle(
    surface: &mut impl DrawSurface,
    geometry: &TrackGeometry,
    handle: HandleKind,
    drag: DragState,
    paint: &TrackPaint,
) {
    let origin = geometry.handle_origin(handle);
    if drag.active_handle() == Some(handle) {
        surface.draw_image(HandleImage::Pressed, origin, Some(paint.pressed_blur));
    } else {
        let image = match handle {
            HandleKind::Left => HandleImage::Left,
            HandleKind::Right => HandleImage::Right,
        };
        surface.draw_image(image, origin, None);
    }
}
