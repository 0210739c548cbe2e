//! A dual-handle slider for selecting a sub-range of integer values.
//!
//! ## Usage
//!
//! The host owns the window, the event loop and the canvas. It forwards
//! layout passes, pointer events and draw requests to a [`RangeSlider`], and
//! receives `(left, right)` values through the change callback.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use tessera_range_slider::{
//!     Padding, PointerEvent, Px, PxSize, RangeSlider, RecordingSurface,
//!     style::RangeSliderStyleBuilder,
//! };
//!
//! let style = RangeSliderStyleBuilder::default()
//!     .handle_size(tessera_range_slider::Dp(20.0))
//!     .build()
//!     .expect("all fields have defaults")
//!     .resolved_at_unit_scale();
//! let mut slider = RangeSlider::new(style);
//!
//! let reported = Arc::new(Mutex::new(Vec::new()));
//! let sink = reported.clone();
//! slider.set_on_change(move |left, right| sink.lock().unwrap().push((left, right)));
//!
//! slider.resize(PxSize::new(Px(240), Px(60)), Padding::symmetric(Px(20)));
//! assert!(slider.handle_pointer_event(PointerEvent::down(15.0, 30.0)).consumed);
//! slider.handle_pointer_event(PointerEvent::moved(60.0, 30.0));
//! slider.handle_pointer_event(PointerEvent::up(60.0, 30.0));
//!
//! assert_eq!(*reported.lock().unwrap(), vec![(25, 100)]);
//!
//! let mut frame = RecordingSurface::new();
//! slider.render(&mut frame);
//! assert!(!frame.commands().is_empty());
//! ```
use std::{fmt, sync::Arc};

use crate::{
    constraint::{SizeConstraints, preferred_size},
    model::RangeModel,
    px::{Padding, PxSize},
    style::{ResolvedStyle, TrackPaint},
    surface::DrawSurface,
};

use interaction::DragController;
use render::render_slider;

pub use interaction::{DragState, EventResponse, PointerEvent, PointerEventKind, hit_test};
pub use layout::{HandleKind, HandleRect, TrackGeometry};

mod interaction;
mod layout;
mod render;

type ChangeCallback = Arc<dyn Fn(i32, i32) + Send + Sync>;

/// The range slider control.
///
/// All methods run synchronously on the host's UI thread. Geometry is
/// all-zero until the first [`resize`](Self::resize); until then no pointer
/// event grabs a handle.
pub struct RangeSlider {
    style: ResolvedStyle,
    model: RangeModel,
    geometry: TrackGeometry,
    drag: DragController,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("style", &self.style)
            .field("model", &self.model)
            .field("geometry", &self.geometry)
            .field("drag", &self.drag)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(ResolvedStyle::default())
    }
}

impl RangeSlider {
    /// Creates a slider over `0..=100` drawn with `style`.
    pub fn new(style: ResolvedStyle) -> Self {
        Self {
            style,
            model: RangeModel::new(),
            geometry: TrackGeometry::default(),
            drag: DragController::new(),
            on_change: None,
        }
    }

    /// Sets the callback invoked with `(left_value, right_value)` after every
    /// accepted drag move. Layout and pointer-down/up never invoke it.
    pub fn set_on_change<F>(&mut self, on_change: F)
    where
        F: Fn(i32, i32) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(on_change));
    }

    /// Removes the change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Sets the lower bound; negative input is stored as `0`.
    ///
    /// Takes effect on the next layout or accepted move. No ordering against
    /// the upper bound is enforced.
    pub fn set_min_value(&mut self, min_value: i32) {
        self.model.set_min_value(min_value);
    }

    /// Sets the upper bound; negative input is stored as `0`.
    ///
    /// Takes effect on the next layout or accepted move. No ordering against
    /// the lower bound is enforced.
    pub fn set_max_value(&mut self, max_value: i32) {
        self.model.set_max_value(max_value);
    }

    /// Lower bound of the value range.
    pub fn min_value(&self) -> i32 {
        self.model.min_value()
    }

    /// Upper bound of the value range.
    pub fn max_value(&self) -> i32 {
        self.model.max_value()
    }

    /// The last computed `(left_value, right_value)`.
    pub fn values(&self) -> (i32, i32) {
        self.model.values()
    }

    /// Current pixel geometry.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Current gesture state.
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// The handle being dragged, if any.
    pub fn active_handle(&self) -> Option<HandleKind> {
        self.drag.state().active_handle()
    }

    /// The style this slider draws with.
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// Lays the slider out in a view of `size`, resetting both handles to
    /// their anchors and dropping any gesture in flight.
    ///
    /// Values are recomputed without notifying the change callback. On a
    /// degenerate track the previous values are kept.
    pub fn resize(&mut self, size: PxSize, padding: Padding) {
        self.geometry = TrackGeometry::layout(
            size,
            padding,
            self.style.track_thickness,
            self.style.handle_size,
        );
        self.drag.reset();
        // A degenerate track keeps the previous values; recompute logs it.
        let _ = self.model.recompute(
            self.geometry.span(),
            self.geometry.index_left_x,
            self.geometry.index_right_x,
        );
    }

    /// [`resize`](Self::resize) with the padding from the style.
    pub fn resize_with_default_padding(&mut self, size: PxSize) {
        self.resize(size, self.style.padding);
    }

    /// Feeds one pointer event through the drag state machine.
    ///
    /// The change callback, if any, runs before this returns.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> EventResponse {
        let outcome = self.drag.handle_event(event, &mut self.geometry, &mut self.model);
        if let (Some((left, right)), Some(on_change)) = (outcome.changed, self.on_change.as_ref()) {
            on_change(left, right);
        }
        outcome.response
    }

    /// Draws the slider with the style's paint.
    pub fn render(&self, surface: &mut impl DrawSurface) {
        self.render_with_paint(surface, &self.style.paint);
    }

    /// Draws the slider with `paint` instead of the style's paint.
    pub fn render_with_paint(&self, surface: &mut impl DrawSurface, paint: &TrackPaint) {
        render_slider(surface, &self.geometry, self.drag.state(), paint);
    }

    /// Size the slider wants under `constraints`; open axes get the style's
    /// default size.
    pub fn preferred_size(&self, constraints: SizeConstraints) -> PxSize {
        preferred_size(constraints, self.style.default_size)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::{
        color::Color,
        constraint::AxisConstraint,
        dp::Dp,
        px::Px,
        style::RangeSliderStyleBuilder,
        surface::{DrawCommand, HandleImage, RecordingSurface},
    };

    type Calls = Arc<Mutex<Vec<(i32, i32)>>>;

    /// A slider laid out so the draggable range is `10..210` with 20px
    /// handles.
    fn scenario_slider() -> (RangeSlider, Calls) {
        let style = RangeSliderStyleBuilder::default()
            .handle_size(Dp(20.0))
            .build()
            .expect("all fields have defaults")
            .resolved_at_unit_scale();
        let mut slider = RangeSlider::new(style);
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        slider.set_on_change(move |left, right| sink.lock().push((left, right)));
        slider.resize(PxSize::new(Px(240), Px(60)), Padding::symmetric(Px(20)));
        (slider, calls)
    }

    fn drag(slider: &mut RangeSlider, from: (f32, f32), to_x: f32) {
        slider.handle_pointer_event(PointerEvent::down(from.0, from.1));
        slider.handle_pointer_event(PointerEvent::moved(to_x, from.1));
        slider.handle_pointer_event(PointerEvent::up(to_x, from.1));
    }

    #[test]
    fn layout_sets_full_range_without_notifying() {
        let (slider, calls) = scenario_slider();
        assert_eq!(slider.geometry().start_left_x, 10.0);
        assert_eq!(slider.geometry().start_right_x, 210.0);
        assert_eq!(slider.values(), (0, 100));
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn drag_left_then_right_reports_25_75() {
        let (mut slider, calls) = scenario_slider();
        drag(&mut slider, (15.0, 30.0), 60.0);
        assert_eq!(slider.values(), (25, 100));
        drag(&mut slider, (215.0, 30.0), 160.0);
        assert_eq!(slider.values(), (25, 75));
        assert_eq!(*calls.lock(), vec![(25, 100), (25, 75)]);
    }

    #[test]
    fn left_drag_too_close_to_right_handle_is_rejected() {
        let (mut slider, calls) = scenario_slider();
        drag(&mut slider, (215.0, 30.0), 200.0);
        assert_eq!(slider.geometry().index_right_x, 200.0);
        calls.lock().clear();

        assert!(slider.handle_pointer_event(PointerEvent::down(15.0, 30.0)).consumed);
        let response = slider.handle_pointer_event(PointerEvent::moved(195.0, 30.0));
        assert!(response.consumed);
        assert!(!response.redraw_requested);
        assert_eq!(slider.geometry().index_left_x, 10.0);
        assert_eq!(slider.values().0, 0);
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn pointer_down_and_up_never_notify() {
        let (mut slider, calls) = scenario_slider();
        slider.handle_pointer_event(PointerEvent::down(15.0, 30.0));
        slider.handle_pointer_event(PointerEvent::up(15.0, 30.0));
        slider.handle_pointer_event(PointerEvent::cancel());
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn every_accepted_move_notifies_once() {
        let (mut slider, calls) = scenario_slider();
        slider.handle_pointer_event(PointerEvent::down(15.0, 30.0));
        for x in [20.0, 30.0, 300.0, 50.0] {
            slider.handle_pointer_event(PointerEvent::moved(x, 30.0));
        }
        slider.handle_pointer_event(PointerEvent::up(50.0, 30.0));
        assert_eq!(*calls.lock(), vec![(5, 100), (10, 100), (20, 100)]);
    }

    #[test]
    fn resize_discards_drag_progress_and_gesture() {
        let (mut slider, calls) = scenario_slider();
        drag(&mut slider, (15.0, 30.0), 60.0);
        slider.handle_pointer_event(PointerEvent::down(215.0, 30.0));
        assert_eq!(slider.active_handle(), Some(HandleKind::Right));

        slider.resize(PxSize::new(Px(240), Px(60)), Padding::symmetric(Px(20)));
        assert_eq!(slider.drag_state(), DragState::Idle);
        assert_eq!(slider.geometry().index_left_x, 10.0);
        assert_eq!(slider.values(), (0, 100));
        assert_eq!(calls.lock().len(), 1);

        let response = slider.handle_pointer_event(PointerEvent::moved(100.0, 30.0));
        assert!(!response.consumed);
    }

    #[test]
    fn negative_min_is_stored_as_zero() {
        let mut slider = RangeSlider::default();
        slider.set_min_value(-5);
        assert_eq!(slider.min_value(), 0);
        slider.set_max_value(-7);
        assert_eq!(slider.max_value(), 0);
    }

    #[test]
    fn inverted_bounds_are_accepted_and_yield_negative_values() {
        let (mut slider, _) = scenario_slider();
        slider.set_min_value(50);
        slider.set_max_value(10);
        slider.resize(PxSize::new(Px(240), Px(60)), Padding::symmetric(Px(20)));
        assert_eq!(slider.values(), (0, -40));
    }

    #[test]
    fn degenerate_track_never_notifies() {
        let (mut slider, calls) = scenario_slider();
        drag(&mut slider, (15.0, 30.0), 60.0);
        calls.lock().clear();

        // width - padding.right == padding.left: both bounds at 10.
        slider.resize(PxSize::new(Px(40), Px(60)), Padding::symmetric(Px(20)));
        assert_eq!(slider.geometry().span().width(), 0.0);
        assert_eq!(slider.values(), (25, 100));

        for x in [0.0, 10.0, 15.0, 30.0] {
            slider.handle_pointer_event(PointerEvent::down(15.0, 30.0));
            slider.handle_pointer_event(PointerEvent::moved(x, 30.0));
            slider.handle_pointer_event(PointerEvent::up(x, 30.0));
        }
        assert!(calls.lock().is_empty());
        assert_eq!(slider.values(), (25, 100));
    }

    #[test]
    fn unlaid_slider_ignores_pointer_events() {
        let mut slider = RangeSlider::default();
        let response = slider.handle_pointer_event(PointerEvent::down(0.0, 0.0));
        assert_eq!(response, EventResponse::IGNORED);
        assert_eq!(slider.values(), (0, 100));
    }

    #[test]
    fn default_padding_comes_from_style() {
        let mut slider = RangeSlider::default();
        slider.resize_with_default_padding(PxSize::new(Px(300), Px(50)));
        // 16 - 35 / 2 and 300 - 16 - 35 / 2
        assert_eq!(slider.geometry().start_left_x, -1.0);
        assert_eq!(slider.geometry().start_right_x, 267.0);
    }

    #[test]
    fn preferred_size_uses_style_defaults() {
        let slider = RangeSlider::default();
        let size = slider.preferred_size(SizeConstraints::new(
            AxisConstraint::AtMost(Px(1000)),
            AxisConstraint::Exact(Px(80)),
        ));
        assert_eq!(size, PxSize::new(Px(100), Px(80)));
    }

    #[test]
    fn render_reflects_drag_state() {
        let (mut slider, _) = scenario_slider();
        slider.handle_pointer_event(PointerEvent::down(15.0, 30.0));
        let mut frame = RecordingSurface::new();
        slider.render(&mut frame);
        let images: Vec<_> = frame.images().map(|(image, _, _)| image).collect();
        assert_eq!(images, vec![HandleImage::Pressed, HandleImage::Right]);

        slider.handle_pointer_event(PointerEvent::up(15.0, 30.0));
        frame.clear();
        slider.render(&mut frame);
        let images: Vec<_> = frame.images().map(|(image, _, _)| image).collect();
        assert_eq!(images, vec![HandleImage::Left, HandleImage::Right]);
    }

    #[test]
    fn render_with_paint_overrides_colors() {
        let (slider, _) = scenario_slider();
        let blue = Color::from_hex_rgb(0x2962FF);
        let paint = TrackPaint {
            selected: blue,
            ..slider.style().paint
        };
        let mut frame = RecordingSurface::new();
        slider.render_with_paint(&mut frame, &paint);
        let DrawCommand::Circle { color, .. } = frame.commands()[0] else {
            panic!("track starts with its left end cap");
        };
        assert_eq!(color, blue);
    }

    #[test]
    fn cleared_callback_is_not_invoked() {
        let (mut slider, calls) = scenario_slider();
        slider.clear_on_change();
        drag(&mut slider, (15.0, 30.0), 60.0);
        assert!(calls.lock().is_empty());
        assert_eq!(slider.values(), (25, 100));
    }
}
