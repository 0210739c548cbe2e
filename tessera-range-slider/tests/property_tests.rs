//! Property tests for the range slider.
//!
//! Uses proptest to verify:
//! 1. Monotonic mapping: a handle further right never reports a smaller value
//! 2. Ordering: no sequence of drags brings the handles within one handle
//!    width of each other
//! 3. Layout resets: laying out twice with the same inputs is idempotent
//! 4. Hit-test tie-break: overlapping grab boxes always resolve to the left

use proptest::prelude::*;
use tessera_range_slider::{
    HandleKind, Padding, PointerEvent, Px, PxSize, RangeSlider, RangeSliderStyle, TrackGeometry,
    Vec2, model::map_pixel_to_value, slider::hit_test,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_bounds() -> impl Strategy<Value = (f32, f32)> {
    (-50.0..200.0_f32, 1.0..2000.0_f32).prop_map(|(start, width)| (start, start + width))
}

fn arb_value_range() -> impl Strategy<Value = (i32, i32)> {
    (0..1000_i32, 0..100_000_i32).prop_map(|(min, extra)| (min, min + extra))
}

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Down(f32, f32),
    Move(f32, f32),
    Up,
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (-20.0..340.0_f32, 0.0..60.0_f32).prop_map(|(x, y)| Gesture::Down(x, y)),
        (-20.0..340.0_f32, 0.0..60.0_f32).prop_map(|(x, y)| Gesture::Move(x, y)),
        Just(Gesture::Up),
    ]
}

fn laid_out_slider(width: i32) -> RangeSlider {
    let mut slider = RangeSlider::new(RangeSliderStyle::default().resolved_at_unit_scale());
    slider.resize(PxSize::new(Px(width), Px(60)), Padding::symmetric(Px(16)));
    slider
}

// ── 1. Monotonic mapping ─────────────────────────────────────────────

proptest! {
    /// Within the track, moving right never lowers the value.
    #[test]
    fn mapping_is_monotonic(
        (start_left, start_right) in arb_bounds(),
        (min, max) in arb_value_range(),
        a in 0.0..1.0_f32,
        b in 0.0..1.0_f32,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let width = start_right - start_left;
        let x_lo = start_left + lo * width;
        let x_hi = start_left + hi * width;

        let v_lo = map_pixel_to_value(x_lo, start_left, start_right, min, max);
        let v_hi = map_pixel_to_value(x_hi, start_left, start_right, min, max);
        prop_assert!(v_lo.is_ok() && v_hi.is_ok());
        prop_assert!(v_lo.unwrap_or_default() <= v_hi.unwrap_or_default());
    }

    /// Track endpoints map to the ends of the value range.
    #[test]
    fn endpoints_map_to_range_ends(
        (start_left, start_right) in arb_bounds(),
        (min, max) in arb_value_range(),
    ) {
        prop_assert_eq!(map_pixel_to_value(start_left, start_left, start_right, min, max), Ok(0));
        let top = map_pixel_to_value(start_right, start_left, start_right, min, max);
        prop_assert!(top.is_ok());
        let top = top.unwrap_or_default();
        // f32 rounding may land one below the exact range.
        prop_assert!(top == max - min || top == max - min - 1);
    }
}

// ── 2. Ordering invariant ────────────────────────────────────────────

proptest! {
    /// Arbitrary gestures never break `left + handle_width < right`.
    #[test]
    fn handles_never_overlap(
        width in 120..400_i32,
        gestures in prop::collection::vec(arb_gesture(), 0..64),
    ) {
        let mut slider = laid_out_slider(width);
        let handle_width = slider.geometry().handle_width();

        for gesture in gestures {
            let event = match gesture {
                Gesture::Down(x, y) => PointerEvent::down(x, y),
                Gesture::Move(x, y) => PointerEvent::moved(x, y),
                Gesture::Up => PointerEvent::up(0.0, 0.0),
            };
            slider.handle_pointer_event(event);

            let geometry = slider.geometry();
            prop_assert!(geometry.index_left_x + handle_width <= geometry.index_right_x);
            prop_assert!(geometry.index_left_x >= geometry.start_left_x);
            prop_assert!(geometry.index_right_x <= geometry.start_right_x);
            let (left, right) = slider.values();
            prop_assert!(left <= right);
        }
    }

    /// A callback fires exactly for the moves that asked for a redraw.
    #[test]
    fn callbacks_match_accepted_moves(
        gestures in prop::collection::vec(arb_gesture(), 0..64),
    ) {
        let mut slider = laid_out_slider(320);
        let calls = std::sync::Arc::new(parking_lot::Mutex::new(0_usize));
        let sink = calls.clone();
        slider.set_on_change(move |_, _| *sink.lock() += 1);

        let mut expected = 0;
        for gesture in gestures {
            let event = match gesture {
                Gesture::Down(x, y) => PointerEvent::down(x, y),
                Gesture::Move(x, y) => PointerEvent::moved(x, y),
                Gesture::Up => PointerEvent::up(0.0, 0.0),
            };
            let response = slider.handle_pointer_event(event);
            if matches!(gesture, Gesture::Move(..)) && response.redraw_requested {
                expected += 1;
            }
        }
        prop_assert_eq!(*calls.lock(), expected);
    }
}

// ── 3. Layout idempotence ────────────────────────────────────────────

proptest! {
    /// Re-running layout always puts both handles back on their anchors.
    #[test]
    fn layout_is_idempotent(
        width in 0..1000_i32,
        height in 0..200_i32,
        padding in 0..64_i32,
        drag_to in 0.0..1000.0_f32,
    ) {
        let size = PxSize::new(Px(width), Px(height));
        let padding = Padding::symmetric(Px(padding));
        let first = TrackGeometry::layout(size, padding, Px(2), PxSize::square(Px(35)));

        let mut dragged = first;
        dragged.try_move_left(drag_to);
        let second = TrackGeometry::layout(
            dragged.view_size,
            dragged.padding,
            dragged.track_thickness,
            dragged.handle_size,
        );
        prop_assert_eq!(first, second);
        prop_assert_eq!(second.index_left_x, second.start_left_x);
        prop_assert_eq!(second.index_right_x, second.start_right_x);
    }
}

// ── 4. Hit-test tie-break ────────────────────────────────────────────

proptest! {
    /// Wherever both grab boxes contain a point, the left handle wins.
    #[test]
    fn overlap_resolves_to_left(
        left_x in 0.0..200.0_f32,
        offset in 0.0..35.0_f32,
        along in 0.0..1.0_f32,
        y in 1.0..34.0_f32,
    ) {
        let mut geometry = TrackGeometry::layout(
            PxSize::new(Px(300), Px(35)),
            Padding::symmetric(Px(16)),
            Px(0),
            PxSize::square(Px(35)),
        );
        geometry.index_left_x = left_x;
        geometry.index_right_x = left_x + offset;
        geometry.index_left_y = 0.0;
        geometry.index_right_y = 0.0;

        let overlap_start = left_x + offset;
        let overlap_end = left_x + 35.0;
        let x = overlap_start + along * (overlap_end - overlap_start);
        let point = Vec2::new(x, y);
        prop_assume!(geometry.handle_rect(HandleKind::Left).contains(point));
        prop_assume!(geometry.handle_rect(HandleKind::Right).contains(point));
        prop_assert_eq!(hit_test(&geometry, point), Some(HandleKind::Left));
    }
}
