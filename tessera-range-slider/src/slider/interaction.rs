use glam::Vec2;
use tracing::debug;

use crate::model::RangeModel;

use super::layout::{HandleKind, TrackGeometry};

/// The phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button or touch point went down.
    Down,
    /// The pointer moved.
    Move,
    /// The button or touch point was released.
    Up,
    /// The host aborted the gesture; handled exactly like [`Up`](Self::Up).
    Cancel,
}

/// A pointer event in the slider's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub kind: PointerEventKind,
    /// Pointer position relative to the slider's top-left corner.
    pub position: Vec2,
}

impl PointerEvent {
    /// Creates an event of `kind` at `(x, y)`.
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Vec2::new(x, y),
        }
    }

    /// A pointer-down at `(x, y)`.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// A pointer-move to `(x, y)`.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// A pointer-up at `(x, y)`.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// A cancelled gesture.
    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, 0.0, 0.0)
    }
}

/// What the host should do after an event was handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventResponse {
    /// The slider handled the event; do not pass it to default handling.
    pub consumed: bool,
    /// The slider's appearance changed; schedule a draw.
    pub redraw_requested: bool,
}

impl EventResponse {
    /// Not consumed, nothing to redraw.
    pub const IGNORED: Self = Self {
        consumed: false,
        redraw_requested: false,
    };
}

/// Which handle, if any, the current gesture is dragging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragState {
    /// No handle grabbed.
    #[default]
    Idle,
    /// A handle was grabbed by the last pointer-down.
    Active(HandleKind),
}

impl DragState {
    /// The dragged handle, if any.
    pub fn active_handle(self) -> Option<HandleKind> {
        match self {
            DragState::Idle => None,
            DragState::Active(handle) => Some(handle),
        }
    }
}

/// Finds the handle under `point`.
///
/// The left handle is tested first, so it wins wherever both grab boxes
/// overlap.
pub fn hit_test(geometry: &TrackGeometry, point: Vec2) -> Option<HandleKind> {
    [HandleKind::Left, HandleKind::Right]
        .into_iter()
        .find(|&handle| geometry.handle_rect(handle).contains(point))
}

/// Result of feeding one event to a [`DragController`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DragOutcome {
    pub response: EventResponse,
    /// New `(left, right)` values after an accepted move.
    pub changed: Option<(i32, i32)>,
}

/// Pointer state machine: `Idle -> Active(handle) -> Idle`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// A controller with no gesture in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Drops any gesture in flight.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    pub(crate) fn handle_event(
        &mut self,
        event: PointerEvent,
        geometry: &mut TrackGeometry,
        model: &mut RangeModel,
    ) -> DragOutcome {
        match event.kind {
            PointerEventKind::Down => self.on_down(event.position, geometry),
            PointerEventKind::Move => self.on_move(event.position, geometry, model),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.state = DragState::Idle;
                DragOutcome {
                    response: EventResponse {
                        consumed: false,
                        redraw_requested: true,
                    },
                    changed: None,
                }
            }
        }
    }

    fn on_down(&mut self, position: Vec2, geometry: &TrackGeometry) -> DragOutcome {
        let hit = hit_test(geometry, position);
        debug!(x = position.x, y = position.y, ?hit, "pointer down");
        match hit {
            Some(handle) => {
                self.state = DragState::Active(handle);
                DragOutcome {
                    response: EventResponse {
                        consumed: true,
                        redraw_requested: true,
                    },
                    changed: None,
                }
            }
            None => {
                self.state = DragState::Idle;
                DragOutcome::default()
            }
        }
    }

    fn on_move(
        &mut self,
        position: Vec2,
        geometry: &mut TrackGeometry,
        model: &mut RangeModel,
    ) -> DragOutcome {
        let DragState::Active(handle) = self.state else {
            return DragOutcome::default();
        };

        let mut outcome = DragOutcome {
            response: EventResponse {
                consumed: true,
                redraw_requested: false,
            },
            changed: None,
        };
        if geometry.try_move(handle, position.x) {
            outcome.response.redraw_requested = true;
            let (left_x, right_x) = (geometry.index_left_x, geometry.index_right_x);
            outcome.changed = model.recompute(geometry.span(), left_x, right_x).ok();
            debug!(?handle, values = ?outcome.changed, "handle moved");
        }
        outcome
    }
}
