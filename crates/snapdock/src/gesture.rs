#![forbid(unsafe_code)]

//! Pointer dispatch and the three drag listeners.
//!
//! A press hit-tests the move handle, then (when resizing is enabled) the
//! resize handle, and latches the winner as the gesture's touch subject for
//! the whole gesture. Later samples are consumed only once the pointer has
//! traveled beyond the touch slop from the press point, so taps fall
//! through to the host's ordinary click handling.
//!
//! Each listener is a small `Idle -> Dragging -> Idle` machine holding only
//! its own transient drag fields. Listeners mutate the controller's
//! [`PanelCore`] through an explicit `&mut` handle and hand side effects
//! that need the layout driver or callbacks back as [`GestureCommand`]s.
//!
//! # Invariants
//!
//! 1. The touch subject is latched on press and never re-evaluated during
//!    the gesture.
//! 2. Once a gesture is accepted it stays accepted until release or cancel,
//!    even if the pointer returns within slop of the press point.
//! 3. No listener runs while the panel is `Animating`; routing rejects the
//!    event instead.

use crate::controller::PanelCore;
use crate::driver::{PanelPart, PanelParts};
use crate::geometry::{
    DockEdge, HorizontalEdgeDistance, Point, VerticalEdgeDistance, is_significantly_distant,
    movement_bounds, position_for,
};
use crate::state::SavedSize;

/// Which handle a gesture is operating on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TouchSubject {
    MoveHandle,
    ResizeHandle,
}

/// A side effect a listener asks the controller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureCommand {
    /// Pin the panel at a new top-left immediately (drag tracking).
    MovePanel { x: i32, y: i32 },
    /// Pin the panel at its current top-left with a new size immediately.
    ApplySize { width: i32, height: i32 },
    /// Run the animated snap operation toward an edge.
    Snap { edge: DockEdge },
    /// Run the pop operation toward a floating top-left.
    Pop { x: i32, y: i32 },
}

/// Press bookkeeping and gesture acceptance.
#[derive(Debug, Default)]
pub(crate) struct PointerDispatch {
    last_down: Option<Point>,
    grab_offset: Point,
    subject: Option<TouchSubject>,
    accepted: bool,
}

impl PointerDispatch {
    /// Record a press: grab offset relative to the panel, press point, and
    /// the latched touch subject.
    pub(crate) fn on_down(
        &mut self,
        point: Point,
        panel_x: i32,
        panel_y: i32,
        parts: &dyn PanelParts,
        resize_enabled: bool,
    ) {
        self.grab_offset = Point::new(point.x - panel_x as f32, point.y - panel_y as f32);
        self.last_down = Some(point);
        self.accepted = false;

        self.subject = if hit(parts, PanelPart::MoveHandle, point) {
            Some(TouchSubject::MoveHandle)
        } else if resize_enabled && hit(parts, PanelPart::ResizeHandle, point) {
            Some(TouchSubject::ResizeHandle)
        } else {
            None
        };
    }

    /// Whether a move/up sample at `point` belongs to this gesture.
    /// Acceptance latches once the slop threshold is crossed.
    pub(crate) fn accept(&mut self, point: Point, slop: f32) -> bool {
        if self.subject.is_none() {
            return false;
        }
        if self.accepted {
            return true;
        }
        let Some(down) = self.last_down else {
            return false;
        };
        if is_significantly_distant(down, point, slop) {
            self.accepted = true;
        }
        self.accepted
    }

    pub(crate) fn subject(&self) -> Option<TouchSubject> {
        self.subject
    }

    pub(crate) fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    /// Replace the grab offset mid-gesture. The pop path re-derives it
    /// against the popped geometry so the move listener keeps tracking the
    /// finger with the floating size.
    pub(crate) fn set_grab_offset(&mut self, offset: Point) {
        self.grab_offset = offset;
    }

    pub(crate) fn last_down(&self) -> Option<Point> {
        self.last_down
    }

    /// Drop the gesture (release or host cancel).
    pub(crate) fn clear(&mut self) {
        self.last_down = None;
        self.subject = None;
        self.accepted = false;
    }
}

fn hit(parts: &dyn PanelParts, part: PanelPart, point: Point) -> bool {
    parts.bounds(part).is_some_and(|rect| rect.contains(point))
}

/// Drags a floating panel and arms edge snapping.
#[derive(Debug, Default)]
pub(crate) struct MoveSnapListener;

impl MoveSnapListener {
    pub(crate) fn on_move(
        &mut self,
        core: &mut PanelCore,
        point: Point,
        grab: Point,
        out: &mut Vec<GestureCommand>,
    ) {
        let bounds = movement_bounds(core.panel.size(), core.container, 0);
        let next_x = bounds.clamp_x((point.x - grab.x).round() as i32);
        let next_y = bounds.clamp_y((point.y - grab.y).round() as i32);

        let current = core.state.position;
        let next = position_for(next_x, next_y, bounds);
        core.state.position = next;

        // Arriving at an enabled edge fades its overlay in; leaving one
        // fades it back out.
        for edge in DockEdge::ALL {
            if !core.config.snap_to_edges.allows(edge) {
                continue;
            }
            if current != Some(edge) && next == Some(edge) {
                core.overlays.get_mut(edge).show();
            }
            if current == Some(edge) && next != Some(edge) {
                core.overlays.get_mut(edge).hide();
            }
        }

        out.push(GestureCommand::MovePanel {
            x: next_x,
            y: next_y,
        });
    }

    pub(crate) fn on_up(&mut self, core: &mut PanelCore, out: &mut Vec<GestureCommand>) {
        if let Some(edge) = core.state.position
            && core.config.snap_to_edges.allows(edge)
        {
            core.overlays.get_mut(edge).hide();
            out.push(GestureCommand::Snap { edge });
        }
    }
}

/// Undocks a snapped panel, following the pointer continuously.
#[derive(Debug, Default)]
pub(crate) struct PopListener;

impl PopListener {
    pub(crate) fn on_move(
        &mut self,
        core: &mut PanelCore,
        point: Point,
        out: &mut Vec<GestureCommand>,
    ) {
        // Grab offset inside the docked panel, rescaled proportionally to
        // the floating size so grabbing near a docked edge maps sensibly.
        let rel_x = point.x - core.panel.x as f32;
        let rel_y = point.y - core.panel.y as f32;

        let pop = core
            .state
            .size
            .resolve(core.config.start_size, core.container);

        let next_rel_x = rel_x / core.panel.width.max(1) as f32 * pop.width as f32;
        let next_rel_y = rel_y / core.panel.height.max(1) as f32 * pop.height as f32;

        let bounds = movement_bounds(pop, core.container, core.config.pop_offset);
        let x = bounds.clamp_x((point.x - next_rel_x).round() as i32);
        let y = bounds.clamp_y((point.y - next_rel_y).round() as i32);

        out.push(GestureCommand::Pop { x, y });
    }
}

/// Resizes a floating panel from the resize handle.
#[derive(Debug, Default)]
pub(crate) struct ResizeListener {
    previous: Option<Point>,
}

impl ResizeListener {
    pub(crate) fn on_move(
        &mut self,
        core: &mut PanelCore,
        point: Point,
        press: Point,
        out: &mut Vec<GestureCommand>,
    ) {
        // Reference point seeds lazily from the press, then advances
        // incrementally with each sample.
        let previous = self.previous.unwrap_or(press);

        let diff_x = point.x - previous.x;
        let diff_y = point.y - previous.y;

        let (width, height) = core.calculate_new_size(diff_x, diff_y);
        core.state.size = SavedSize::new(width, height);

        out.push(GestureCommand::ApplySize { width, height });

        self.previous = Some(point);
    }

    pub(crate) fn on_up(&mut self) {
        self.previous = None;
    }
}

/// Recompute the stored nearest-edge distances from the panel's geometry.
pub(crate) fn store_nearest_edges(core: &mut PanelCore) {
    core.state.horizontal_edge_distance =
        HorizontalEdgeDistance::for_panel(core.panel.x, core.panel.width, core.container.width);
    core.state.vertical_edge_distance =
        VerticalEdgeDistance::for_panel(core.panel.y, core.panel.height, core.container.height);
}
