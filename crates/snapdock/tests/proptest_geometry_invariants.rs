//! Property-based invariant tests for the panel geometry.
//!
//! These tests verify structural invariants that must hold for any valid inputs:
//!
//! 1. movement_bounds never inverts (min <= max per axis), offset included.
//! 2. Clamped coordinates always land inside the bounds.
//! 3. Nearest-edge distances are non-negative and pick the smaller side.
//! 4. Nearest-edge distances round-trip through the inverse placement.
//! 5. position_for classifies a clamped coordinate onto an edge iff it sits
//!    exactly on the corresponding bound.
//! 6. Resize through the controller keeps the panel inside the container
//!    with both axes within the configured [min, max].
//! 7. A container shrink re-clamps a floating panel fully into bounds.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use snapdock::{
    HorizontalEdge, HorizontalEdgeDistance, LayoutDriver, PanelConfig, PanelController, PanelPart,
    PanelParts, PanelPlacement, Point, PointerEvent, Rect, Size, Transition, VerticalEdge,
    VerticalEdgeDistance, movement_bounds, position_for,
};

// ── Helpers ─────────────────────────────────────────────────────────────

const MIN_EXTENT: i32 = 50;
const MAX_EXTENT: i32 = 600;

/// Discards every layout operation; these tests only read controller state.
struct SinkDriver;

impl LayoutDriver for SinkDriver {
    fn apply(&mut self, _placement: PanelPlacement) {}
    fn animate(&mut self, _placement: PanelPlacement, _transition: Transition) {}
    fn animate_hide(&mut self, _transition: Transition) {}
    fn set_panel_visible(&mut self, _visible: bool) {}
}

/// Part bounds that follow a shared panel rect, with the move handle as the
/// panel's top strip and the resize grip in its bottom-right corner.
#[derive(Clone)]
struct SharedParts {
    panel: Rc<RefCell<Rect>>,
    container: Size,
}

impl PanelParts for SharedParts {
    fn bounds(&self, part: PanelPart) -> Option<Rect> {
        let panel = *self.panel.borrow();
        match part {
            PanelPart::Panel => Some(panel),
            PanelPart::Content => {
                Some(Rect::new(0, 0, self.container.width, self.container.height))
            }
            PanelPart::MoveHandle => Some(Rect::new(panel.x, panel.y, panel.width, 20)),
            PanelPart::ResizeHandle => Some(Rect::new(
                panel.right() - 16,
                panel.bottom() - 16,
                16,
                16,
            )),
        }
    }
}

fn controller(
    container: Size,
) -> (
    PanelController<SinkDriver, SharedParts>,
    Rc<RefCell<Rect>>,
) {
    let panel = Rc::new(RefCell::new(Rect::default()));
    let parts = SharedParts {
        panel: Rc::clone(&panel),
        container,
    };
    let config = PanelConfig::new()
        .min_size(MIN_EXTENT, MIN_EXTENT)
        .max_size(MAX_EXTENT, MAX_EXTENT)
        .start_size(MIN_EXTENT, MIN_EXTENT)
        .touch_slop(0.0);

    let mut controller = PanelController::new(config, SinkDriver, parts).expect("valid config");
    controller.attach(container, None).expect("attach");
    *panel.borrow_mut() = controller.panel_rect();

    (controller, panel)
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. movement_bounds never inverts; clamping lands inside
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn movement_bounds_never_inverts(
        content_w in 1i32..=3000,
        content_h in 1i32..=3000,
        container_w in 1i32..=2000,
        container_h in 1i32..=2000,
        offset in 0i32..=32,
    ) {
        let bounds = movement_bounds(
            Size::new(content_w, content_h),
            Size::new(container_w, container_h),
            offset,
        );

        prop_assert!(bounds.min_x <= bounds.max_x);
        prop_assert!(bounds.min_y <= bounds.max_y);
        prop_assert_eq!(bounds.min_x, offset);
        prop_assert_eq!(bounds.min_y, offset);
    }

    #[test]
    fn clamped_coordinates_stay_inside(
        content_w in 1i32..=3000,
        content_h in 1i32..=3000,
        container_w in 1i32..=2000,
        container_h in 1i32..=2000,
        x in -5000i32..=5000,
        y in -5000i32..=5000,
    ) {
        let bounds = movement_bounds(
            Size::new(content_w, content_h),
            Size::new(container_w, container_h),
            0,
        );

        let cx = bounds.clamp_x(x);
        let cy = bounds.clamp_y(y);
        prop_assert!((bounds.min_x..=bounds.max_x).contains(&cx));
        prop_assert!((bounds.min_y..=bounds.max_y).contains(&cy));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3 + 4. nearest-edge distances: non-negative, minimal, invertible
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn horizontal_edge_distance_round_trips(
        container_w in 1i32..=4000,
        width_frac in 0.0f64..=1.0,
        x_frac in 0.0f64..=1.0,
    ) {
        let width = ((container_w as f64 * width_frac) as i32).max(1).min(container_w);
        let x = ((container_w - width) as f64 * x_frac) as i32;

        let d = HorizontalEdgeDistance::for_panel(x, width, container_w);
        prop_assert!(d.distance >= 0);
        prop_assert!(d.distance <= x.max(container_w - x - width));
        prop_assert_eq!(d.to_x(width, container_w), x);
    }

    #[test]
    fn vertical_edge_distance_round_trips(
        container_h in 1i32..=4000,
        height_frac in 0.0f64..=1.0,
        y_frac in 0.0f64..=1.0,
    ) {
        let height = ((container_h as f64 * height_frac) as i32).max(1).min(container_h);
        let y = ((container_h - height) as f64 * y_frac) as i32;

        let d = VerticalEdgeDistance::for_panel(y, height, container_h);
        prop_assert!(d.distance >= 0);
        prop_assert_eq!(d.to_y(height, container_h), y);
    }

    #[test]
    fn edge_distance_ties_favor_left_and_top(
        container in 2i32..=4000,
        extent_frac in 0.0f64..=1.0,
    ) {
        // A centered panel is equidistant from both edges whenever the
        // leftover space is even.
        let extent = ((container as f64 * extent_frac) as i32).max(1).min(container);
        let leftover = container - extent;
        prop_assume!(leftover % 2 == 0);
        let offset = leftover / 2;

        let h = HorizontalEdgeDistance::for_panel(offset, extent, container);
        prop_assert_eq!(h.edge, HorizontalEdge::Left);

        let v = VerticalEdgeDistance::for_panel(offset, extent, container);
        prop_assert_eq!(v.edge, VerticalEdge::Top);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. position_for matches exact bound equality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn position_for_matches_bound_equality(
        content_w in 1i32..=1000,
        content_h in 1i32..=1000,
        container_w in 1i32..=2000,
        container_h in 1i32..=2000,
        x in -5000i32..=5000,
        y in -5000i32..=5000,
    ) {
        let bounds = movement_bounds(
            Size::new(content_w, content_h),
            Size::new(container_w, container_h),
            0,
        );
        let cx = bounds.clamp_x(x);
        let cy = bounds.clamp_y(y);

        let on_bound = cx == bounds.min_x
            || cx == bounds.max_x
            || cy == bounds.min_y
            || cy == bounds.max_y;
        prop_assert_eq!(position_for(cx, cy, bounds).is_some(), on_bound);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. resize clamps: [min, max] per axis, panel fully inside the container
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_stays_clamped_and_inside(
        container_w in (MIN_EXTENT + 1)..=2000,
        container_h in (MIN_EXTENT + 1)..=2000,
        x_frac in 0.0f64..=1.0,
        y_frac in 0.0f64..=1.0,
        dx in -700.0f32..=700.0,
        dy in -700.0f32..=700.0,
    ) {
        let container = Size::new(container_w, container_h);
        let (mut controller, panel) = controller(container);

        // Place the start-sized panel somewhere it fully fits.
        let x = ((container_w - MIN_EXTENT) as f64 * x_frac) as i32;
        let y = ((container_h - MIN_EXTENT) as f64 * y_frac) as i32;
        controller.apply_floating_constraints(x, y, MIN_EXTENT, MIN_EXTENT);
        *panel.borrow_mut() = controller.panel_rect();

        // One resize drag from the grip's center.
        let rect = controller.panel_rect();
        let grip = Point::new(rect.right() as f32 - 8.0, rect.bottom() as f32 - 8.0);
        controller.handle_pointer(PointerEvent::down(grip.x, grip.y));
        controller.handle_pointer(PointerEvent::moved(grip.x + dx, grip.y + dy));
        controller.handle_pointer(PointerEvent::up(grip.x + dx, grip.y + dy));

        let resized = controller.panel_rect();
        prop_assert!((MIN_EXTENT..=MAX_EXTENT).contains(&resized.width));
        prop_assert!((MIN_EXTENT..=MAX_EXTENT).contains(&resized.height));
        prop_assert!(resized.right() <= container_w);
        prop_assert!(resized.bottom() <= container_h);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. container shrink re-clamps the floating panel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn container_shrink_keeps_panel_inside(
        container_w in 400i32..=2000,
        container_h in 400i32..=2000,
        shrink_w_frac in 0.2f64..=1.0,
        shrink_h_frac in 0.2f64..=1.0,
        x_frac in 0.0f64..=1.0,
        y_frac in 0.0f64..=1.0,
    ) {
        let container = Size::new(container_w, container_h);
        let (mut controller, panel) = controller(container);

        let w0 = (container_w / 2).clamp(MIN_EXTENT, MAX_EXTENT);
        let h0 = (container_h / 2).clamp(MIN_EXTENT, MAX_EXTENT);
        let x = ((container_w - w0) as f64 * x_frac) as i32;
        let y = ((container_h - h0) as f64 * y_frac) as i32;
        controller.apply_floating_constraints(x, y, w0, h0);
        *panel.borrow_mut() = controller.panel_rect();

        // Keep room for the minimum size at the panel's position, matching
        // a host that never shrinks below its content's minimum.
        let new_w = ((container_w as f64 * shrink_w_frac) as i32).max(x + MIN_EXTENT);
        let new_h = ((container_h as f64 * shrink_h_frac) as i32).max(y + MIN_EXTENT);
        controller.set_container_size(Size::new(new_w, new_h));

        let rect = controller.panel_rect();
        prop_assert!(rect.right() <= new_w);
        prop_assert!(rect.bottom() <= new_h);
        prop_assert!(rect.width >= MIN_EXTENT);
        prop_assert!(rect.height >= MIN_EXTENT);
    }
}
