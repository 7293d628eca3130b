//! Property-based tests over scripted drag gestures.
//!
//! For any move-handle drag, however far it overshoots the container:
//!
//! 1. The panel never rests outside the container, floating or docked.
//! 2. `Animating` is never a rest state once transitions are settled.
//! 3. The stored nearest-edge distances stay non-negative.

use proptest::prelude::*;

use snapdock::{PanelConfig, Point, Size, Snap};
use snapdock_harness::PanelFixture;

proptest! {
    #[test]
    fn drags_stay_inside_and_settle(
        to_x in -200.0f32..=600.0,
        to_y in -200.0f32..=1000.0,
        steps in 1u32..=6,
    ) {
        let mut fixture = PanelFixture::new(
            PanelConfig::new().start_size(200, 150),
            Size::new(400, 800),
        );

        fixture.drag(Point::new(20.0, 10.0), Point::new(to_x, to_y), steps);
        fixture.finish_transitions();

        let rect = fixture.controller.panel_rect();
        prop_assert!(rect.x >= 0);
        prop_assert!(rect.y >= 0);
        prop_assert!(rect.right() <= 400);
        prop_assert!(rect.bottom() <= 800);

        let state = fixture.controller.state();
        prop_assert!(state.snap != Snap::Animating);
        prop_assert!(state.horizontal_edge_distance.distance >= 0);
        prop_assert!(state.vertical_edge_distance.distance >= 0);
    }

    #[test]
    fn release_on_an_edge_always_docks_there(
        along in 30.0f32..=600.0,
    ) {
        let mut fixture = PanelFixture::new(
            PanelConfig::new().start_size(200, 150),
            Size::new(400, 800),
        );

        // Overshoot far past the left edge at an arbitrary height.
        fixture.drag(Point::new(20.0, 10.0), Point::new(-300.0, along), 3);
        fixture.finish_transitions();

        prop_assert_eq!(fixture.controller.state().snap, Snap::Snapped);
        prop_assert_eq!(
            fixture.controller.state().position,
            Some(snapdock::DockEdge::Left)
        );
    }
}
