#![forbid(unsafe_code)]

//! Snap-zone overlay animation.
//!
//! While a drag approaches an enabled edge, a translucent overlay fades and
//! scales in over the would-be docked area; leaving the edge fades it back
//! out. The controller owns one [`OverlayAnimation`] per edge and advances
//! them from [`tick`](crate::controller::PanelController::tick); the host
//! reads the resulting [`OverlayPose`] values each frame and draws them
//! however it likes. Overlay animations run independently of panel
//! transitions and are never awaited.
//!
//! # Invariants
//!
//! - Visibility progress is always in `[0.0, 1.0]`.
//! - Re-showing (or re-hiding) mid-animation retargets from the current
//!   progress; there is no jump to an endpoint.
//! - A zero overlay duration completes show/hide instantly on the next tick.

use std::time::Duration;

use crate::geometry::{DockEdge, Point, Rect, Size};

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Accelerate/decelerate easing over linear progress.
#[inline]
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Lifecycle of one edge's overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Not rendered.
    #[default]
    Hidden,
    /// Fading/scaling in.
    FadingIn,
    /// Fully visible.
    Shown,
    /// Fading/scaling out.
    FadingOut,
}

/// Tick-driven fade/scale state for one edge's overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayAnimation {
    phase: OverlayPhase,
    /// Linear visibility progress, 0 = hidden, 1 = shown.
    progress: f32,
}

impl OverlayAnimation {
    /// Start (or keep) fading in from the current progress.
    pub fn show(&mut self) {
        if self.phase != OverlayPhase::Shown {
            self.phase = OverlayPhase::FadingIn;
        }
    }

    /// Start (or keep) fading out from the current progress.
    pub fn hide(&mut self) {
        if self.phase != OverlayPhase::Hidden {
            self.phase = OverlayPhase::FadingOut;
        }
    }

    /// Advance the animation by `dt` against the configured duration.
    pub fn tick(&mut self, dt: Duration, duration: Duration) {
        let step = if duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f32() / duration.as_secs_f32()
        };

        match self.phase {
            OverlayPhase::FadingIn => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.phase = OverlayPhase::Shown;
                }
            }
            OverlayPhase::FadingOut => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.phase = OverlayPhase::Hidden;
                }
            }
            OverlayPhase::Hidden | OverlayPhase::Shown => {}
        }
    }

    /// Current phase.
    #[inline]
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay contributes anything to the frame.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Hidden
    }

    /// Eased visibility in `[0.0, 1.0]`.
    #[inline]
    pub fn visibility(&self) -> f32 {
        ease(self.progress)
    }
}

/// The four per-edge overlays.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapOverlays {
    left: OverlayAnimation,
    top: OverlayAnimation,
    right: OverlayAnimation,
    bottom: OverlayAnimation,
}

impl SnapOverlays {
    /// The overlay for an edge.
    pub fn get(&self, edge: DockEdge) -> &OverlayAnimation {
        match edge {
            DockEdge::Left => &self.left,
            DockEdge::Top => &self.top,
            DockEdge::Right => &self.right,
            DockEdge::Bottom => &self.bottom,
        }
    }

    /// Mutable access to the overlay for an edge.
    pub fn get_mut(&mut self, edge: DockEdge) -> &mut OverlayAnimation {
        match edge {
            DockEdge::Left => &mut self.left,
            DockEdge::Top => &mut self.top,
            DockEdge::Right => &mut self.right,
            DockEdge::Bottom => &mut self.bottom,
        }
    }

    /// Advance all overlays.
    pub fn tick(&mut self, dt: Duration, duration: Duration) {
        self.left.tick(dt, duration);
        self.top.tick(dt, duration);
        self.right.tick(dt, duration);
        self.bottom.tick(dt, duration);
    }

    /// Whether any overlay still needs frames.
    pub fn any_visible(&self) -> bool {
        DockEdge::ALL.iter().any(|edge| self.get(*edge).is_visible())
    }
}

/// Everything the host needs to draw one overlay for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPose {
    /// The overlay's anchor point on the container edge, centered on the
    /// panel along the edge's axis.
    pub anchor: Point,
    /// Scale pivot as a fraction of the container (0..1 per axis).
    pub pivot: Point,
    /// Current scale in pixels per axis.
    pub scale: (f32, f32),
    /// Current opacity in `[0.0, 1.0]`.
    pub alpha: f32,
    /// Configured tint.
    pub color: Rgba,
}

/// Compute the frame pose for one edge's overlay.
///
/// Left/right overlays anchor on the container's vertical edge at the
/// panel's center-y and grow to (preferred snap width x container height);
/// top/bottom are symmetric.
pub(crate) fn pose_for(
    edge: DockEdge,
    container: Size,
    panel: Rect,
    preferred_snap: Size,
    animation: &OverlayAnimation,
    color: Rgba,
) -> OverlayPose {
    let anchor = match edge {
        DockEdge::Left => Point::new(0.0, panel.center_y()),
        DockEdge::Right => Point::new(container.width as f32, panel.center_y()),
        DockEdge::Top => Point::new(panel.center_x(), 0.0),
        DockEdge::Bottom => Point::new(panel.center_x(), container.height as f32),
    };

    let pivot = Point::new(
        if container.width > 0 {
            anchor.x / container.width as f32
        } else {
            0.0
        },
        if container.height > 0 {
            anchor.y / container.height as f32
        } else {
            0.0
        },
    );

    let target = match edge {
        DockEdge::Left | DockEdge::Right => (
            preferred_snap.width as f32,
            container.height as f32 + 1.0,
        ),
        DockEdge::Top | DockEdge::Bottom => (
            container.width as f32 + 1.0,
            preferred_snap.height as f32,
        ),
    };

    let visibility = animation.visibility();

    OverlayPose {
        anchor,
        pivot,
        scale: (target.0 * visibility, target.1 * visibility),
        alpha: visibility,
        color,
    }
}
