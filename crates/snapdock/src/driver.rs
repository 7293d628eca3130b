#![forbid(unsafe_code)]

//! Capability seams to the host's layout and animation services.
//!
//! The controller never renders or animates anything itself. It describes
//! placements and transitions through [`LayoutDriver`] and reads part bounds
//! through [`PanelParts`]; the host owns the actual layout engine, the
//! animation clock, and the view tree.
//!
//! Animated transitions are fire-and-forget from the core's perspective:
//! [`LayoutDriver::animate`] returns immediately, and the host reports
//! completion later by calling
//! [`PanelController::finish_transition`](crate::controller::PanelController::finish_transition)
//! with the transition's token on the same thread.

use std::time::Duration;

use crate::geometry::{DockEdge, Rect};

/// Identifies one issued transition so the host can report its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub(crate) u64);

/// Why a transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Docking to an edge.
    Snap(DockEdge),
    /// Undocking back to floating at the given top-left.
    Pop { x: i32, y: i32 },
    /// Collapsing away while being hidden.
    Close,
}

/// One animated layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub token: TransitionToken,
    pub kind: TransitionKind,
    /// The panel's on-screen geometry when the transition was issued; the
    /// animation interpolates from here.
    pub from: Rect,
    pub duration: Duration,
}

/// Where the panel should sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPlacement {
    /// Absolute position and size.
    Floating { rect: Rect },
    /// Flush against an edge with the configured docked geometry.
    Docked { edge: DockEdge, rect: Rect },
}

impl PanelPlacement {
    /// The target geometry regardless of mode.
    pub const fn rect(&self) -> Rect {
        match self {
            PanelPlacement::Floating { rect } | PanelPlacement::Docked { rect, .. } => *rect,
        }
    }
}

/// The host's layout/animation service.
pub trait LayoutDriver {
    /// Pin the panel to a placement immediately, without animation.
    fn apply(&mut self, placement: PanelPlacement);

    /// Animate the panel to a placement. Completion must be reported back
    /// with the transition's token.
    fn animate(&mut self, placement: PanelPlacement, transition: Transition);

    /// Animate the panel surface away (bounds collapse while hiding).
    /// Completion must be reported back with the transition's token.
    fn animate_hide(&mut self, transition: Transition);

    /// Show or hide the panel surface immediately.
    fn set_panel_visible(&mut self, visible: bool);
}

/// The child elements the widget needs from the host's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPart {
    /// The panel surface itself.
    Panel,
    /// The content surface behind the panel.
    Content,
    /// The draggable region that moves (or undocks) the panel.
    MoveHandle,
    /// The draggable region that resizes the panel while floating.
    ResizeHandle,
}

impl PanelPart {
    /// The configured reference name, for error messages.
    pub const fn reference_name(self) -> &'static str {
        match self {
            PanelPart::Panel => "panel_view",
            PanelPart::Content => "panel_content",
            PanelPart::MoveHandle => "panel_move_handle",
            PanelPart::ResizeHandle => "panel_resize_handle",
        }
    }
}

/// Container-space bounds lookup for the widget's parts.
///
/// Implementations translate each part's local bounds up through their
/// ancestor chain into the container's coordinate space. `None` means the
/// part does not exist in the host's tree.
pub trait PanelParts {
    fn bounds(&self, part: PanelPart) -> Option<Rect>;
}
