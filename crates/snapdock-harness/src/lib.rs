#![forbid(unsafe_code)]

//! Test harness and reference fixtures for the panel widget.
//!
//! Everything here exists to drive a [`PanelController`] deterministically
//! without a real layout engine: a driver that records layout operations
//! instead of performing them, a part lookup whose handle bounds follow the
//! panel the way a real view tree would, a callback log, and pointer-script
//! helpers for scripting whole gestures.
//!
//! # Design
//!
//! [`PanelFixture`] is the entry point. It bundles a controller over a
//! [`RecordingDriver`] and [`FixtureParts`], registers a [`CallbackLog`],
//! and keeps the fake part bounds in sync after every pointer sample.
//! Animated transitions never complete on their own; tests settle them
//! explicitly with [`PanelFixture::finish_transitions`], which mirrors the
//! host reporting completion on the UI thread.

use std::cell::RefCell;
use std::rc::Rc;

use snapdock::{
    DockEdge, LayoutDriver, PanelCallbacks, PanelConfig, PanelController, PanelPart, PanelParts,
    PanelPlacement, PanelState, Point, PointerEvent, Rect, Size, Transition, TransitionToken,
};

/// Height of the fixture's move-handle strip along the panel's top.
pub const MOVE_HANDLE_HEIGHT: i32 = 24;

/// Side length of the fixture's resize grip in the panel's bottom-right.
pub const RESIZE_GRIP: i32 = 16;

/// One layout operation the controller asked the driver to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutOp {
    /// Immediate placement, no animation.
    Applied(PanelPlacement),
    /// Animated transition toward a placement.
    Animated {
        placement: PanelPlacement,
        transition: Transition,
    },
    /// Animated bounds collapse while hiding.
    Hidden(Transition),
    /// Panel surface shown or hidden.
    Visibility(bool),
}

/// A [`LayoutDriver`] that records operations instead of performing them.
///
/// Issued transitions stay pending until a test drains them and reports
/// completion back to the controller.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    ops: Vec<LayoutOp>,
    pending: Vec<Transition>,
}

impl RecordingDriver {
    /// Every operation recorded so far, in order.
    pub fn ops(&self) -> &[LayoutOp] {
        &self.ops
    }

    /// Forget recorded operations; pending transitions are kept.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Transitions issued but not yet reported complete.
    pub fn pending(&self) -> &[Transition] {
        &self.pending
    }

    /// Take the pending transition tokens for completion reporting.
    pub fn drain_pending(&mut self) -> Vec<TransitionToken> {
        self.pending.drain(..).map(|t| t.token).collect()
    }

    /// The most recently issued animated transition, if any.
    pub fn last_transition(&self) -> Option<Transition> {
        self.ops.iter().rev().find_map(|op| match op {
            LayoutOp::Animated { transition, .. } | LayoutOp::Hidden(transition) => {
                Some(*transition)
            }
            _ => None,
        })
    }
}

impl LayoutDriver for RecordingDriver {
    fn apply(&mut self, placement: PanelPlacement) {
        tracing::trace!(?placement, "apply");
        self.ops.push(LayoutOp::Applied(placement));
    }

    fn animate(&mut self, placement: PanelPlacement, transition: Transition) {
        tracing::trace!(?placement, token = ?transition.token, "animate");
        self.ops.push(LayoutOp::Animated {
            placement,
            transition,
        });
        self.pending.push(transition);
    }

    fn animate_hide(&mut self, transition: Transition) {
        tracing::trace!(token = ?transition.token, "animate hide");
        self.ops.push(LayoutOp::Hidden(transition));
        self.pending.push(transition);
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.ops.push(LayoutOp::Visibility(visible));
    }
}

/// One recorded lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackEvent {
    BeforeSnap(DockEdge),
    AfterSnap(DockEdge),
    BeforePop { x: i32, y: i32 },
    AfterPop { x: i32, y: i32 },
    AfterClose,
}

/// A [`PanelCallbacks`] listener that records every notification in order.
///
/// Clones share the same log, so a test can keep one handle while the
/// controller owns the other.
#[derive(Debug, Clone, Default)]
pub struct CallbackLog(Rc<RefCell<Vec<CallbackEvent>>>);

impl CallbackLog {
    /// Everything recorded so far, in firing order.
    pub fn events(&self) -> Vec<CallbackEvent> {
        self.0.borrow().clone()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl PanelCallbacks for CallbackLog {
    fn before_snap(&mut self, edge: DockEdge) {
        self.0.borrow_mut().push(CallbackEvent::BeforeSnap(edge));
    }

    fn after_snap(&mut self, edge: DockEdge) {
        self.0.borrow_mut().push(CallbackEvent::AfterSnap(edge));
    }

    fn before_pop(&mut self, x: i32, y: i32) {
        self.0.borrow_mut().push(CallbackEvent::BeforePop { x, y });
    }

    fn after_pop(&mut self, x: i32, y: i32) {
        self.0.borrow_mut().push(CallbackEvent::AfterPop { x, y });
    }

    fn after_close(&mut self) {
        self.0.borrow_mut().push(CallbackEvent::AfterClose);
    }
}

/// Container-space part bounds that follow a shared panel rect.
///
/// The move handle is the panel's top strip, the resize grip sits in the
/// panel's bottom-right corner, and the content fills the container.
#[derive(Clone)]
pub struct FixtureParts {
    panel: Rc<RefCell<Rect>>,
    container: Size,
    resize_present: bool,
}

impl PanelParts for FixtureParts {
    fn bounds(&self, part: PanelPart) -> Option<Rect> {
        let panel = *self.panel.borrow();
        match part {
            PanelPart::Panel => Some(panel),
            PanelPart::Content => {
                Some(Rect::new(0, 0, self.container.width, self.container.height))
            }
            PanelPart::MoveHandle => Some(Rect::new(
                panel.x,
                panel.y,
                panel.width,
                MOVE_HANDLE_HEIGHT.min(panel.height),
            )),
            PanelPart::ResizeHandle => self.resize_present.then(|| {
                Rect::new(
                    panel.right() - RESIZE_GRIP,
                    panel.bottom() - RESIZE_GRIP,
                    RESIZE_GRIP,
                    RESIZE_GRIP,
                )
            }),
        }
    }
}

/// A whole-widget fixture: controller, recording driver, tracked parts, and
/// callback log wired together.
pub struct PanelFixture {
    pub controller: PanelController<RecordingDriver, FixtureParts>,
    pub callbacks: CallbackLog,
    panel: Rc<RefCell<Rect>>,
}

impl PanelFixture {
    /// Fresh attachment: default state at the configured start size.
    pub fn new(config: PanelConfig, container: Size) -> Self {
        Self::build(config, container, None)
    }

    /// Attachment with a state restored from a previous surface.
    pub fn restored(config: PanelConfig, container: Size, saved: PanelState) -> Self {
        Self::build(config, container, Some(saved))
    }

    fn build(config: PanelConfig, container: Size, saved: Option<PanelState>) -> Self {
        let panel = Rc::new(RefCell::new(Rect::default()));
        let parts = FixtureParts {
            panel: Rc::clone(&panel),
            container,
            resize_present: true,
        };
        let callbacks = CallbackLog::default();

        let mut controller = PanelController::new(config, RecordingDriver::default(), parts)
            .expect("valid fixture config");
        controller.set_callbacks(Box::new(callbacks.clone()));
        controller.attach(container, saved).expect("fixture attach");
        *panel.borrow_mut() = controller.panel_rect();

        Self {
            controller,
            callbacks,
            panel,
        }
    }

    /// Copy the controller's panel geometry into the fake part bounds, the
    /// way a real view tree would after layout.
    pub fn sync(&mut self) {
        *self.panel.borrow_mut() = self.controller.panel_rect();
    }

    /// Feed one pointer sample and re-sync the part bounds.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let consumed = self.controller.handle_pointer(event);
        self.sync();
        consumed
    }

    /// Script a whole drag: press at `from`, `steps` interpolated moves,
    /// release at `to`. Returns whether any sample was consumed.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) -> bool {
        let mut consumed = self.pointer(PointerEvent::down(from.x, from.y));

        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            consumed |= self.pointer(PointerEvent::moved(x, y));
        }

        consumed | self.pointer(PointerEvent::up(to.x, to.y))
    }

    /// Report every issued transition as complete, firing the controller's
    /// deferred `after_*` callbacks in issue order.
    pub fn finish_transitions(&mut self) {
        loop {
            let tokens = self.controller.driver_mut().drain_pending();
            if tokens.is_empty() {
                break;
            }
            for token in tokens {
                self.controller.finish_transition(token);
            }
        }
    }
}
