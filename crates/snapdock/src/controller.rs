#![forbid(unsafe_code)]

//! The panel controller: single owner of panel state and geometry.
//!
//! Raw pointer events enter here, get classified against the move/resize
//! handles, and are routed to the matching gesture listener. Listeners
//! mutate the controller's `PanelCore` and request snap/pop/placement
//! operations back through the controller, which is the only component that
//! talks to the [`LayoutDriver`] and the registered [`PanelCallbacks`].
//!
//! # State machine
//!
//! `Floating ⇄ Animating → Snapped`, `Snapped → Animating → Floating` (pop),
//! `{Floating, Snapped} → hidden` and back via [`set_visible`]. `Animating`
//! is never a stable rest state across gesture boundaries: operations that
//! enter it update the state optimistically before returning, and pointer
//! routing rejects input while it holds.
//!
//! # Asynchrony
//!
//! Starting a transition returns immediately. The host reports completion
//! through [`finish_transition`] on the same thread, which fires the
//! matching `after_*` callback. Tokens of superseded transitions are
//! ignored.
//!
//! [`set_visible`]: PanelController::set_visible
//! [`finish_transition`]: PanelController::finish_transition

use std::time::Duration;

use crate::callbacks::PanelCallbacks;
use crate::config::PanelConfig;
use crate::driver::{
    LayoutDriver, PanelPart, PanelParts, PanelPlacement, Transition, TransitionKind,
    TransitionToken,
};
use crate::error::{AttachError, ConfigError};
use crate::event::{PointerEvent, PointerKind};
use crate::geometry::{DockEdge, Point, Rect, Size};
use crate::gesture::{
    GestureCommand, MoveSnapListener, PointerDispatch, PopListener, ResizeListener, TouchSubject,
    store_nearest_edges,
};
use crate::overlay::{self, OverlayPose, SnapOverlays};
use crate::state::{PanelState, SavedLayout, SavedSize, Snap};

/// The mutable data the controller and its listeners share.
#[derive(Debug)]
pub(crate) struct PanelCore {
    pub(crate) config: PanelConfig,
    pub(crate) state: PanelState,
    pub(crate) container: Size,
    /// The panel's current on-screen geometry.
    pub(crate) panel: Rect,
    pub(crate) overlays: SnapOverlays,
    pub(crate) resize_handle_visible: bool,
}

impl PanelCore {
    pub(crate) fn new(config: PanelConfig, container: Size) -> Self {
        let panel = Rect::new(0, 0, config.start_size.width, config.start_size.height);
        let state = PanelState {
            size: SavedSize::new(config.start_size.width, config.start_size.height),
            ..PanelState::default()
        };
        let resize_handle_visible = config.resize_enabled;

        Self {
            config,
            state,
            container,
            panel,
            overlays: SnapOverlays::default(),
            resize_handle_visible,
        }
    }

    /// The state a fresh (non-restored) attachment starts from.
    pub(crate) fn initial_state(&self) -> PanelState {
        PanelState {
            size: SavedSize::new(self.config.start_size.width, self.config.start_size.height),
            ..PanelState::default()
        }
    }

    /// Resize math: clamp `current + diff` into `[min, max]` per axis, then
    /// subtract any overflow past the container's right/bottom edge. The
    /// overflow adjustment is computed from the current position and is not
    /// re-clamped.
    pub(crate) fn calculate_new_size(&self, diff_x: f32, diff_y: f32) -> (i32, i32) {
        let width = ((self.panel.width as f32 + diff_x).round() as i32)
            .clamp(self.config.min_size.width, self.config.max_size.width);
        let height = ((self.panel.height as f32 + diff_y).round() as i32)
            .clamp(self.config.min_size.height, self.config.max_size.height);

        let adjustment_x = (self.container.width - (self.panel.x + width)).min(0);
        let adjustment_y = (self.container.height - (self.panel.y + height)).min(0);

        (width + adjustment_x, height + adjustment_y)
    }

    /// The docked geometry for an edge: flush against it, spanning the full
    /// container along the edge's axis, with the configured extent across.
    pub(crate) fn docked_rect(&self, edge: DockEdge) -> Rect {
        match edge {
            DockEdge::Left => {
                let width = self.config.dock_extent_for(edge).resolve(self.container.width);
                Rect::new(0, 0, width, self.container.height)
            }
            DockEdge::Right => {
                let width = self.config.dock_extent_for(edge).resolve(self.container.width);
                Rect::new(self.container.width - width, 0, width, self.container.height)
            }
            DockEdge::Top => {
                let height = self
                    .config
                    .dock_extent_for(edge)
                    .resolve(self.container.height);
                Rect::new(0, 0, self.container.width, height)
            }
            DockEdge::Bottom => {
                let height = self
                    .config
                    .dock_extent_for(edge)
                    .resolve(self.container.height);
                Rect::new(0, self.container.height - height, self.container.width, height)
            }
        }
    }
}

/// A transition issued to the driver and not yet reported complete.
#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    token: TransitionToken,
    kind: TransitionKind,
}

/// The orchestrating widget component. See the module docs.
pub struct PanelController<D: LayoutDriver, P: PanelParts> {
    core: PanelCore,
    driver: D,
    parts: P,
    callbacks: Option<Box<dyn PanelCallbacks>>,
    dispatch: PointerDispatch,
    move_snap: MoveSnapListener,
    pop: PopListener,
    resize: ResizeListener,
    pending: Vec<PendingTransition>,
    next_token: u64,
    attached: bool,
}

impl<D: LayoutDriver, P: PanelParts> PanelController<D, P> {
    /// Create a controller over the host's layout driver and part lookup.
    pub fn new(config: PanelConfig, driver: D, parts: P) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            core: PanelCore::new(config, Size::default()),
            driver,
            parts,
            callbacks: None,
            dispatch: PointerDispatch::default(),
            move_snap: MoveSnapListener,
            pop: PopListener,
            resize: ResizeListener::default(),
            pending: Vec::new(),
            next_token: 0,
            attached: false,
        })
    }

    /// Attach to the host surface.
    ///
    /// `saved` carries a state restored from a previous surface; `None`
    /// starts fresh from the configured defaults. Either way the panel is
    /// placed (or re-snapped) according to the resulting state.
    pub fn attach(
        &mut self,
        container: Size,
        saved: Option<PanelState>,
    ) -> Result<(), AttachError> {
        self.ensure_parts()?;

        self.core.container = container;
        self.core.state = match saved {
            Some(state) => state,
            None => self.core.initial_state(),
        };
        self.attached = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(snap = ?self.core.state.snap, visible = self.core.state.visible, "panel attached");

        self.restore_from_state();
        Ok(())
    }

    fn ensure_parts(&self) -> Result<(), AttachError> {
        for part in [PanelPart::Content, PanelPart::Panel, PanelPart::MoveHandle] {
            if self.parts.bounds(part).is_none() {
                return Err(AttachError::MissingPart { part });
            }
        }
        if self.core.config.resize_enabled
            && self.parts.bounds(PanelPart::ResizeHandle).is_none()
        {
            return Err(AttachError::MissingPart {
                part: PanelPart::ResizeHandle,
            });
        }
        Ok(())
    }

    /// Feed one pointer sample. Returns whether the event was consumed by a
    /// panel gesture; unconsumed presses and taps fall through to the
    /// host's normal click handling.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.attached {
            return false;
        }

        match event.kind {
            PointerKind::Down => {
                self.dispatch.on_down(
                    event.position,
                    self.core.panel.x,
                    self.core.panel.y,
                    &self.parts,
                    self.core.config.resize_enabled,
                );
                false
            }
            PointerKind::Move => {
                if !self
                    .dispatch
                    .accept(event.position, self.core.config.touch_slop)
                {
                    return false;
                }
                self.route_move(event.position)
            }
            PointerKind::Up => {
                let accepted = self
                    .dispatch
                    .accept(event.position, self.core.config.touch_slop);
                let consumed = accepted && self.route_up(event.position);
                self.dispatch.clear();
                consumed
            }
            PointerKind::Cancel => {
                self.dispatch.clear();
                false
            }
        }
    }

    fn route_move(&mut self, point: Point) -> bool {
        let mut commands = Vec::new();

        match (self.dispatch.subject(), self.core.state.snap) {
            (Some(TouchSubject::MoveHandle), Snap::Floating) => {
                let grab = self.dispatch.grab_offset();
                self.move_snap
                    .on_move(&mut self.core, point, grab, &mut commands);
            }
            (Some(TouchSubject::MoveHandle), Snap::Snapped) => {
                self.pop.on_move(&mut self.core, point, &mut commands);
            }
            (Some(TouchSubject::ResizeHandle), Snap::Floating) => {
                let Some(press) = self.dispatch.last_down() else {
                    return false;
                };
                self.resize
                    .on_move(&mut self.core, point, press, &mut commands);
            }
            _ => return false,
        }

        self.execute(commands, point);
        true
    }

    fn route_up(&mut self, point: Point) -> bool {
        let mut commands = Vec::new();

        match (self.dispatch.subject(), self.core.state.snap) {
            (Some(TouchSubject::MoveHandle), Snap::Floating) => {
                self.move_snap.on_up(&mut self.core, &mut commands);
            }
            (Some(TouchSubject::MoveHandle), Snap::Snapped) => {
                // The pop listener already undocked on move; release is
                // bookkeeping only.
            }
            (Some(TouchSubject::ResizeHandle), Snap::Floating) => {
                self.resize.on_up();
            }
            _ => return false,
        }

        self.execute(commands, point);
        true
    }

    fn execute(&mut self, commands: Vec<GestureCommand>, point: Point) {
        for command in commands {
            match command {
                GestureCommand::MovePanel { x, y } => {
                    self.core.panel.x = x;
                    self.core.panel.y = y;
                    self.driver.apply(PanelPlacement::Floating {
                        rect: self.core.panel,
                    });
                    store_nearest_edges(&mut self.core);
                }
                GestureCommand::ApplySize { width, height } => self.apply_size(width, height),
                GestureCommand::Snap { edge } => self.snap_to(edge),
                GestureCommand::Pop { x, y } => {
                    self.pop_to(x, y);
                    // Later samples of this gesture route to the move
                    // listener; re-derive the grab offset against the popped
                    // geometry so the panel keeps tracking the finger.
                    self.dispatch
                        .set_grab_offset(Point::new(point.x - x as f32, point.y - y as f32));
                }
            }
        }
    }

    /// Show or hide the panel.
    ///
    /// Hiding while snapped runs an animated collapse first and fires
    /// `after_close` when the host reports it complete. Showing re-applies
    /// the persisted state: floating position/size, or a re-snap to the
    /// persisted edge.
    pub fn set_visible(&mut self, visible: bool) {
        #[cfg(feature = "tracing")]
        tracing::debug!(visible, "set panel visibility");

        if visible {
            self.core.state.visible = true;
            self.driver.set_panel_visible(true);
            self.restore_from_state();
        } else {
            if self.core.state.snap == Snap::Snapped {
                let from = self.core.panel;
                let transition = self.begin(TransitionKind::Close, from);
                self.driver.animate_hide(transition);
            }
            self.driver.set_panel_visible(false);
            self.core.state.visible = false;
        }
    }

    /// Whether the panel is currently shown.
    pub fn visible(&self) -> bool {
        self.core.state.visible
    }

    /// Dock the panel to `edge` with an animated transition.
    ///
    /// Fires `before_snap` now and `after_snap` when the host reports the
    /// transition complete. State is updated optimistically: `snap` reads
    /// `Snapped` as soon as the transition is issued.
    pub fn snap_to(&mut self, edge: DockEdge) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?edge, "snap panel");

        // Interpolate from the true on-screen geometry (the floating
        // panel's absolute offset becomes the transition's start rect).
        let from = self.core.panel;

        self.core.state.snap = Snap::Animating;
        self.core.state.position = Some(edge);

        let rect = self.core.docked_rect(edge);
        let transition = self.begin(TransitionKind::Snap(edge), from);

        self.core.resize_handle_visible = false;
        if let Some(callbacks) = self.callbacks.as_deref_mut() {
            callbacks.before_snap(edge);
        }

        self.driver
            .animate(PanelPlacement::Docked { edge, rect }, transition);

        self.core.panel = rect;
        self.core.state.snap = Snap::Snapped;
    }

    /// Undock the panel toward a floating top-left with an animated
    /// transition, restoring the sanitized floating size.
    ///
    /// Fires `before_pop` now and `after_pop` on reported completion. State
    /// is updated optimistically: `snap` reads `Floating` and `position`
    /// clears as soon as the transition is issued.
    pub fn pop_to(&mut self, x: i32, y: i32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(x, y, "pop panel");

        let from = self.core.panel;

        self.core.state.snap = Snap::Animating;

        let size = self
            .core
            .state
            .size
            .resolve(self.core.config.start_size, self.core.container);
        let rect = Rect::new(x, y, size.width, size.height);
        let transition = self.begin(TransitionKind::Pop { x, y }, from);

        self.core.resize_handle_visible = self.core.config.resize_enabled;
        if let Some(callbacks) = self.callbacks.as_deref_mut() {
            callbacks.before_pop(x, y);
        }

        self.driver
            .animate(PanelPlacement::Floating { rect }, transition);

        self.core.panel = rect;
        self.core.state.position = None;
        self.core.state.snap = Snap::Floating;
    }

    /// Pin the panel to an absolute position and size immediately, without
    /// animation. Used for initial layout, restoration, and any direct
    /// placement the host needs.
    pub fn apply_floating_constraints(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.core.panel = Rect::new(x, y, width, height);
        self.driver.apply(PanelPlacement::Floating {
            rect: self.core.panel,
        });
    }

    /// The host's container changed size. While floating, the panel is
    /// re-clamped into the new bounds with a zero-delta resize (e.g. an
    /// on-screen keyboard shrinking the available space).
    pub fn set_container_size(&mut self, container: Size) {
        self.core.container = container;

        if self.attached && self.core.state.snap == Snap::Floating {
            let (width, height) = self.core.calculate_new_size(0.0, 0.0);
            self.apply_size(width, height);
        }
    }

    /// Advance overlay animations by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.core
            .overlays
            .tick(dt, self.core.config.overlay_animation);
    }

    /// The host reports an animated transition as finished. Fires the
    /// matching `after_*` callback; stale tokens are ignored.
    pub fn finish_transition(&mut self, token: TransitionToken) {
        let Some(index) = self.pending.iter().position(|p| p.token == token) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?token, "ignoring stale transition token");
            return;
        };
        let pending = self.pending.remove(index);

        let Some(callbacks) = self.callbacks.as_deref_mut() else {
            return;
        };
        match pending.kind {
            TransitionKind::Snap(edge) => callbacks.after_snap(edge),
            TransitionKind::Pop { x, y } => callbacks.after_pop(x, y),
            TransitionKind::Close => callbacks.after_close(),
        }
    }

    /// The frame pose for an edge's snap overlay, or `None` while hidden.
    pub fn overlay_pose(&self, edge: DockEdge) -> Option<OverlayPose> {
        let animation = self.core.overlays.get(edge);
        if !animation.is_visible() {
            return None;
        }

        let preferred = Size::new(
            self.core.config.preferred_snap_width(self.core.container),
            self.core.config.preferred_snap_height(self.core.container),
        );

        Some(overlay::pose_for(
            edge,
            self.core.container,
            self.core.panel,
            preferred,
            animation,
            self.core.config.overlay_color,
        ))
    }

    /// Register the host's callback listener, replacing any previous one.
    pub fn set_callbacks(&mut self, callbacks: Box<dyn PanelCallbacks>) {
        self.callbacks = Some(callbacks);
    }

    /// Remove the callback listener.
    pub fn clear_callbacks(&mut self) {
        self.callbacks = None;
    }

    /// Snapshot of the persistable state.
    pub fn state(&self) -> &PanelState {
        &self.core.state
    }

    /// Bundle the current state with the host's opaque base state for
    /// persistence.
    pub fn saved_layout(&self, host: Vec<u8>) -> SavedLayout {
        SavedLayout::new(host, self.core.state.clone())
    }

    /// The panel's current on-screen geometry.
    pub fn panel_rect(&self) -> Rect {
        self.core.panel
    }

    /// The container size last pushed by the host.
    pub fn container_size(&self) -> Size {
        self.core.container
    }

    /// Whether the resize handle should currently be shown.
    pub fn resize_handle_visible(&self) -> bool {
        self.core.resize_handle_visible
    }

    /// The immutable configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.core.config
    }

    /// The host's layout driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the host's layout driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn begin(&mut self, kind: TransitionKind, from: Rect) -> Transition {
        self.next_token += 1;
        let token = TransitionToken(self.next_token);
        self.pending.push(PendingTransition { token, kind });

        Transition {
            token,
            kind,
            from,
            duration: self.core.config.snap_animation,
        }
    }

    fn restore_from_state(&mut self) {
        if !self.core.state.visible {
            self.driver.set_panel_visible(false);
            return;
        }

        if self.core.state.snap == Snap::Floating {
            self.restore_floating();
        } else if let Some(edge) = self.core.state.position {
            self.snap_to(edge);
        } else {
            // Saved mid-flight without a target edge: settle as floating.
            self.core.state.snap = Snap::Floating;
            self.restore_floating();
        }
    }

    fn restore_floating(&mut self) {
        let size = self
            .core
            .state
            .size
            .resolve(self.core.config.start_size, self.core.container);

        let x = self
            .core
            .state
            .horizontal_edge_distance
            .to_x(size.width, self.core.container.width);
        let y = self
            .core
            .state
            .vertical_edge_distance
            .to_y(size.height, self.core.container.height);

        self.apply_floating_constraints(x, y, size.width, size.height);
    }

    fn apply_size(&mut self, width: i32, height: i32) {
        self.core.panel.width = width;
        self.core.panel.height = height;
        self.driver.apply(PanelPlacement::Floating {
            rect: self.core.panel,
        });
    }
}
