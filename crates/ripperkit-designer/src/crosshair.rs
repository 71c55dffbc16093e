//! Crosshair controller.
//!
//! Owns the crosshair position, the selected quadrant lines and the
//! hover/drag indicator, and turns pointer input into state changes.
//!
//! # Pointer model
//!
//! Pointer positions are canvas pixels, already translated by the host from
//! window/touch coordinates. Events must be delivered in arrival order and
//! each handler runs to completion, including every notification it
//! publishes, before the next one starts.
//!
//! | Input            | Target        | Effect                                     |
//! |------------------|---------------|--------------------------------------------|
//! | down             | centre handle | start drag, move crosshair, notify         |
//! | down             | nothing       | move crosshair, notify                     |
//! | down             | line 1..4     | toggle the line, notify                    |
//! | move (dragging)  | -             | move crosshair, notify every move          |
//! | move (released)  | any           | hover indicator follows the hit test       |
//! | move (pressed)   | any           | hover cleared                              |
//! | up / leave       | -             | hover cleared, drag settles with a notify  |
//!
//! # Listeners
//!
//! Listeners run synchronously in registration order and get a snapshot of
//! the state. They must not call back into the controller; hosts that share
//! the controller through `Rc<RefCell<_>>` will hit a borrow panic if they do.

use ripperkit_core::constants::{CONTAINER_MARGIN, DEFAULT_HIT_RADIUS};
use ripperkit_core::{
    ChangeEvent, CrosshairEvent, EventBus, EventFilter, HitTarget, Panel, Point, QuadrantLine,
    SelectionSet, SubscriptionId,
};

use crate::hit_test::hit_test;
use crate::viewport::ViewScale;

/// Construction options for a [`CrosshairController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairOptions {
    /// Physical panel dimensions
    pub panel: Panel,
    /// Pointer hit radius in canvas pixels
    pub hit_radius: f64,
    /// Space left around the canvas when fitting it to its container
    pub container_margin: f64,
}

impl Default for CrosshairOptions {
    fn default() -> Self {
        Self {
            panel: Panel::default(),
            hit_radius: DEFAULT_HIT_RADIUS,
            container_margin: CONTAINER_MARGIN,
        }
    }
}

/// What the pointer is currently doing with the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Nothing highlighted
    #[default]
    Idle,
    /// Pointer is over a target without a button held
    Hovering(HitTarget),
    /// The centre handle is being dragged
    Dragging,
}

impl InteractionMode {
    /// The hover indicator implied by this mode
    pub fn hover(self) -> HitTarget {
        match self {
            InteractionMode::Idle => HitTarget::None,
            InteractionMode::Hovering(target) => target,
            InteractionMode::Dragging => HitTarget::Center,
        }
    }

    fn normalized(self) -> Self {
        match self {
            InteractionMode::Hovering(HitTarget::None) => InteractionMode::Idle,
            other => other,
        }
    }
}

/// Interactive crosshair state machine.
#[derive(Debug)]
pub struct CrosshairController {
    panel: Panel,
    position: Point,
    selection: SelectionSet,
    mode: InteractionMode,
    view: ViewScale,
    hit_radius: f64,
    container_margin: f64,
    bus: EventBus,
}

impl CrosshairController {
    /// Create a controller for `panel` with default interaction options.
    pub fn new(panel: Panel) -> Self {
        Self::with_options(CrosshairOptions {
            panel,
            ..CrosshairOptions::default()
        })
    }

    /// Create a controller from explicit options.
    ///
    /// The crosshair starts at the panel centre with nothing selected.
    pub fn with_options(options: CrosshairOptions) -> Self {
        let panel = options.panel;
        Self {
            panel,
            position: panel.center(),
            selection: SelectionSet::new(),
            mode: InteractionMode::Idle,
            view: ViewScale::new(&panel),
            hit_radius: options.hit_radius,
            container_margin: options.container_margin,
            bus: EventBus::new(),
        }
    }

    /// Panel dimensions.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Crosshair position in panel units.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Selected quadrant lines.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected quadrant line ids in selection order.
    pub fn quads(&self) -> Vec<u8> {
        self.selection.ids()
    }

    /// Current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Current hover indicator.
    pub fn hover(&self) -> HitTarget {
        self.mode.hover()
    }

    /// Whether the centre handle is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.mode == InteractionMode::Dragging
    }

    /// Current view scale.
    pub fn view(&self) -> &ViewScale {
        &self.view
    }

    /// Pointer hit radius in canvas pixels.
    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    /// Snapshot of position and selection, as carried by change events.
    pub fn snapshot(&self) -> ChangeEvent {
        ChangeEvent::new(self.position, &self.selection)
    }

    /// Crosshair position in canvas pixels.
    pub fn crosshair_pixel(&self) -> Point {
        self.view.world_to_pixel(&self.panel, self.position)
    }

    /// Register a listener for committed changes.
    pub fn on_change<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.bus.subscribe(EventFilter::changes(), move |event| {
            if let CrosshairEvent::Changed(change) = event {
                listener(change);
            }
        })
    }

    /// Register a listener for any subset of controller events.
    pub fn subscribe<F>(&mut self, filter: EventFilter, listener: F) -> SubscriptionId
    where
        F: Fn(&CrosshairEvent) + 'static,
    {
        self.bus.subscribe(filter, listener)
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Resolve what a pointer at `pointer` (canvas pixels) is over.
    pub fn hit_test(&self, pointer: Point) -> HitTarget {
        hit_test(self.crosshair_pixel(), pointer, self.hit_radius)
    }

    /// Flip the selection of one quadrant line and notify.
    pub fn toggle_quad(&mut self, line: QuadrantLine) {
        self.apply_toggle(line);
        self.request_redraw();
    }

    /// Move the crosshair to `(x, y)` panel units and notify.
    ///
    /// Out-of-panel positions are accepted as-is.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
        self.emit_change();
        self.request_redraw();
    }

    /// Replace the selection and notify. `None` clears it.
    pub fn set_selection(&mut self, selection: Option<SelectionSet>) {
        self.selection = selection.unwrap_or_default();
        tracing::debug!("Selection replaced: {:?}", self.selection.ids());
        self.emit_change();
        self.request_redraw();
    }

    /// Fit the canvas to a container of the given pixel width.
    pub fn resize(&mut self, container_width: f64) {
        self.view
            .resize(&self.panel, container_width, self.container_margin);
        tracing::debug!(
            "Canvas resized to {:.0}x{:.0} (scale {:.4})",
            self.view.canvas_width(),
            self.view.canvas_height(),
            self.view.scale()
        );
        self.request_redraw();
    }

    /// Pointer pressed at `pointer` (canvas pixels).
    pub fn on_pointer_down(&mut self, pointer: Point) {
        let hit = self.hit_test(pointer);
        let next = match hit {
            HitTarget::Center => InteractionMode::Dragging,
            _ if self.is_dragging() => InteractionMode::Dragging,
            _ => InteractionMode::Idle,
        };
        self.set_mode(next);

        match hit {
            HitTarget::Center => {
                tracing::debug!("Drag started");
                self.move_to_pointer(pointer);
            }
            HitTarget::None => self.move_to_pointer(pointer),
            HitTarget::Line(line) => self.apply_toggle(line),
        }
        self.request_redraw();
    }

    /// Pointer moved to `pointer` (canvas pixels). `pressed` is true while a
    /// button or touch is held.
    pub fn on_pointer_move(&mut self, pointer: Point, pressed: bool) {
        if self.is_dragging() {
            self.move_to_pointer(pointer);
        } else if pressed {
            // Press started off-target: no highlight until release
            self.set_mode(InteractionMode::Idle);
        } else {
            let hit = self.hit_test(pointer);
            self.set_mode(InteractionMode::Hovering(hit));
        }
        self.request_redraw();
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self) {
        self.settle();
    }

    /// Pointer left the canvas. Cancels a drag exactly like a release.
    pub fn on_pointer_leave(&mut self) {
        self.settle();
    }

    fn settle(&mut self) {
        let was_dragging = self.is_dragging();
        self.set_mode(InteractionMode::Idle);
        if was_dragging {
            tracing::debug!("Drag ended at {}", self.position);
            self.emit_change();
        }
        self.request_redraw();
    }

    fn apply_toggle(&mut self, line: QuadrantLine) {
        let selected = self.selection.toggle(line);
        tracing::debug!(
            "Quadrant line {} {}",
            line.id(),
            if selected { "selected" } else { "deselected" }
        );
        self.emit_change();
    }

    fn move_to_pointer(&mut self, pointer: Point) {
        self.position = self.view.pixel_to_world(&self.panel, pointer);
        tracing::trace!("Crosshair moved to {}", self.position);
        self.emit_change();
    }

    fn set_mode(&mut self, mode: InteractionMode) {
        let previous = self.hover();
        self.mode = mode.normalized();
        let current = self.hover();
        if previous != current {
            self.bus.publish(&CrosshairEvent::HoverChanged(current));
        }
    }

    fn emit_change(&self) {
        self.bus.publish(&CrosshairEvent::Changed(self.snapshot()));
    }

    fn request_redraw(&self) {
        self.bus.publish(&CrosshairEvent::RedrawRequested);
    }
}

impl Default for CrosshairController {
    fn default() -> Self {
        Self::with_options(CrosshairOptions::default())
    }
}
