//! Drawing surface lifecycle
//!
//! The actual drawing backend (a turtle-graphics window in a desktop host)
//! sits behind the [`DrawingSurface`] trait. [`DrawingController`] owns one
//! surface instance and is injected into the callers that need it — there
//! is no module-level shared handle. It tracks initialization and
//! visibility and notifies an optional callback on visibility changes.

use tracing::debug;

/// Backend operations a drawing host must provide.
pub trait DrawingSurface {
    fn initialize(&mut self);
    fn show(&mut self);
    fn hide(&mut self);
    fn clear(&mut self);
}

type VisibilityCallback = Box<dyn FnMut(bool)>;

/// Explicitly owned wrapper around a drawing surface.
pub struct DrawingController {
    surface: Box<dyn DrawingSurface>,
    initialized: bool,
    visible: bool,
    on_visibility_change: Option<VisibilityCallback>,
}

impl DrawingController {
    pub fn new(surface: Box<dyn DrawingSurface>) -> Self {
        Self {
            surface,
            initialized: false,
            visible: false,
            on_visibility_change: None,
        }
    }

    /// Register a callback invoked whenever visibility flips.
    pub fn set_visibility_callback(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_visibility_change = Some(Box::new(callback));
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Initialize the backend once; later calls are no-ops.
    pub fn initialize(&mut self) {
        if !self.initialized {
            debug!("initializing drawing surface");
            self.surface.initialize();
            self.initialized = true;
        }
    }

    pub fn show(&mut self) {
        self.initialize();
        self.surface.show();
        if !self.visible {
            self.visible = true;
            self.notify(true);
        }
    }

    pub fn hide(&mut self) {
        if self.initialized && self.visible {
            self.surface.hide();
            self.visible = false;
            self.notify(false);
        }
    }

    pub fn clear(&mut self) {
        if self.initialized {
            self.surface.clear();
        }
    }

    /// Pop the surface open if it is not already showing. Used when
    /// submitted code contains a drawing command.
    pub fn ensure_visible(&mut self) {
        if !self.visible {
            self.show();
        }
    }

    fn notify(&mut self, visible: bool) {
        if let Some(callback) = self.on_visibility_change.as_mut() {
            callback(visible);
        }
    }
}

/// Surface that only records lifecycle calls in the log. Useful for
/// terminal hosts with no drawing backend attached.
#[derive(Debug, Default)]
pub struct LoggingSurface;

impl DrawingSurface for LoggingSurface {
    fn initialize(&mut self) {
        debug!("drawing surface: initialize");
    }

    fn show(&mut self) {
        debug!("drawing surface: show");
    }

    fn hide(&mut self) {
        debug!("drawing surface: hide");
    }

    fn clear(&mut self) {
        debug!("drawing surface: clear");
    }
}
