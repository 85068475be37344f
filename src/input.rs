use crate::config::{DRAG_SENSITIVITY, YAW_TARGET_MAX, YAW_TARGET_MIN};

/// Pointer-drag state shared between the event closures and the frame loop.
///
/// Two states: idle and dragging. Mutated only by the pointer handlers, read
/// once per tick; both run on the same cooperative timeline.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub dragging: bool,
    pub start_x: f32,
    /// Desired yaw in radians; the frame loop smooths toward this.
    pub target: f32,
}

impl DragState {
    pub fn new(initial_yaw: f32) -> Self {
        Self {
            dragging: false,
            start_x: 0.0,
            target: initial_yaw,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.dragging = true;
        self.start_x = x;
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Recompute the yaw target from horizontal drag distance.
    ///
    /// No-op while idle or until a model is loaded; interaction is inert
    /// before the asset is ready.
    pub fn update(&mut self, base_yaw: f32, x: f32, model_loaded: bool) {
        if !self.dragging || !model_loaded {
            return;
        }
        let delta = (x - self.start_x) * DRAG_SENSITIVITY;
        self.target = (base_yaw + delta).clamp(YAW_TARGET_MIN, YAW_TARGET_MAX);
    }
}
