use glam::Vec2;
use rack_core::OrbitCamera;
use web_sys as web;

/// Mutable view state shared between event closures and the frame loop.
pub struct ViewState {
    pub orbit: OrbitCamera,
    pub show_labels: bool,
    /// Last pointer position while a drag is active.
    pub drag_from: Option<Vec2>,
    /// Set by input; cleared once the overlay has been redrawn.
    pub dirty: bool,
    /// Scene and overlay canvas sizes the overlay was last projected for.
    overlay_for: Option<[u32; 4]>,
}

impl ViewState {
    pub fn new(orbit: OrbitCamera) -> Self {
        Self {
            orbit,
            show_labels: true,
            drag_from: None,
            dirty: true,
            overlay_for: None,
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag_from = Some(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if let Some(from) = self.drag_from {
            let d = pos - from;
            self.orbit.orbit(d.x, d.y);
            self.drag_from = Some(pos);
            self.dirty = true;
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.orbit.zoom_by_wheel(delta_y);
        self.dirty = true;
    }

    /// Returns true when the key was handled.
    pub fn key(&mut self, key: &str) -> bool {
        match key {
            "l" | "L" => self.show_labels = !self.show_labels,
            "r" | "R" => self.orbit.reset(),
            _ => return false,
        }
        self.dirty = true;
        true
    }

    /// Whether the label overlay needs re-projecting this frame: the view
    /// changed, or either canvas was resized (the scene canvas sets the
    /// projection aspect). Clears `dirty` when it answers true.
    pub fn take_overlay_redraw(&mut self, scene_px: (u32, u32), overlay_px: (u32, u32)) -> bool {
        let sizes = [scene_px.0, scene_px.1, overlay_px.0, overlay_px.1];
        if !self.dirty && self.overlay_for == Some(sizes) {
            return false;
        }
        self.dirty = false;
        self.overlay_for = Some(sizes);
        true
    }
}

/// Pointer position relative to the canvas in CSS pixels, so orbit speed
/// does not depend on devicePixelRatio.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
