use web_sys as web;

/// Tracks a single pointer drag across down/move/up events.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerDrag {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl PointerDrag {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the previous call, or `None` when not dragging with
    /// this pointer.
    pub fn delta(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let d = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(d)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

#[inline]
pub fn pointer_client_xy(ev: &web::PointerEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

/// CSS height of the canvas, which scales drag-to-rotate.
#[inline]
pub fn canvas_client_height(canvas: &web::HtmlCanvasElement) -> f32 {
    let h = canvas.client_height() as f32;
    if h > 0.0 {
        h
    } else {
        canvas.height().max(1) as f32
    }
}
