use crate::overlay;
use crate::render;
use globe_core::{
    popup_anchor, popup_viewport, Camera, GlobeConfig, GlobeScene, OrbitControls, SceneUniforms,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub config: GlobeConfig,
    pub scene: GlobeScene,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub canvas: web::HtmlCanvasElement,
    pub popup: Option<web::HtmlElement>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f64() * 1000.0;

        let angle = self.scene.rotation.advance(dt_ms);
        let eye = self.controls.borrow_mut().update();

        let w = self.canvas.width();
        let h = self.canvas.height();
        let aspect = w.max(1) as f32 / h.max(1) as f32;
        let camera = Camera::from_config(&self.config.camera, eye, aspect);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let uniforms = SceneUniforms::new(&self.config, &camera, angle);
            if let Err(e) = g.render(&uniforms) {
                log::error!("render error: {:?}", e);
            }
        }

        self.place_popup(&camera);
    }

    fn place_popup(&self, camera: &Camera) {
        let Some(popup) = &self.popup else {
            return;
        };
        let Some(world) = self.scene.active.and_then(|h| self.scene.world_position(h)) else {
            overlay::hide(popup);
            return;
        };
        // Popup coordinates are CSS pixels of the canvas
        let rect = self.canvas.get_bounding_client_rect();
        let (width, height) = popup_viewport(rect.width(), rect.height());
        let anchor = popup_anchor(world, camera, width, height, &self.config.popup);
        overlay::place_popup(popup, &anchor);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &GlobeConfig,
    scene: &GlobeScene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
