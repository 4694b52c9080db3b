#![cfg(target_arch = "wasm32")]
use constants::{CANVAS_ID, POPUP_ID};
use globe_core::{build_globe, GlobeConfig, HeatmapSampler, HeatmapState, OrbitControls};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod heatmap;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let popup: Option<web::HtmlElement> = dom::element_by_id(&document, POPUP_ID)
        .map_err(|e| log::warn!("popup disabled: {}", e))
        .ok();

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = GlobeConfig::default();

    // Sampling waits for the image; a failed load leaves every point empty
    let mut sampler = HeatmapSampler::new(config.heatmap.clone());
    let loaded = heatmap::load(sampler.config()).await;
    if sampler.finish_load(loaded) == HeatmapState::Failed {
        log::warn!("heatmap unavailable, globe will have no markers");
    }

    let mut rng = StdRng::from_entropy();
    let scene = build_globe(&config, &sampler, &mut rng);

    let gpu = frame::init_gpu(&canvas, &config, &scene).await;

    let controls = Rc::new(RefCell::new(OrbitControls::new(
        config.camera.position,
        config.camera.target,
        config.orbit.clone(),
    )));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controls: controls.clone(),
        drag: Rc::new(RefCell::new(input::PointerDrag::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        config,
        scene,
        controls,
        canvas,
        popup,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
