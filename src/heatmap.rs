use crate::constants::IMAGE_CROSS_ORIGIN;
use crate::dom;
use globe_core::{GlobeError, HeatmapConfig, RasterImage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> GlobeError {
    GlobeError::ImageLoad(format!("{:?}", e))
}

/// Fetch `config.source` and rasterize it onto an off-screen canvas of the
/// configured size, anchored at the top-left corner.
pub async fn load(config: &HeatmapConfig) -> Result<RasterImage, GlobeError> {
    let document =
        dom::window_document().ok_or_else(|| GlobeError::ImageLoad("no document".into()))?;

    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_cross_origin(Some(IMAGE_CROSS_ORIGIN));
    let img_events = img.clone();
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        img_events.set_onload(Some(&resolve));
        img_events.set_onerror(Some(&reject));
    });
    img.set_src(&config.source);
    JsFuture::from(loaded)
        .await
        .map_err(|_| GlobeError::ImageLoad(format!("failed to load {}", config.source)))?;
    img.set_onload(None);
    img.set_onerror(None);
    if img.natural_width() == 0 || img.natural_height() == 0 {
        return Err(GlobeError::EmptyImage);
    }
    log::info!(
        "[heatmap] fetched {} ({}x{})",
        config.source,
        img.natural_width(),
        img.natural_height()
    );

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| js_err(e.into()))?;
    canvas.set_width(config.canvas_width);
    canvas.set_height(config.canvas_height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| GlobeError::ImageLoad("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|e| js_err(e.into()))?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .map_err(js_err)?;
    let data = ctx
        .get_image_data(
            0.0,
            0.0,
            config.canvas_width as f64,
            config.canvas_height as f64,
        )
        .map_err(js_err)?;
    RasterImage::new(config.canvas_width, config.canvas_height, data.data().0)
}
