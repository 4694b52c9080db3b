/// Page wiring and browser-side input tuning.
///
/// Element ids are fixed by the host page; the rest keep magic numbers out of
/// the DOM glue.
// Element ids
pub const CANVAS_ID: &str = "globe-canvas";
pub const POPUP_ID: &str = "popup-wrapper";

// Heatmap image is fetched with CORS so its pixels stay readable
pub const IMAGE_CROSS_ORIGIN: &str = "anonymous";

// Fallback canvas size (CSS px) before layout has run
pub const FALLBACK_CANVAS_WIDTH: u32 = 1280;
pub const FALLBACK_CANVAS_HEIGHT: u32 = 720;
