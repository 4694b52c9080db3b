use globe_core::PopupAnchor;
use web_sys as web;

/// Pin the popup element to a projected marker.
pub fn place_popup(popup: &web::HtmlElement, anchor: &PopupAnchor) {
    let style = popup.style();
    for (name, value) in anchor.style_properties() {
        _ = style.set_property(name, &value);
    }
}

#[inline]
pub fn hide(popup: &web::HtmlElement) {
    _ = popup.style().set_property("display", "none");
}
