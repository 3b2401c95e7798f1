use crate::dom::{js_err, window_document};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trigger a browser download of the canvas contents as a PNG.
pub fn download_canvas_png(canvas: &web::HtmlCanvasElement, file_name: &str) -> anyhow::Result<()> {
    let data_url = canvas.to_data_url_with_type("image/png").map_err(js_err)?;
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_href(&data_url);
    link.set_download(file_name);
    body.append_child(&link).map_err(js_err)?;
    link.click();
    body.remove_child(&link).map_err(js_err)?;
    Ok(())
}
