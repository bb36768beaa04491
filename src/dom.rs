use crate::constants::{
    PLAY_BUTTON_ID, PLAY_BUTTON_STYLE, STATUS_ID, STATUS_STYLE, STATUS_UNAVAILABLE,
};
use crate::input;
use icopulse_core::{ButtonLabel, PLAY_LABEL};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing store to its CSS box times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = input::backing_size(rect.width(), rect.height(), dpr);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow::anyhow!("no body"))
}

/// The play/pause toggle, created only once audio is ready.
pub fn create_play_button(document: &web::Document) -> anyhow::Result<web::HtmlButtonElement> {
    let button: web::HtmlButtonElement = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_id(PLAY_BUTTON_ID);
    button.set_type("button");
    _ = button.set_attribute("style", PLAY_BUTTON_STYLE);
    button.set_text_content(Some(PLAY_LABEL));
    body(document)?
        .append_child(&button)
        .map_err(|e| anyhow::anyhow!("append button: {:?}", e))?;
    Ok(button)
}

/// Passive notice shown in place of the button when the asset cannot load.
pub fn show_unavailable(document: &web::Document) -> anyhow::Result<()> {
    let status = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create status: {:?}", e))?;
    status.set_id(STATUS_ID);
    _ = status.set_attribute("style", STATUS_STYLE);
    _ = status.set_attribute("role", "status");
    status.set_text_content(Some(STATUS_UNAVAILABLE));
    body(document)?
        .append_child(&status)
        .map_err(|e| anyhow::anyhow!("append status: {:?}", e))?;
    Ok(())
}

/// Button text owned by the playback controller.
pub struct DomButtonLabel {
    button: web::HtmlButtonElement,
}

impl DomButtonLabel {
    pub fn new(button: web::HtmlButtonElement) -> Self {
        Self { button }
    }
}

impl ButtonLabel for DomButtonLabel {
    fn set_label(&mut self, text: &str) {
        self.button.set_text_content(Some(text));
    }
}
