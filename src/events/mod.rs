pub mod keyboard;
pub mod pointer;

use crate::dom;
use crate::frame::SharedSession;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the session viewport in step with the window.
pub fn wire_resize(window: &web::Window, canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    let canvas = canvas.clone();
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        if let Some(s) = session.borrow_mut().as_mut() {
            s.resize(w, h);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
