use crate::frame::SharedSession;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Space toggles playback once the audio is ready; ignored before that.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &SharedSession) {
    if ev.repeat() || !input::is_toggle_key(&ev.key()) {
        return;
    }
    let mut slot = session.borrow_mut();
    let Some(s) = slot.as_mut() else {
        return;
    };
    if !s.is_interactive() {
        return;
    }
    ev.prevent_default();
    if let Some(state) = s.toggle() {
        log::info!("[keys] playback {:?}", state);
    }
}

pub fn wire_keydown(window: &web::Window, session: &SharedSession) {
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &session);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
