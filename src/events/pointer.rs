use crate::frame::SharedSession;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        (ev.client_x() as f32, ev.client_y() as f32),
        (
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ),
        (canvas.width(), canvas.height()),
    )
}

/// Orbit/pan/zoom input on the canvas. Movement and release are tracked on
/// the window so drags survive leaving the canvas.
pub fn wire_input_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    session: &SharedSession,
) {
    wire_pointerdown(canvas, session);
    wire_pointermove(window, canvas, session);
    wire_pointerup(window, session);
    wire_wheel(canvas, session);
    wire_contextmenu(canvas);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    let canvas_ev = canvas.clone();
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = canvas_px(&ev, &canvas_ev);
        if let Some(s) = session.borrow_mut().as_mut() {
            let view = s.animation_mut().view_control_mut();
            if !view.is_enabled() {
                return;
            }
            view.pointer_down(ev.button(), x, y);
        }
        _ = canvas_ev.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    session: &SharedSession,
) {
    let canvas = canvas.clone();
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = canvas_px(&ev, &canvas);
        if let Some(s) = session.borrow_mut().as_mut() {
            let view = s.animation_mut().view_control_mut();
            if view.is_dragging() {
                view.pointer_move(x, y);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(window: &web::Window, session: &SharedSession) {
    for kind in ["pointerup", "pointercancel"] {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if let Some(s) = session.borrow_mut().as_mut() {
                s.animation_mut().view_control_mut().pointer_up();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if let Some(s) = session.borrow_mut().as_mut() {
            let view = s.animation_mut().view_control_mut();
            if !view.is_enabled() {
                return;
            }
            ev.prevent_default();
            view.wheel(input::wheel_delta_px(ev.delta_y(), ev.delta_mode()));
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Right-drag pans, so the browser menu stays out of the way.
fn wire_contextmenu(canvas: &web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
