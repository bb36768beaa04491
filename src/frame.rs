use icopulse_core::{FrameHandle, FrameScheduler, Session, VizError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSession = Rc<RefCell<Option<Session>>>;
type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the core scheduling trait.
///
/// Every request re-uses one JS callback that forwards into
/// [`Session::on_frame`], so the loop itself decides whether to keep going.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, session: &SharedSession) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let session_tick = session.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Slot is empty only while the session is being swapped.
            if let Ok(mut slot) = session_tick.try_borrow_mut() {
                if let Some(s) = slot.as_mut() {
                    s.on_frame();
                }
            }
        }) as Box<dyn FnMut()>));
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, VizError> {
        let tick = self.tick.borrow();
        let callback = tick
            .as_ref()
            .ok_or_else(|| VizError::Schedule("frame callback missing".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| VizError::Schedule(format!("{:?}", e)))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("[frame] cancel {} failed: {:?}", handle.0, e);
        }
    }
}
