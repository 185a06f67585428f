use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::DomError;
use crate::utils::dom;

/// Runs a callback on the next animation frame. Requests made while a
/// frame is already pending are folded into it, so a burst of scroll
/// events produces a single update per frame.
pub struct FrameScheduler {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler {
    pub fn new(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
        let window = dom::window()?;
        let pending = Rc::new(Cell::new(None));
        let callback = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                on_frame(timestamp);
            }) as Box<dyn FnMut(f64)>)
        };
        Ok(Self { window, pending, callback })
    }

    pub fn request(&self) -> Result<(), DomError> {
        if self.pending.get().is_some() {
            return Ok(());
        }
        let id = self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }

    /// Like `request`, but failures are logged instead of returned. Meant for
    /// event handlers that have nowhere to send an error.
    pub fn request_logged(&self) {
        if let Err(err) = self.request() {
            warn!("Failed to schedule animation frame: {}", err);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `on_frame` every display frame until dropped.
pub struct FrameLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
        let window = dom::window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next = {
            let window = window.clone();
            let handle = handle.clone();
            let callback = callback.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                handle.set(None);
                on_frame(timestamp);
                if let Some(again) = callback.borrow().as_ref() {
                    match window.request_animation_frame(again.as_ref().unchecked_ref()) {
                        Ok(id) => handle.set(Some(id)),
                        Err(err) => warn!("Frame loop stopped: {}", DomError::from(err)),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window.request_animation_frame(next.as_ref().unchecked_ref())?;
        handle.set(Some(id));
        *callback.borrow_mut() = Some(next);

        Ok(Self { window, handle, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds a reference to its own slot; clearing it breaks the cycle.
        self.callback.borrow_mut().take();
    }
}
