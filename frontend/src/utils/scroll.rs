use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::DomError;
use crate::utils::dom;
use crate::utils::frame::FrameScheduler;

/// Window scroll and resize listeners feeding a coalesced frame callback.
/// Dropping the driver removes both listeners and cancels any pending frame.
pub struct ScrollDriver {
    window: Window,
    frame: Rc<FrameScheduler>,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl ScrollDriver {
    /// `on_resize` decides what a resize means for the effect; it gets the
    /// frame scheduler so it can request a redraw when it is ready.
    pub fn mount<F, R>(on_frame: F, mut on_resize: R) -> Result<Self, DomError>
    where
        F: FnMut(f64) + 'static,
        R: FnMut(&Rc<FrameScheduler>) + 'static,
    {
        let window = dom::window()?;
        let frame = Rc::new(FrameScheduler::new(on_frame)?);

        let on_scroll = {
            let frame = frame.clone();
            Closure::wrap(Box::new(move || frame.request_logged()) as Box<dyn FnMut()>)
        };
        let on_resize = {
            let frame = frame.clone();
            Closure::wrap(Box::new(move || on_resize(&frame)) as Box<dyn FnMut()>)
        };

        let driver = Self {
            window,
            frame,
            on_scroll,
            on_resize,
        };
        // Registered after construction so a failure here unregisters on drop.
        driver
            .window
            .add_event_listener_with_callback("scroll", driver.on_scroll.as_ref().unchecked_ref())?;
        driver
            .window
            .add_event_listener_with_callback("resize", driver.on_resize.as_ref().unchecked_ref())?;

        // Initial paint before the first scroll event.
        driver.frame.request()?;
        Ok(driver)
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        self.frame.cancel();
    }
}
