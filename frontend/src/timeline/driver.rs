use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::Element;
use yew::{Callback, NodeRef};

use crate::config::RESIZE_DEBOUNCE_MS;
use crate::error::DomError;
use crate::timeline::advance::pinned_progress;
use crate::timeline::card::CardKind;
use crate::timeline::render::apply_states;
use crate::timeline::session::TimelineSession;
use crate::utils::dom;
use crate::utils::frame::FrameScheduler;
use crate::utils::scroll::ScrollDriver;

/// Browser glue for a mounted timeline: reads the pinned region's scroll
/// offset once per frame, advances the session and writes card styles.
/// Resizes are debounced and only the last one rebuilds the layout.
pub struct TimelineDriver {
    _scroll: ScrollDriver,
    pending_rebuild: Rc<RefCell<Option<Timeout>>>,
}

impl TimelineDriver {
    pub fn mount(
        kinds: Vec<CardKind>,
        region: NodeRef,
        cards: Rc<Vec<NodeRef>>,
        on_pin_change: Callback<f64>,
    ) -> Result<Self, DomError> {
        let window = dom::window()?;
        let session = TimelineSession::new(dom::viewport_width(&window)?, kinds);
        info!(
            "Mounting timeline with {} cards for {:?}",
            session.cards().len(),
            session.breakpoint()
        );
        on_pin_change.emit(session.pin_distance());
        let session = Rc::new(RefCell::new(session));

        let on_frame = {
            let session = session.clone();
            move |_timestamp: f64| {
                if let Err(err) = render_frame(&region, &cards, &session) {
                    warn!("Timeline frame failed: {}", err);
                }
            }
        };

        let pending_rebuild: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let on_resize = {
            let pending_rebuild = pending_rebuild.clone();
            move |frame: &Rc<FrameScheduler>| {
                let ticket = session.borrow_mut().begin_rebuild();
                let session = session.clone();
                let frame = Rc::clone(frame);
                let window = window.clone();
                let on_pin_change = on_pin_change.clone();
                let rebuild = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    let width = match dom::viewport_width(&window) {
                        Ok(width) => width,
                        Err(err) => {
                            warn!("Cannot read viewport width: {}", err);
                            return;
                        }
                    };
                    let rebuilt = session.borrow_mut().apply_rebuild(ticket, width);
                    if rebuilt {
                        let pin_distance = session.borrow().pin_distance();
                        on_pin_change.emit(pin_distance);
                    }
                    frame.request_logged();
                });
                // Replacing the timeout drops, and so cancels, the previous one.
                pending_rebuild.borrow_mut().replace(rebuild);
            }
        };

        let scroll = ScrollDriver::mount(on_frame, on_resize)?;
        Ok(Self {
            _scroll: scroll,
            pending_rebuild,
        })
    }
}

impl Drop for TimelineDriver {
    fn drop(&mut self) {
        self.pending_rebuild.borrow_mut().take();
    }
}

fn render_frame(
    region: &NodeRef,
    cards: &[NodeRef],
    session: &RefCell<TimelineSession>,
) -> Result<(), DomError> {
    let region = region.cast::<Element>().ok_or(DomError::Missing("timeline region"))?;
    let scrolled_into = -region.get_bounding_client_rect().top();

    let mut session = session.borrow_mut();
    let progress = pinned_progress(scrolled_into, session.pin_distance());
    let states = session.tick(progress);
    apply_states(&states, cards)
}
