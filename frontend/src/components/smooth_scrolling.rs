use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, WheelEvent, Window};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::anim::{expo_out, lerp};
use crate::config::DESKTOP_MIN_WIDTH;
use crate::error::DomError;
use crate::utils::dom;
use crate::utils::frame::FrameLoop;

pub const SMOOTH_DURATION_MS: f64 = 1200.0;

/// Eased scroll position chasing a wheel-driven target.
///
/// Each wheel delta moves the target and restarts the tween from wherever
/// the page currently is, so fast successive flicks never jump. The start
/// time is taken from the first frame after a retarget.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    from: f64,
    target: f64,
    position: f64,
    started_at: Option<f64>,
    active: bool,
    duration_ms: f64,
}

impl SmoothScroll {
    pub fn new(position: f64) -> Self {
        Self {
            from: position,
            target: position,
            position,
            started_at: None,
            active: false,
            duration_ms: SMOOTH_DURATION_MS,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        self.target = (self.target + delta).clamp(0.0, max.max(0.0));
        self.from = self.position;
        self.started_at = None;
        self.active = true;
    }

    /// Position to scroll to at `now`, or `None` when idle.
    pub fn sample(&mut self, now: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let started_at = *self.started_at.get_or_insert(now);
        let t = (now - started_at) / self.duration_ms;
        if t >= 1.0 {
            self.position = self.target;
            self.active = false;
        } else {
            self.position = lerp(self.from, self.target, expo_out(t));
        }
        Some(self.position)
    }

    /// Adopts a scroll position set by something else (scrollbar drag,
    /// keyboard, anchor link). Ignored mid-tween.
    pub fn sync(&mut self, position: f64) {
        if !self.active {
            self.from = position;
            self.target = position;
            self.position = position;
        }
    }
}

struct WheelSmoother {
    window: Window,
    on_wheel: Closure<dyn FnMut(WheelEvent)>,
    _frames: FrameLoop,
}

/// Ctrl+wheel and trackpad pinches arrive with `ctrlKey` set and belong
/// to the browser's zoom.
pub fn takes_over_wheel(ctrl_key: bool) -> bool {
    !ctrl_key
}

impl WheelSmoother {
    fn mount() -> Result<Self, DomError> {
        let window = dom::window()?;
        let state = Rc::new(RefCell::new(SmoothScroll::new(window.scroll_y()?)));

        let on_wheel = {
            let state = state.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |event: WheelEvent| {
                if !takes_over_wheel(event.ctrl_key()) {
                    return;
                }
                event.prevent_default();
                let max = match (dom::document_height(), dom::viewport_height(&window)) {
                    (Ok(doc), Ok(view)) => doc - view,
                    (Err(err), _) | (_, Err(err)) => {
                        warn!("Cannot measure page for smooth scroll: {}", err);
                        return;
                    }
                };
                state.borrow_mut().scroll_by(event.delta_y(), max);
            }) as Box<dyn FnMut(WheelEvent)>)
        };

        let mut options = AddEventListenerOptions::new();
        options.passive(false);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            on_wheel.as_ref().unchecked_ref(),
            &options,
        )?;

        let frames = {
            let window = window.clone();
            FrameLoop::start(move |now| {
                let mut state = state.borrow_mut();
                match state.sample(now) {
                    Some(y) => window.scroll_to_with_x_and_y(0.0, y),
                    None => state.sync(window.scroll_y().unwrap_or_default()),
                }
            })
        };
        let frames = match frames {
            Ok(frames) => frames,
            Err(err) => {
                let _ = window
                    .remove_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref());
                return Err(err);
            }
        };

        Ok(Self {
            window,
            on_wheel,
            _frames: frames,
        })
    }
}

impl Drop for WheelSmoother {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.on_wheel.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollingProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps the page and smooths wheel scrolling on desktop viewports.
/// Touch devices keep native scrolling.
#[function_component(SmoothScrolling)]
pub fn smooth_scrolling(props: &SmoothScrollingProps) -> Html {
    let (width, _) = use_window_size();
    let desktop = width >= DESKTOP_MIN_WIDTH;

    use_effect_with_deps(
        move |desktop: &bool| {
            let smoother = if *desktop {
                match WheelSmoother::mount() {
                    Ok(smoother) => {
                        debug!("Smooth scrolling enabled");
                        Some(smoother)
                    }
                    Err(err) => {
                        warn!("Smooth scrolling unavailable: {}", err);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(smoother)
        },
        desktop,
    );

    html! {
        <>{ for props.children.iter() }</>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_wheel() {
        let mut scroll = SmoothScroll::new(120.0);
        assert_eq!(scroll.sample(0.0), None);
        assert!(!scroll.is_active());
    }

    #[test]
    fn eases_to_target_over_duration() {
        let mut scroll = SmoothScroll::new(0.0);
        scroll.scroll_by(400.0, 10_000.0);

        assert_eq!(scroll.sample(1000.0), Some(0.0 + 400.0 * expo_out(0.0)));
        let mid = scroll.sample(1000.0 + SMOOTH_DURATION_MS / 2.0).unwrap();
        assert!(mid > 300.0 && mid < 400.0);
        assert_eq!(scroll.sample(1000.0 + SMOOTH_DURATION_MS), Some(400.0));
        assert_eq!(scroll.sample(5000.0), None);
    }

    #[test]
    fn zoom_gesture_is_left_to_browser() {
        assert!(!takes_over_wheel(true));
        assert!(takes_over_wheel(false));
    }

    #[test]
    fn target_is_clamped_to_page() {
        let mut scroll = SmoothScroll::new(50.0);
        scroll.scroll_by(-500.0, 2000.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.scroll_by(5000.0, 2000.0);
        assert_eq!(scroll.target(), 2000.0);
    }

    #[test]
    fn retarget_restarts_from_current_position() {
        let mut scroll = SmoothScroll::new(0.0);
        scroll.scroll_by(1000.0, 10_000.0);
        scroll.sample(0.0);
        let reached = scroll.sample(300.0).unwrap();

        scroll.scroll_by(1000.0, 10_000.0);
        assert_eq!(scroll.target(), 2000.0);
        // First frame after retarget starts where the old tween left off.
        let resumed = scroll.sample(320.0).unwrap();
        assert!((resumed - reached).abs() < 5.0);
        assert_eq!(scroll.sample(320.0 + SMOOTH_DURATION_MS), Some(2000.0));
    }

    #[test]
    fn sync_follows_native_scroll_when_idle() {
        let mut scroll = SmoothScroll::new(0.0);
        scroll.sync(640.0);
        scroll.scroll_by(100.0, 10_000.0);
        assert_eq!(scroll.target(), 740.0);

        scroll.sample(0.0);
        scroll.sync(0.0);
        assert_eq!(scroll.target(), 740.0);
    }
}
