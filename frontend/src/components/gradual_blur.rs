use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::error::DomError;
use crate::utils::dom;

/// Distance from either end of the page within which the overlay hides.
pub const EDGE_MARGIN: f64 = 30.0;

const LAYERS: [(f64, f64, f64); 5] = [
    // (blur px, mask start %, mask end %)
    (1.0, 0.0, 40.0),
    (2.0, 20.0, 60.0),
    (4.0, 40.0, 80.0),
    (8.0, 60.0, 100.0),
    (16.0, 80.0, 100.0),
];

pub fn blur_visible(scroll_top: f64, viewport_height: f64, document_height: f64) -> bool {
    let at_top = scroll_top < EDGE_MARGIN;
    let at_bottom = scroll_top + viewport_height >= document_height - EDGE_MARGIN;
    !at_top && !at_bottom
}

fn measure() -> Result<bool, DomError> {
    let window = dom::window()?;
    let scroll_top = window.scroll_y()?;
    let viewport_height = dom::viewport_height(&window)?;
    Ok(blur_visible(scroll_top, viewport_height, dom::document_height()?))
}

fn refresh(visible: &UseStateHandle<bool>) {
    match measure() {
        Ok(show) => visible.set(show),
        Err(err) => warn!("Blur overlay measurement failed: {}", err),
    }
}

#[function_component(GradualBlur)]
pub fn gradual_blur() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = dom::window().ok();
                let update = {
                    let visible = visible.clone();
                    Closure::wrap(Box::new(move || refresh(&visible)) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        if let Err(err) =
                            window.add_event_listener_with_callback(event, update.as_ref().unchecked_ref())
                        {
                            warn!("Blur overlay {} listener failed: {:?}", event, err);
                        }
                    }
                }
                // A restored or anchored scroll position fires no scroll event.
                refresh(&visible);

                move || {
                    if let Some(window) = window {
                        for event in ["scroll", "resize"] {
                            let _ = window
                                .remove_event_listener_with_callback(event, update.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            (),
        );
    }

    let opacity = if *visible { 1 } else { 0 };

    html! {
        <div class="gradual-blur" style={format!("opacity: {};", opacity)}>
            { for LAYERS.iter().map(|(blur, from, to)| {
                let mask = format!(
                    "linear-gradient(to bottom, transparent {from}%, black {to}%)",
                    from = from,
                    to = to,
                );
                html! {
                    <div
                        class="gradual-blur-layer"
                        style={format!(
                            "backdrop-filter: blur({blur}px); -webkit-backdrop-filter: blur({blur}px); mask-image: {mask}; -webkit-mask-image: {mask};",
                            blur = blur,
                            mask = mask,
                        )}
                    ></div>
                }
            }) }
            <style>
                {r#"
                .gradual-blur {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 96px;
                    z-index: 40;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .gradual-blur-layer {
                    position: absolute;
                    inset: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_near_top() {
        assert!(!blur_visible(0.0, 800.0, 5000.0));
        assert!(!blur_visible(29.0, 800.0, 5000.0));
        assert!(blur_visible(30.0, 800.0, 5000.0));
    }

    #[test]
    fn hidden_near_bottom() {
        assert!(blur_visible(4169.0, 800.0, 5000.0));
        assert!(!blur_visible(4170.0, 800.0, 5000.0));
        assert!(!blur_visible(4200.0, 800.0, 5000.0));
    }

    #[test]
    fn restored_mid_page_position_shows() {
        assert!(blur_visible(2000.0, 800.0, 5000.0));
    }

    #[test]
    fn short_page_never_shows() {
        assert!(!blur_visible(40.0, 800.0, 820.0));
    }
}
