use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Link;
use crate::utils::dom;

/// Scroll offset after which the navbar gets its frosted background.
pub const SCROLLED_THRESHOLD: f64 = 150.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub links: Vec<Link>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavProps) -> Html {
    let NavProps { brand, links } = props;
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = dom::window().ok();
                let scroll_callback = window.as_ref().map(|window| {
                    let window_clone = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let scroll_y = window_clone.scroll_y().unwrap_or_default();
                        scrolled.set(is_scrolled(scroll_y));
                    }) as Box<dyn FnMut()>);
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Navbar scroll listener failed: {:?}", err);
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let frosted = (*scrolled).then_some("frosted");

    html! {
        <>
            <nav class={classes!("top-nav", (*scrolled).then_some("scrolled"))}>
                <div class="nav-segments">
                    <a href="/" class={classes!("nav-segment", "nav-logo", frosted)}>
                        {brand}
                    </a>

                    <div class={classes!("nav-segment", "nav-links", frosted)}>
                        { for links.iter().map(|link| html! {
                            <a href={link.href.clone()} class="nav-link">{&link.name}</a>
                        }) }
                    </div>

                    <div class="nav-actions">
                        <button class={classes!("nav-segment", "nav-cta", frosted)}>
                            <span>{"Book a call"}</span>
                            <span class="nav-arrow">{"→"}</span>
                        </button>
                        <button class={classes!("nav-segment", "burger-menu", frosted)} onclick={open_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="mobile-menu-header">
                        <span class="nav-logo">{brand}</span>
                        <button class="mobile-menu-close" onclick={close_menu.clone()}>{"✕"}</button>
                    </div>
                    <div class="mobile-menu-links">
                        { for links.iter().enumerate().map(|(i, link)| html! {
                            <a
                                href={link.href.clone()}
                                class="mobile-menu-link"
                                style={format!("animation-delay: {:.1}s", 0.1 + i as f64 * 0.1)}
                                onclick={close_menu.clone()}
                            >
                                {&link.name}
                            </a>
                        }) }
                    </div>
                    <div class="mobile-menu-footer">
                        <a href="#">{"Facebook"}</a>
                        <a href="#">{"LinkedIn"}</a>
                        <a href="#">{"Instagram"}</a>
                    </div>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 24px;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    padding: 0 16px;
                    pointer-events: none;
                }
                .nav-segments {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    pointer-events: auto;
                    transition: gap 0.3s linear;
                }
                .top-nav.scrolled .nav-segments {
                    gap: 8px;
                }
                .nav-segment {
                    height: 48px;
                    display: flex;
                    align-items: center;
                    padding: 0 20px;
                    border-radius: 5px;
                    border: 1px solid transparent;
                    background: transparent;
                    color: #ffffff;
                    font-size: 14px;
                    font-weight: 500;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .nav-segment.frosted {
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(24px);
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .nav-links {
                    padding: 0 4px;
                    gap: 4px;
                }
                .nav-link {
                    padding: 8px 20px;
                    font-size: 13px;
                    color: #ffffff;
                    text-decoration: none;
                    border-radius: 8px;
                    transition: background 0.3s ease;
                }
                .nav-link:hover {
                    background: rgba(0, 0, 0, 0.3);
                }
                .nav-actions {
                    display: flex;
                    gap: 8px;
                }
                .nav-cta {
                    gap: 8px;
                    cursor: pointer;
                    white-space: nowrap;
                }
                .nav-cta:hover .nav-arrow {
                    transform: translateX(4px);
                }
                .nav-arrow {
                    transition: transform 0.3s ease;
                }
                .burger-menu {
                    display: none;
                    width: 48px;
                    padding: 0;
                    flex-direction: column;
                    justify-content: center;
                    gap: 5px;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    margin: 0 auto;
                    background: #ffffff;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    background: #050a18;
                    display: flex;
                    flex-direction: column;
                    padding: 24px 16px;
                    animation: fadeIn 0.3s ease forwards;
                }
                .mobile-menu-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 48px;
                    padding-left: 20px;
                    color: #ffffff;
                }
                .mobile-menu-close {
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 5px;
                    background: transparent;
                    color: #ffffff;
                    font-size: 20px;
                    cursor: pointer;
                }
                .mobile-menu-links {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .mobile-menu-link {
                    padding: 24px 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    color: #ffffff;
                    font-size: 30px;
                    font-weight: 300;
                    text-decoration: none;
                    opacity: 0;
                    animation: slideUp 0.5s cubic-bezier(0.33, 1, 0.68, 1) forwards;
                }
                .mobile-menu-link:hover {
                    color: #3b82f6;
                }
                .mobile-menu-footer {
                    display: flex;
                    justify-content: space-between;
                    padding-top: 16px;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-family: monospace;
                    font-size: 12px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .mobile-menu-footer a {
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: none;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes slideUp {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 767px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frosts_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(150.0));
        assert!(is_scrolled(150.5));
    }
}
