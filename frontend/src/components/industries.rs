use std::rc::Rc;

use log::warn;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::anim::{power1_out, power2_out, ramp};
use crate::config;
use crate::content::CaseStudy;
use crate::error::DomError;
use crate::timeline::advance::pinned_progress;
use crate::utils::dom;
use crate::utils::frame::FrameScheduler;
use crate::utils::scroll::ScrollDriver;

/// Scroll distance the section stays pinned for.
pub const PIN_DISTANCE: f64 = 1500.0;

// Tween positions on a timeline of length 5.
const TIMELINE_LENGTH: f64 = 5.0;
const HEADER_END: f64 = 0.2 / TIMELINE_LENGTH;
const LIFT_END: f64 = 0.8 / TIMELINE_LENGTH;

const HEADER_RISE_PX: f64 = 100.0;
const TRACK_LIFT_VH: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackFrame {
    pub header_opacity: f64,
    pub header_y_px: f64,
    pub track_y_vh: f64,
    pub track_x_px: f64,
}

/// Horizontal distance the track has to travel so its last card ends flush
/// with the viewport.
pub fn scroll_distance(track_width: f64, viewport_width: f64) -> f64 {
    (track_width - viewport_width).max(0.0)
}

pub fn track_frame(progress: f64, scroll_distance: f64) -> TrackFrame {
    let progress = progress.clamp(0.0, 1.0);
    let header = power1_out(ramp(progress, 0.0, HEADER_END));
    let lift = power2_out(ramp(progress, 0.0, LIFT_END));
    TrackFrame {
        header_opacity: 1.0 - header,
        header_y_px: -HEADER_RISE_PX * header,
        track_y_vh: -TRACK_LIFT_VH * lift,
        track_x_px: -scroll_distance * progress,
    }
}

struct IndustriesRefs {
    section: NodeRef,
    header: NodeRef,
    track: NodeRef,
}

fn render_frame(refs: &IndustriesRefs) -> Result<(), DomError> {
    let window = dom::window()?;
    let section = refs.section.cast::<Element>().ok_or(DomError::Missing("industries section"))?;
    let header = refs.header.cast::<HtmlElement>().ok_or(DomError::Missing("industries header"))?;
    let track = refs.track.cast::<HtmlElement>().ok_or(DomError::Missing("industries track"))?;

    // Re-measured every frame so a resize picks up the new track width.
    let distance = scroll_distance(track.scroll_width() as f64, dom::viewport_width(&window)?);
    let progress = pinned_progress(-section.get_bounding_client_rect().top(), PIN_DISTANCE);
    let frame = track_frame(progress, distance);

    let header_style = header.style();
    header_style.set_property("opacity", &format!("{:.3}", frame.header_opacity))?;
    header_style.set_property("transform", &format!("translateY({:.2}px)", frame.header_y_px))?;
    track.style().set_property(
        "transform",
        &format!("translate({:.2}px, {:.3}vh)", frame.track_x_px, frame.track_y_vh),
    )?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct IndustriesProps {
    pub cases: Vec<CaseStudy>,
}

#[function_component(Industries)]
pub fn industries(props: &IndustriesProps) -> Html {
    let section = use_node_ref();
    let header = use_node_ref();
    let track = use_node_ref();

    {
        let refs = Rc::new(IndustriesRefs {
            section: section.clone(),
            header: header.clone(),
            track: track.clone(),
        });
        use_effect_with_deps(
            move |_| {
                let on_frame = {
                    let refs = refs.clone();
                    move |_timestamp: f64| {
                        if let Err(err) = render_frame(&refs) {
                            warn!("Industries frame failed: {}", err);
                        }
                    }
                };
                let on_resize = |frame: &Rc<FrameScheduler>| frame.request_logged();
                let driver = match ScrollDriver::mount(on_frame, on_resize) {
                    Ok(driver) => Some(driver),
                    Err(err) => {
                        warn!("Industries scroll effect unavailable: {}", err);
                        None
                    }
                };
                move || drop(driver)
            },
            (),
        );
    }

    html! {
        <section
            id="industries"
            class="industries"
            ref={section}
            style={format!("height: calc(100vh + {}px);", PIN_DISTANCE)}
        >
            <div class="industries-stage">
                <div class="industries-header" ref={header}>
                    <span class="section-tag">{"Industries"}</span>
                    <h2>{"Where we have"}<br/>{"moved the needle"}</h2>
                </div>
                <div class="industries-track" ref={track}>
                    { for props.cases.iter().map(|case| html! {
                        <article class="industry-card">
                            <img src={case.image.clone()} alt={case.client.clone()} loading="lazy" />
                            <div class="industry-meta">
                                <span>{&case.category}</span>
                                <span>{&case.year}</span>
                            </div>
                            <h3>{&case.client}</h3>
                            <p>{&case.description}</p>
                            <span class="industry-result">{&case.result}</span>
                        </article>
                    }) }
                    <article class="industry-card industry-card-end">
                        <img src={config::asset("bgcards/1.jpg")} alt="" loading="lazy" />
                        <h3>{"Your industry next"}</h3>
                    </article>
                </div>
            </div>
            <style>
                {r#"
                .industries {
                    position: relative;
                    background: #050a18;
                    color: #ffffff;
                }
                .industries-stage {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .industries-header {
                    padding: 0 16px 48px;
                    will-change: transform, opacity;
                }
                .industries-header h2 {
                    margin: 16px 0 0;
                    font-size: 40px;
                    font-weight: 300;
                    line-height: 1.1;
                }
                .industries-track {
                    display: flex;
                    gap: 24px;
                    width: max-content;
                    padding: 0 16px;
                    will-change: transform;
                }
                .industry-card {
                    width: 80vw;
                    flex-shrink: 0;
                    padding: 16px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                }
                .industry-card img {
                    width: 100%;
                    height: 240px;
                    object-fit: cover;
                    border-radius: 4px;
                }
                .industry-meta {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 16px;
                    font-family: monospace;
                    font-size: 12px;
                    color: rgba(255, 255, 255, 0.5);
                    text-transform: uppercase;
                }
                .industry-card h3 {
                    margin: 12px 0 8px;
                    font-size: 24px;
                    font-weight: 400;
                }
                .industry-card p {
                    margin: 0 0 16px;
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.5;
                }
                .industry-result {
                    color: #3b82f6;
                    font-family: monospace;
                    font-size: 13px;
                }
                .industry-card-end {
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                }
                @media (min-width: 768px) {
                    .industries-header {
                        padding: 0 48px 64px;
                    }
                    .industries-track {
                        padding: 0 48px;
                    }
                    .industry-card {
                        width: 420px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        assert_eq!(
            track_frame(0.0, 2000.0),
            TrackFrame {
                header_opacity: 1.0,
                header_y_px: 0.0,
                track_y_vh: 0.0,
                track_x_px: 0.0,
            }
        );
    }

    #[test]
    fn header_is_gone_early() {
        let frame = track_frame(HEADER_END, 2000.0);
        assert_eq!(frame.header_opacity, 0.0);
        assert_eq!(frame.header_y_px, -100.0);

        let half = track_frame(HEADER_END / 2.0, 2000.0);
        // Eased out: more than half done at half time.
        assert!(half.header_opacity < 0.5);
    }

    #[test]
    fn track_lifts_then_holds() {
        assert_eq!(track_frame(LIFT_END, 2000.0).track_y_vh, -15.0);
        assert_eq!(track_frame(0.9, 2000.0).track_y_vh, -15.0);
    }

    #[test]
    fn horizontal_travel_is_linear() {
        assert_eq!(track_frame(0.5, 2000.0).track_x_px, -1000.0);
        assert_eq!(track_frame(1.0, 2000.0).track_x_px, -2000.0);
        assert_eq!(track_frame(1.7, 2000.0).track_x_px, -2000.0);
    }

    #[test]
    fn narrow_track_does_not_move_sideways() {
        assert_eq!(scroll_distance(900.0, 1280.0), 0.0);
        assert_eq!(scroll_distance(3000.0, 1280.0), 1720.0);
    }
}
