use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::starfield::StarfieldCanvas;
use crate::config;
use crate::content::{CaseStudy, SummaryCard};
use crate::timeline::card::CardKind;
use crate::timeline::driver::TimelineDriver;

/// Card kinds in render order: every case study, then the summary card.
pub fn card_kinds(cases: usize, has_summary: bool) -> Vec<CardKind> {
    let mut kinds = vec![CardKind::Image; cases];
    if has_summary {
        kinds.push(CardKind::Summary);
    }
    kinds
}

/// A timeline without cards takes no space and runs no listeners.
pub fn has_timeline(kinds: &[CardKind]) -> bool {
    !kinds.is_empty()
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub cases: Vec<CaseStudy>,
    #[prop_or_default]
    pub summary: Option<SummaryCard>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let region = use_node_ref();
    let pin_distance = use_state_eq(|| 0.0f64);
    let kinds = card_kinds(props.cases.len(), props.summary.is_some());
    let card_refs = use_memo(
        |count: &usize| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        kinds.len(),
    );

    {
        let region = region.clone();
        let card_refs: Rc<Vec<NodeRef>> = card_refs.clone();
        let pin_distance = pin_distance.clone();
        use_effect_with_deps(
            move |kinds: &Vec<CardKind>| {
                let driver = if has_timeline(kinds) {
                    let on_pin_change = Callback::from(move |pin: f64| pin_distance.set(pin));
                    match TimelineDriver::mount(kinds.clone(), region, card_refs, on_pin_change) {
                        Ok(driver) => Some(driver),
                        Err(err) => {
                            warn!("Projects timeline unavailable: {}", err);
                            None
                        }
                    }
                } else {
                    pin_distance.set(0.0);
                    None
                };
                move || drop(driver)
            },
            kinds.clone(),
        );
    }

    if !has_timeline(&kinds) {
        return html! {};
    }

    let card_ref = |index: usize| card_refs.get(index).cloned().unwrap_or_default();

    html! {
        <section
            id="projects"
            class="projects"
            ref={region}
            style={format!("height: calc(100vh + {}px);", *pin_distance)}
        >
            <div class="projects-stage">
                <div class="projects-backdrop" style={format!("background-image: url('{}');", config::asset("bg2.jpg"))}></div>
                <StarfieldCanvas />
                <div class="projects-title">
                    <h2>{"Selected Projects"}</h2>
                </div>

                { for props.cases.iter().enumerate().map(|(index, case)| html! {
                    <article class="project-card" ref={card_ref(index)}>
                        <div class="project-image" style={format!("background-image: url('{}');", case.image)}></div>
                        <div class="project-overlay"></div>
                        <div class="project-content">
                            <div class="project-tags">
                                <span class="project-category">{&case.category}</span>
                                <span class="project-year">{&case.year}</span>
                            </div>
                            <div class="project-bottom">
                                <h3>{&case.client}</h3>
                                <p>{&case.description}</p>
                                <div class="project-result">
                                    <span>{"Result"}</span>
                                    <strong>{&case.result}</strong>
                                </div>
                            </div>
                        </div>
                    </article>
                }) }

                if let Some(summary) = &props.summary {
                    <article class="project-card project-summary" ref={card_ref(props.cases.len())}>
                        <div class="project-content">
                            <h3>{&summary.title}</h3>
                            <p>{&summary.body}</p>
                            <button class="project-cta">{&summary.cta}</button>
                        </div>
                    </article>
                }
            </div>
            <style>
                {r#"
                .projects {
                    position: relative;
                    background: #050a18;
                    color: #ffffff;
                }
                .projects-stage {
                    position: sticky;
                    top: 0;
                    width: 100%;
                    height: 100vh;
                    overflow: hidden;
                }
                .projects-backdrop {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .starfield {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.6;
                    mix-blend-mode: screen;
                    pointer-events: none;
                }
                .projects-title {
                    position: absolute;
                    top: 40px;
                    width: 100%;
                    z-index: 200000;
                    text-align: center;
                    opacity: 0.3;
                    mix-blend-mode: overlay;
                    pointer-events: none;
                }
                .projects-title h2 {
                    margin: 0;
                    font-family: monospace;
                    font-size: 20px;
                    font-weight: 400;
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                }
                .project-card {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 80vw;
                    height: 55vh;
                    overflow: hidden;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    visibility: hidden;
                    pointer-events: none;
                    will-change: transform, opacity;
                }
                .project-image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000000, rgba(0, 0, 0, 0.4), transparent);
                    opacity: 0.9;
                }
                .project-content {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    padding: 32px;
                }
                .project-tags {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                }
                .project-category {
                    padding: 4px 12px;
                    border-radius: 5px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.3);
                    font-size: 10px;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }
                .project-year {
                    padding: 4px 8px;
                    border-radius: 5px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.6);
                    font-family: monospace;
                    font-size: 12px;
                }
                .project-bottom {
                    margin-top: auto;
                }
                .project-bottom h3 {
                    margin: 0;
                    font-size: 30px;
                    font-weight: 700;
                }
                .project-bottom p {
                    margin: 8px 0 0;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 14px;
                    line-height: 1.6;
                }
                .project-result {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 24px;
                    padding-top: 24px;
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    font-family: monospace;
                    font-size: 12px;
                    text-transform: uppercase;
                }
                .project-result strong {
                    color: #3b82f6;
                    font-size: 16px;
                }
                .project-summary {
                    background: rgba(5, 10, 24, 0.85);
                    backdrop-filter: blur(12px);
                }
                .project-summary .project-content {
                    justify-content: center;
                    align-items: center;
                    gap: 16px;
                    text-align: center;
                }
                .project-summary h3 {
                    margin: 0;
                    font-size: 36px;
                    font-weight: 300;
                }
                .project-summary p {
                    max-width: 420px;
                    margin: 0;
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }
                .project-cta {
                    padding: 14px 28px;
                    border: none;
                    border-radius: 5px;
                    background: #3b82f6;
                    color: #ffffff;
                    font-size: 14px;
                    cursor: pointer;
                }
                @media (min-width: 768px) {
                    .project-card {
                        width: 600px;
                        height: 500px;
                    }
                    .project-content {
                        padding: 40px;
                    }
                    .project-bottom h3 {
                        font-size: 36px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
