use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{info, warn};
use yew::prelude::*;

use crate::anim::CURTAIN_EASE;
use crate::config;
use crate::utils::dom;

/// Total time the counter takes to go from 0 to 100.
pub const COUNT_DURATION_MS: u32 = 2000;
/// Pause at 100 % before the curtain lifts.
pub const HOLD_MS: u32 = 800;
pub const STEP_MS: u32 = COUNT_DURATION_MS / 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Counting,
    Holding,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloaderState {
    pub counter: u8,
    pub phase: Phase,
}

impl Default for PreloaderState {
    fn default() -> Self {
        Self {
            counter: 0,
            phase: Phase::Counting,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum PreloaderAction {
    Tick,
    Finish,
}

impl Reducible for PreloaderState {
    type Action = PreloaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (action, self.phase) {
            (PreloaderAction::Tick, Phase::Counting) => {
                let counter = (self.counter + 1).min(100);
                let phase = if counter == 100 { Phase::Holding } else { Phase::Counting };
                Rc::new(Self { counter, phase })
            }
            (PreloaderAction::Finish, Phase::Holding) => Rc::new(Self {
                counter: self.counter,
                phase: Phase::Done,
            }),
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub brand: String,
    pub tagline: String,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let state = use_reducer(PreloaderState::default);
    let phase = state.phase;

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |phase: &Phase| {
                let mut interval = None;
                let mut timeout = None;
                match phase {
                    Phase::Counting => {
                        if let Err(err) = dom::lock_scroll() {
                            warn!("Could not lock scroll: {}", err);
                        }
                        interval = Some(Interval::new(STEP_MS, move || {
                            dispatcher.dispatch(PreloaderAction::Tick);
                        }));
                    }
                    Phase::Holding => {
                        timeout = Some(Timeout::new(HOLD_MS, move || {
                            dispatcher.dispatch(PreloaderAction::Finish);
                        }));
                    }
                    Phase::Done => {
                        info!("Preloader finished");
                        if let Err(err) = dom::unlock_scroll() {
                            warn!("Could not unlock scroll: {}", err);
                        }
                    }
                }
                move || {
                    drop(interval);
                    drop(timeout);
                }
            },
            phase,
        );
    }

    let complete = state.counter == 100;
    let fade = if complete { "opacity: 0;" } else { "opacity: 1;" };

    html! {
        <>
            <div class={classes!("preloader", (phase == Phase::Done).then_some("lifted"))}>
                <div class="preloader-center">
                    <img src={config::asset("logo.png")} alt={props.brand.clone()} class="preloader-logo" />
                    <div class="preloader-tagline-mask">
                        <p class="preloader-tagline">{&props.tagline}</p>
                    </div>
                </div>

                <div class="preloader-counter" style={fade}>
                    <span class="preloader-count">{state.counter}</span>
                    <span class="preloader-percent">{"%"}</span>
                </div>

                <div class="preloader-track">
                    <div class="preloader-bar" style={format!("width: {}%; {}", state.counter, fade)}></div>
                </div>
            </div>
            <div class={classes!("preloader-layer", (phase == Phase::Done).then_some("lifted"))}></div>

            <style>
                {format!(r#"
                .preloader,
                .preloader-layer {{
                    position: fixed;
                    inset: 0;
                    transform: translateY(0);
                    transition: transform 0.8s {ease};
                }}
                .preloader {{
                    z-index: 9999;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #050a18;
                }}
                .preloader-layer {{
                    z-index: 9998;
                    background: #000000;
                    pointer-events: none;
                }}
                .preloader.lifted {{
                    transform: translateY(-100vh);
                    transition-delay: 0.2s;
                    pointer-events: none;
                }}
                .preloader-layer.lifted {{
                    transform: translateY(-100vh);
                }}
                .preloader-center {{
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    animation: preloaderRise 0.5s ease forwards;
                }}
                .preloader-logo {{
                    width: 96px;
                    object-fit: contain;
                }}
                .preloader-tagline-mask {{
                    overflow: hidden;
                }}
                .preloader-tagline {{
                    margin: 0;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 12px;
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    animation: preloaderReveal 0.5s 0.2s ease both;
                }}
                .preloader-counter {{
                    position: absolute;
                    right: 40px;
                    bottom: 40px;
                    display: flex;
                    align-items: flex-end;
                    gap: 4px;
                    transition: opacity 0.5s ease;
                }}
                .preloader-count {{
                    color: #ffffff;
                    font-size: 60px;
                    font-weight: 300;
                    font-variant-numeric: tabular-nums;
                    line-height: 1;
                }}
                .preloader-percent {{
                    margin-bottom: 4px;
                    color: rgba(255, 255, 255, 0.5);
                    font-family: monospace;
                }}
                .preloader-track {{
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.1);
                }}
                .preloader-bar {{
                    height: 100%;
                    background: #3b82f6;
                    box-shadow: 0 0 20px rgba(59, 130, 246, 0.5);
                    transition: opacity 0.5s ease 0.2s;
                }}
                @keyframes preloaderRise {{
                    from {{ opacity: 0; transform: translateY(20px); }}
                    to {{ opacity: 1; transform: translateY(0); }}
                }}
                @keyframes preloaderReveal {{
                    from {{ transform: translateY(100%); }}
                    to {{ transform: translateY(0); }}
                }}
                @media (min-width: 768px) {{
                    .preloader-logo {{ width: 128px; }}
                    .preloader-counter {{ right: 48px; bottom: 48px; }}
                }}
                "#, ease = CURTAIN_EASE)}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut state: Rc<PreloaderState>, action: PreloaderAction, times: usize) -> Rc<PreloaderState> {
        for _ in 0..times {
            state = state.reduce(action);
        }
        state
    }

    #[test]
    fn counts_to_one_hundred_then_holds() {
        let state = run(Rc::new(PreloaderState::default()), PreloaderAction::Tick, 99);
        assert_eq!(state.counter, 99);
        assert_eq!(state.phase, Phase::Counting);

        let state = state.reduce(PreloaderAction::Tick);
        assert_eq!(state.counter, 100);
        assert_eq!(state.phase, Phase::Holding);

        // Late ticks from the interval are ignored.
        let state = run(state, PreloaderAction::Tick, 5);
        assert_eq!(state.counter, 100);
        assert_eq!(state.phase, Phase::Holding);
    }

    #[test]
    fn finish_only_applies_after_holding() {
        let early = Rc::new(PreloaderState::default()).reduce(PreloaderAction::Finish);
        assert_eq!(early.phase, Phase::Counting);

        let state = run(Rc::new(PreloaderState::default()), PreloaderAction::Tick, 100);
        let state = state.reduce(PreloaderAction::Finish);
        assert_eq!(state.phase, Phase::Done);
    }

    #[test]
    fn step_covers_two_seconds() {
        assert_eq!(STEP_MS * 100, COUNT_DURATION_MS);
    }
}
