use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, DESKTOP_MIN_WIDTH};
use crate::content::FeatureCard;

const ACTIVE_FLEX: f64 = 2.0;
const IDLE_FLEX: f64 = 1.0;

/// Column each feature card sits in. The third column stacks the last two.
pub fn column_of(card: usize) -> usize {
    card.min(2)
}

pub fn column_flex(column: usize, active: usize, is_mobile: bool) -> f64 {
    if is_mobile {
        return if column == 2 { ACTIVE_FLEX } else { IDLE_FLEX };
    }
    if column_of(active) == column {
        ACTIVE_FLEX
    } else {
        IDLE_FLEX
    }
}

/// Flex share of a card inside the stacked column.
pub fn stacked_flex(card: usize, active: usize, is_mobile: bool) -> f64 {
    if !is_mobile && card == active {
        ACTIVE_FLEX
    } else {
        IDLE_FLEX
    }
}

pub fn is_expanded(card: usize, active: usize, is_mobile: bool) -> bool {
    is_mobile || card == active
}

#[derive(Properties, PartialEq)]
struct FeatureTileProps {
    index: usize,
    feature: FeatureCard,
    expanded: bool,
    flex: f64,
    on_hover: Callback<usize>,
}

#[function_component(FeatureTile)]
fn feature_tile(props: &FeatureTileProps) -> Html {
    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_hover.emit(index))
    };
    let feature = &props.feature;

    html! {
        <div
            class={classes!("feature-tile", props.expanded.then_some("expanded"))}
            style={format!("flex: {};", props.flex)}
            {onmouseenter}
        >
            <img class="feature-bg" src={config::asset(&feature.image)} alt="" />
            <div class="feature-shade"></div>
            <div class="feature-body">
                <div class="feature-head">
                    <span class="feature-icon">{&feature.icon}</span>
                    <span class="feature-id">{&feature.id}</span>
                </div>
                <h3>{&feature.title}</h3>
                <p class="feature-description">{&feature.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OrchestrationProps {
    pub features: Vec<FeatureCard>,
}

#[function_component(Orchestration)]
pub fn orchestration(props: &OrchestrationProps) -> Html {
    let active = use_state_eq(|| 0usize);
    let (width, _) = use_window_size();
    let is_mobile = width < DESKTOP_MIN_WIDTH;

    let on_hover = {
        let active = active.clone();
        Callback::from(move |index: usize| active.set(index))
    };

    let tile = |index: usize, flex: f64| -> Html {
        match props.features.get(index) {
            Some(feature) => html! {
                <FeatureTile
                    index={index}
                    feature={feature.clone()}
                    expanded={is_expanded(index, *active, is_mobile)}
                    flex={flex}
                    on_hover={on_hover.clone()}
                />
            },
            None => html! {},
        }
    };

    html! {
        <section id="services" class="orchestration">
            <div class="orchestration-intro">
                <span class="section-tag">{"What we do"}</span>
                <h2>{"Orchestrating growth"}<br/>{"end to end"}</h2>
            </div>
            <div class="orchestration-grid">
                { for (0..2).map(|column| html! {
                    <div class="orchestration-column" style={format!("flex: {};", column_flex(column, *active, is_mobile))}>
                        { tile(column, 1.0) }
                    </div>
                }) }
                <div class="orchestration-column stacked" style={format!("flex: {};", column_flex(2, *active, is_mobile))}>
                    { tile(2, stacked_flex(2, *active, is_mobile)) }
                    { tile(3, stacked_flex(3, *active, is_mobile)) }
                </div>
            </div>
            <style>
                {r#"
                .orchestration {
                    padding: 128px 16px;
                    background: #050a18;
                    color: #ffffff;
                }
                .orchestration-intro h2 {
                    margin: 16px 0 48px;
                    font-size: 40px;
                    font-weight: 300;
                    line-height: 1.1;
                }
                .orchestration-grid {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .orchestration-column {
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                    transition: flex 0.6s cubic-bezier(0.33, 1, 0.68, 1);
                }
                .feature-tile {
                    position: relative;
                    min-height: 320px;
                    overflow: hidden;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: flex 0.6s cubic-bezier(0.33, 1, 0.68, 1);
                }
                .feature-bg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.35;
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .feature-tile.expanded .feature-bg {
                    opacity: 0.6;
                    transform: scale(1.05);
                }
                .feature-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(5, 10, 24, 0.95), transparent);
                }
                .feature-body {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 24px;
                }
                .feature-head {
                    display: flex;
                    justify-content: space-between;
                    font-family: monospace;
                    font-size: 12px;
                    color: rgba(255, 255, 255, 0.5);
                }
                .feature-icon {
                    font-size: 20px;
                }
                .feature-body h3 {
                    margin: 16px 0 0;
                    font-size: 24px;
                    font-weight: 400;
                }
                .feature-description {
                    max-height: 0;
                    margin: 0;
                    overflow: hidden;
                    opacity: 0;
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                    transition: max-height 0.6s ease, opacity 0.4s ease, margin 0.6s ease;
                }
                .feature-tile.expanded .feature-description {
                    max-height: 200px;
                    margin-top: 12px;
                    opacity: 1;
                }
                @media (min-width: 768px) {
                    .orchestration {
                        padding: 160px 48px;
                    }
                    .orchestration-grid {
                        flex-direction: row;
                        height: 640px;
                    }
                    .feature-tile {
                        min-height: 0;
                        flex: 1;
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
    fn default_card_widens_first_column() {
        assert_eq!(column_flex(0, 0, false), 2.0);
        assert_eq!(column_flex(1, 0, false), 1.0);
        assert_eq!(column_flex(2, 0, false), 1.0);
    }

    #[test]
    fn either_stacked_card_widens_third_column() {
        for active in [2, 3] {
            assert_eq!(column_flex(2, active, false), 2.0);
            assert_eq!(column_flex(0, active, false), 1.0);
        }
        assert_eq!(stacked_flex(2, 3, false), 1.0);
        assert_eq!(stacked_flex(3, 3, false), 2.0);
    }

    #[test]
    fn mobile_expands_everything() {
        assert_eq!(column_flex(0, 1, true), 1.0);
        assert_eq!(column_flex(1, 1, true), 1.0);
        assert_eq!(column_flex(2, 1, true), 2.0);
        assert_eq!(stacked_flex(3, 3, true), 1.0);
        assert!((0..4).all(|card| is_expanded(card, 0, true)));
    }

    #[test]
    fn only_active_card_expands_on_desktop() {
        let expanded: Vec<_> = (0..4).filter(|&card| is_expanded(card, 2, false)).collect();
        assert_eq!(expanded, vec![2]);
    }
}
