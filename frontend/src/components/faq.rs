use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Faq;

/// Single-open accordion: clicking the open item closes it, clicking any
/// other item opens that one instead.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    faq: Faq,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="faq-number">{format!("{:02}", props.index + 1)}</span>
                <span class="question-text">{&props.faq.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.faq.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faqs: Vec<Faq>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqProps) -> Html {
    let open = use_state(|| Some(0usize));

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            open.set(toggle_open(*open, index));
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-intro">
                <span class="section-tag">{"FAQ"}</span>
                <h2>{"Questions we hear"}<br/>{"every week"}</h2>
            </div>
            <div class="faq-list">
                { for props.faqs.iter().enumerate().map(|(index, faq)| html! {
                    <FaqItem
                        index={index}
                        faq={faq.clone()}
                        open={*open == Some(index)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
            <style>
                {r#"
                .faq-section {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 48px;
                    padding: 128px 16px;
                    background: #050a18;
                    color: #ffffff;
                }
                .faq-intro h2 {
                    margin: 16px 0 0;
                    font-size: 40px;
                    font-weight: 300;
                    line-height: 1.1;
                }
                .section-tag {
                    font-family: monospace;
                    font-size: 12px;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #3b82f6;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 24px;
                    padding: 28px 0;
                    border: none;
                    background: none;
                    color: inherit;
                    font-size: 20px;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-number {
                    font-family: monospace;
                    font-size: 12px;
                    color: rgba(255, 255, 255, 0.4);
                }
                .question-text {
                    flex: 1;
                }
                .toggle-icon {
                    font-size: 24px;
                    color: #3b82f6;
                }
                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    overflow: hidden;
                    transition: grid-template-rows 0.4s ease;
                }
                .faq-answer p {
                    min-height: 0;
                    margin: 0;
                    padding-left: 44px;
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.6;
                }
                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                    padding-bottom: 28px;
                }
                @media (min-width: 768px) {
                    .faq-section {
                        grid-template-columns: 1fr 2fr;
                        padding: 160px 48px;
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
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(0), 0), None);
    }

    #[test]
    fn clicking_other_item_moves_focus() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
        assert_eq!(toggle_open(None, 2), Some(2));
    }

    #[test]
    fn never_more_than_one_open() {
        let mut open = Some(0);
        for clicked in [1, 1, 4, 2, 2, 0] {
            open = toggle_open(open, clicked);
            assert!(open.map_or(true, |i| i == clicked));
        }
        assert_eq!(open, Some(0));
    }
}
