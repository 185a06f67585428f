use yew::prelude::*;

use crate::content::StatsContent;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: StatsContent,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let stats = &props.stats;

    html! {
        <section id="about" class="stats">
            <div class="stats-intro">
                <h2>
                    { for stats.heading.iter().map(|line| html! { <span>{line}</span> }) }
                </h2>
                <div class="stats-copy">
                    { for stats.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                </div>
            </div>
            <div class="stats-grid">
                { for stats.items.iter().map(|item| html! {
                    <div class="stat">
                        <span class="stat-value">{&item.value}</span>
                        <span class="stat-label">{&item.label}</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .stats {
                    padding: 128px 16px;
                    background: #050a18;
                    color: #ffffff;
                }
                .stats-intro {
                    display: grid;
                    gap: 32px;
                }
                .stats h2 {
                    margin: 0;
                    font-size: 40px;
                    font-weight: 300;
                    line-height: 1.1;
                }
                .stats h2 span {
                    display: block;
                }
                .stats-copy p {
                    margin: 0 0 16px;
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.7;
                }
                .stats-grid {
                    display: grid;
                    gap: 32px;
                    margin-top: 80px;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding-top: 24px;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .stat-value {
                    font-size: 64px;
                    font-weight: 300;
                    line-height: 1;
                }
                .stat-label {
                    max-width: 260px;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 14px;
                }
                @media (min-width: 768px) {
                    .stats {
                        padding: 160px 48px;
                    }
                    .stats-intro {
                        grid-template-columns: 1fr 1fr;
                    }
                    .stats-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
