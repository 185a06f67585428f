use yew::prelude::*;

use crate::config;
use crate::content::HeroContent;

/// Concentric diamond outlines behind the heading: (size px, spin seconds).
const DIAMONDS: [(u32, u32); 4] = [(900, 60), (700, 45), (500, 30), (300, 20)];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;

    html! {
        <section id="home" class="hero">
            <div class="hero-bg" style={format!("background-image: url('{}');", config::asset("hero-bg.jpg"))}></div>
            <div class="hero-diamonds">
                { for DIAMONDS.iter().enumerate().map(|(i, (size, secs))| html! {
                    <div
                        class="hero-diamond"
                        style={format!(
                            "width: {size}px; height: {size}px; animation-duration: {secs}s; animation-direction: {dir};",
                            size = size,
                            secs = secs,
                            dir = if i % 2 == 0 { "normal" } else { "reverse" },
                        )}
                    ></div>
                }) }
            </div>

            <div class="hero-content">
                <h1>
                    { for hero.heading.iter().map(|line| html! {
                        <span class="hero-line">{line}</span>
                    }) }
                </h1>
                <p class="hero-description">{&hero.description}</p>
                <div class="hero-actions">
                    <a href="#contact" class="hero-cta">
                        <span>{&hero.cta}</span>
                        <span class="hero-cta-arrow">{"→"}</span>
                    </a>
                    <div class="hero-trust">
                        <span class="hero-trust-score">{&hero.trust_score}</span>
                        <span class="hero-trust-stars">{"★★★★★"}</span>
                        <span class="hero-trust-label">{"Trusted by teams worldwide"}</span>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: flex-end;
                    overflow: hidden;
                    padding: 0 16px 96px;
                    background: #050a18;
                    color: #ffffff;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.5;
                }
                .hero-diamonds {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                }
                .hero-diamond {
                    position: absolute;
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    animation-name: diamondSpin;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes diamondSpin {
                    from { transform: rotate(45deg); }
                    to { transform: rotate(405deg); }
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 880px;
                }
                .hero h1 {
                    margin: 0;
                    font-size: 48px;
                    font-weight: 300;
                    line-height: 1.05;
                    letter-spacing: -0.02em;
                }
                .hero-line {
                    display: block;
                    animation: heroRise 0.9s cubic-bezier(0.33, 1, 0.68, 1) both;
                }
                .hero-line:nth-child(2) { animation-delay: 0.1s; }
                .hero-line:nth-child(3) { animation-delay: 0.2s; }
                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-description {
                    max-width: 520px;
                    margin: 24px 0 40px;
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 32px;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 12px;
                    padding: 16px 28px;
                    border-radius: 5px;
                    background: #3b82f6;
                    color: #ffffff;
                    text-decoration: none;
                }
                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }
                .hero-cta-arrow {
                    transition: transform 0.3s ease;
                }
                .hero-trust {
                    display: grid;
                    grid-template-columns: auto auto;
                    column-gap: 12px;
                    align-items: center;
                }
                .hero-trust-score {
                    grid-row: span 2;
                    font-size: 36px;
                    font-weight: 300;
                }
                .hero-trust-stars {
                    color: #facc15;
                    letter-spacing: 2px;
                }
                .hero-trust-label {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 12px;
                }
                @media (min-width: 768px) {
                    .hero {
                        padding: 0 48px 128px;
                    }
                    .hero h1 {
                        font-size: 88px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
