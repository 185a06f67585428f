use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::FooterContent;

pub fn copyright_line(brand: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: String,
    pub footer: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { brand, footer } = props;
    let year = chrono::Local::now().year();

    // The newsletter form has no backend; keep the page from reloading.
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <footer id="contact" class="footer">
            <div class="footer-grid">
                <div class="footer-brand-card">
                    <img src={config::asset("logo.png")} alt={brand.clone()} class="footer-logo" />
                    <p class="footer-pitch">
                        { for footer.pitch.iter().map(|line| html! { <span>{line}</span> }) }
                    </p>
                    <form class="footer-newsletter" {onsubmit}>
                        <input type="email" placeholder="Your email" aria-label="Email address" />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                </div>

                { for footer.columns.iter().map(|column| html! {
                    <div class="footer-column">
                        <h4>{&column.title}</h4>
                        { for column.links.iter().map(|link| html! {
                            <a href={link.href.clone()}>{&link.name}</a>
                        }) }
                    </div>
                }) }
            </div>

            <div class="footer-bottom">
                <span>{copyright_line(brand, year)}</span>
                <div class="footer-socials">
                    { for footer.socials.iter().map(|social| html! {
                        <a href={social.href.clone()}>{&social.name}</a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    padding: 96px 16px 32px;
                    background: #050a18;
                    color: #ffffff;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-grid {
                    display: grid;
                    gap: 48px;
                }
                .footer-brand-card {
                    padding: 32px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                }
                .footer-logo {
                    width: 96px;
                }
                .footer-pitch {
                    margin: 24px 0;
                    font-size: 24px;
                    font-weight: 300;
                }
                .footer-pitch span {
                    display: block;
                }
                .footer-newsletter {
                    display: flex;
                    gap: 8px;
                }
                .footer-newsletter input {
                    flex: 1;
                    padding: 12px 16px;
                    border-radius: 5px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #ffffff;
                }
                .footer-newsletter button {
                    padding: 12px 20px;
                    border: none;
                    border-radius: 5px;
                    background: #3b82f6;
                    color: #ffffff;
                    cursor: pointer;
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                }
                .footer-column h4 {
                    margin: 0 0 8px;
                    font-family: monospace;
                    font-size: 12px;
                    font-weight: 400;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.4);
                }
                .footer-column a,
                .footer-socials a {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-column a:hover,
                .footer-socials a:hover {
                    color: #3b82f6;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 16px;
                    margin-top: 64px;
                    padding-top: 24px;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 12px;
                }
                .footer-socials {
                    display: flex;
                    gap: 24px;
                }
                @media (min-width: 768px) {
                    .footer {
                        padding: 128px 48px 40px;
                    }
                    .footer-grid {
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright_line("Walame", 2026), "© 2026 Walame. All rights reserved.");
    }
}
