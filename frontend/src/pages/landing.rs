use yew::prelude::*;

use crate::components::{
    faq::FaqSection, footer::Footer, hero::Hero, industries::Industries,
    orchestration::Orchestration, projects::Projects, stats::Stats,
};
use crate::content::LandingContent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: LandingContent,
}

/// The single marketing page, top to bottom.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;

    html! {
        <main class="landing-page">
            <Hero hero={content.hero.clone()} />
            <Stats stats={content.stats.clone()} />
            <Orchestration features={content.features.clone()} />
            <Industries cases={content.cases.clone()} />
            <Projects cases={content.cases.clone()} summary={content.projects_summary.clone()} />
            <FaqSection faqs={content.faqs.clone()} />
            <Footer brand={content.brand.clone()} footer={content.footer.clone()} />
            <style>
                {r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    background: #050a18;
                    font-family: 'Inter', system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .landing-page {
                    position: relative;
                    overflow-x: clip;
                }
                "#}
            </style>
        </main>
    }
}
