use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod anim;
mod config;
mod content;
mod error;
mod timeline {
    pub mod advance;
    pub mod card;
    pub mod config;
    pub mod driver;
    pub mod render;
    pub mod session;
}
mod utils {
    pub mod dom;
    pub mod frame;
    pub mod scroll;
}
mod components {
    pub mod faq;
    pub mod footer;
    pub mod gradual_blur;
    pub mod hero;
    pub mod industries;
    pub mod navbar;
    pub mod orchestration;
    pub mod preloader;
    pub mod projects;
    pub mod smooth_scrolling;
    pub mod starfield;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use components::{
    gradual_blur::GradualBlur,
    navbar::Navbar,
    preloader::Preloader,
    smooth_scrolling::SmoothScrolling,
};
use content::LandingContent;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <HomePage /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn HomePage() -> Html {
    let content = use_memo(
        |_| {
            LandingContent::bundled().map_err(|err| {
                error!("Bundled landing copy is unusable: {}", err);
                err
            })
        },
        (),
    );

    match &*content {
        Ok(content) => html! {
            <SmoothScrolling>
                <Preloader brand={content.brand.clone()} tagline={content.tagline.clone()} />
                <Navbar brand={content.brand.clone()} links={content.nav_links.clone()} />
                <Landing content={content.clone()} />
                <GradualBlur />
            </SmoothScrolling>
        },
        Err(err) => html! {
            <div class="content-error">
                <p>{"This page could not be loaded."}</p>
                <pre>{err.to_string()}</pre>
            </div>
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting Walame landing page");
    yew::Renderer::<App>::new().render();
}
