use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod context;
mod forms {
    pub mod client;
    pub mod models;
    pub mod state;
    pub mod validation;
}
mod consent {
    pub mod model;
    pub mod store;
}
mod components {
    pub mod call_to_action;
    pub mod confirmation;
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod footer;
    pub mod market;
    pub mod navbar;
    pub mod notification;
    pub mod registration_dialog;
    pub mod sections;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod legal;
    pub mod not_found;
}

use components::{cookie_consent::CookieConsent, navbar::Nav, notification::ToastProvider};
use config::SiteConfig;
use consent::store::ConsentStore;
use forms::client::SubmitHandle;
use pages::{
    contact::Contact,
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/privacy-policy")]
    Privacy,
    #[at("/terms-of-service")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let client = {
        let config = props.config.clone();
        use_state(move || SubmitHandle::from_config(&config))
    };
    let consent = use_state(ConsentStore::browser);

    html! {
        <ContextProvider<SubmitHandle> context={(*client).clone()}>
            <ContextProvider<ConsentStore> context={(*consent).clone()}>
                <ToastProvider>
                    <BrowserRouter>
                        <Nav />
                        <Switch<Route> render={switch} />
                        <CookieConsent />
                    </BrowserRouter>
                </ToastProvider>
            </ContextProvider<ConsentStore>>
        </ContextProvider<SubmitHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    let config = SiteConfig::from_build_env();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
