use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location().map(|location| location.path().to_string()).unwrap_or_default();

    use_effect_with_deps(
        |path: &String| {
            error!("404: no route matches {}", path);
            || ()
        },
        path,
    );

    html! {
        <div class="page centered-page">
            <div class="glass-panel not-found">
                <h1 class="gradient-text">{"404"}</h1>
                <p>{"Oops! We couldn't find the page you're looking for."}</p>
                <Link<Route> to={Route::Home} classes="button-primary">{"← Return to Home"}</Link<Route>>
            </div>
        </div>
    }
}
