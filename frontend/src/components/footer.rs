use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-links">
                <Link<Route> to={Route::Contact} classes="footer-link">{"Contact Us"}</Link<Route>>
                <span class="footer-separator">{"|"}</span>
                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
                <span class="footer-separator">{"|"}</span>
                <Link<Route> to={Route::Terms} classes="footer-link">{"Terms of Service"}</Link<Route>>
            </div>
            <p class="footer-copyright">{format!("© {} Vulva La Replica. All rights reserved.", year)}</p>
        </footer>
    }
}
