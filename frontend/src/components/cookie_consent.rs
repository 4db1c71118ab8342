use chrono::Utc;
use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::model::{BannerState, ConsentChoice, ConsentRecord};
use crate::context::use_consent_store;
use crate::Route;

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let store = use_consent_store();
    let banner = {
        let has_decision = store.has_decision();
        use_state(move || BannerState::initial(has_decision))
    };

    // Persist first, then hide. A failed write still hides the banner for
    // this page view.
    let commit = {
        let banner = banner.clone();
        let store = store.clone();
        move |record: ConsentRecord| {
            if let Err(e) = store.save(&record) {
                error!("Failed to store cookie consent: {}", e);
            }
            banner.set(BannerState::Hidden);
        }
    };

    let choose = |choice: ConsentChoice| {
        let commit = commit.clone();
        Callback::from(move |_: MouseEvent| commit(ConsentRecord::new(choice, Utc::now())))
    };

    let transition = |step: fn(BannerState) -> BannerState| {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| banner.set(step(*banner)))
    };

    let save_preferences = {
        let banner = banner.clone();
        let commit = commit.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(record) = banner.custom_record(Utc::now()) {
                commit(record);
            }
        })
    };

    let privacy_link = html! {
        <Link<Route> to={Route::Privacy} classes="text-link">{"Privacy Policy"}</Link<Route>>
    };

    match *banner {
        BannerState::Hidden => html! {},
        BannerState::Shown => html! {
            <div class="cookie-banner" role="region" aria-label="Cookie consent">
                <p>
                    {"We use cookies to enhance your experience. By continuing to visit this site you agree to our use of cookies. You can see our "}
                    {privacy_link}
                    {" for details on how we use your data."}
                </p>
                <div class="cookie-actions">
                    <button class="button-outline small" onclick={choose(ConsentChoice::Rejected)}>{"Reject All"}</button>
                    <button class="button-outline small" onclick={transition(BannerState::open_settings)}>{"Cookie Settings"}</button>
                    <button class="button-secondary small" onclick={choose(ConsentChoice::Necessary)}>{"Accept Necessary"}</button>
                    <button class="button-primary small" onclick={choose(ConsentChoice::All)}>{"Accept All"}</button>
                </div>
            </div>
        },
        BannerState::Customizing { analytics, marketing } => html! {
            <div class="dialog-overlay" onclick={transition(BannerState::close_settings)}>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <div class="dialog-header">
                        <h2>{"Cookie Settings"}</h2>
                        <p class="dialog-description">
                            {"Customize your cookie preferences. Under GDPR and ePrivacy regulations, you have the right to choose which cookies you accept."}
                        </p>
                    </div>

                    <div class="cookie-category">
                        <div>
                            <h3>{"Necessary Cookies"}</h3>
                            <p class="muted">{"These cookies are required for the website to function and cannot be disabled."}</p>
                        </div>
                        <input type="checkbox" checked=true disabled=true />
                    </div>
                    <div class="cookie-category">
                        <div>
                            <h3>{"Performance & Analytics"}</h3>
                            <p class="muted">{"These cookies allow us to count visits and traffic sources so we can measure and improve the performance of our site."}</p>
                        </div>
                        <input
                            type="checkbox"
                            id="analytics"
                            checked={analytics}
                            onclick={transition(BannerState::toggle_analytics)}
                        />
                    </div>
                    <div class="cookie-category">
                        <div>
                            <h3>{"Marketing Cookies"}</h3>
                            <p class="muted">{"These cookies may be set through our site by our advertising partners to build a profile of your interests."}</p>
                        </div>
                        <input
                            type="checkbox"
                            id="marketing"
                            checked={marketing}
                            onclick={transition(BannerState::toggle_marketing)}
                        />
                    </div>

                    <div class="cookie-notes">
                        <h3>{"Data Controller Information"}</h3>
                        <p class="muted">
                            {"Vulva La Replica is the data controller for the personal data collected through this website. For details about how we process your data, your rights as a data subject, and how to contact our Data Protection Officer, please see our "}
                            {privacy_link}
                            {"."}
                        </p>
                        <p class="fine-print">
                            {"Under GDPR (General Data Protection Regulation) and ePrivacy regulations, you have the right to withdraw your consent at any time. You can do this by clearing your browser cookies or by contacting us."}
                        </p>
                    </div>

                    <div class="dialog-footer">
                        <button class="button-outline" onclick={choose(ConsentChoice::Rejected)}>{"Reject All"}</button>
                        <button class="button-outline" onclick={choose(ConsentChoice::Necessary)}>{"Accept Necessary Only"}</button>
                        <button class="button-primary" onclick={save_preferences}>{"Save Preferences"}</button>
                    </div>
                </div>
            </div>
        },
    }
}
