use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::footer::Footer;
use crate::components::market::Market;
use crate::components::sections::{Benefits, Hero, Process};

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title("Vulva La Replica");
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page">
            <main class="page-main">
                <Hero />
                <Process />
                <Benefits />
                <Market />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}
