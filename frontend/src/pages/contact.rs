use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page">
            <main class="page-main narrow">
                <h1 class="page-title">{"Contact Us"}</h1>
                <p class="page-lead">
                    {"Have questions or want to learn more about VLV? We'd love to hear from you."}
                </p>
                <ContactForm />
            </main>
            <Footer />
        </div>
    }
}
