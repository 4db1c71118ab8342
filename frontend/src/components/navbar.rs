use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::registration_dialog::RegistrationDialog;
use crate::Route;

/// Pixels scrolled before the bar switches to its solid style.
const SCROLL_THRESHOLD: f64 = 10.0;

const ANCHORS: [(&str, &str); 3] = [
    ("/#how-it-works", "How It Works"),
    ("/#benefits", "Why Choose VLV"),
    ("/#market", "Earning Opportunity"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let dialog_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);
                    let _ = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let open_dialog = {
        let menu_open = menu_open.clone();
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            dialog_open.set(true);
        })
    };

    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: ()| dialog_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"VLV"}
                    </Link<Route>>

                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={menu_class}>
                        { for ANCHORS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                        }) }
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Contact} classes="nav-link">
                                {"Contact Us"}
                            </Link<Route>>
                        </div>
                        <button class="button-primary nav-cta" onclick={open_dialog}>
                            {"Register Interest"}
                        </button>
                    </div>
                </div>
            </nav>
            <RegistrationDialog open={*dialog_open} on_close={close_dialog} />
        </>
    }
}
