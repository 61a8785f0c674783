use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use shared::constants::{STEP_FADE_MS, STEP_INTERVAL_MS};
use shared::landing::{Landing, STEPS};
use shared::route::Route;
use shared::types::UserProfile;

use crate::connect_oauth::GoogleLogin;
use crate::connect_storage::BrowserStore;
use crate::constants::{APP_TITLE, PROP_ALT, PROP_SRC, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::elements::app_header::icon_brand;
use crate::elements::app_root::go_to;
use crate::state::CONFIG;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-landing__{label}")
}

pub fn app_landing() -> Dom {
    set_title(APP_TITLE);
    let landing = Rc::new(Landing::restore(&BrowserStore));
    html!("section", {
        .class(css_class("container"))
        .future(step_carousel(landing.clone()))
        .children([hero(&landing), showcase(&landing)])
    })
}

async fn step_carousel(landing: Rc<Landing>) {
    loop {
        TimeoutFuture::new(STEP_INTERVAL_MS).await;
        landing.begin_step_change();
        TimeoutFuture::new(STEP_FADE_MS).await;
        landing.finish_step_change();
    }
}

fn hero(landing: &Rc<Landing>) -> Dom {
    let landing = landing.clone();
    html!(TAG_DIV, {
        .class(css_class("hero"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("badge"))
                .text("Supercharge your Google Forms")
            }),
            html!("h1", {
                .class(css_class("headline"))
                .children([
                    html!(TAG_SPAN, { .class(css_class("accent")).text("Build Smarter") }),
                    html!("br"),
                    html!(TAG_SPAN, { .text("Google Forms") }),
                ])
            }),
            html!("p", {
                .class(css_class("lead"))
                .text("Create professional-grade forms in minutes, distribute them effortlessly, \
                    and analyze results directly in Google Forms. Perfect for educators and researchers.")
            }),
        ])
        .child_signal(landing.user.signal_cloned().map(move |user| {
            Some(match user {
                Some(user) => welcome_card(&landing, &user),
                None => login_button(&landing),
            })
        }))
    })
}

fn login_button(landing: &Rc<Landing>) -> Dom {
    let landing = landing.clone();
    html!(TAG_BUTTON, {
        .class(css_class("login"))
        .text("Continue with Google")
        .event(move |_: events::Click| {
            let landing = landing.clone();
            spawn_local(async move {
                let provider = GoogleLogin::from_config(&CONFIG);
                if landing.login(&provider, &BrowserStore).await.is_ok() {
                    go_to(Route::Dashboard);
                }
            });
        })
    })
}

fn welcome_card(landing: &Rc<Landing>, user: &UserProfile) -> Dom {
    let landing = landing.clone();
    html!(TAG_DIV, {
        .class(css_class("welcome"))
        .children([
            html!("img", {
                .class(css_class("avatar"))
                .attr(PROP_SRC, &user.picture)
                .attr(PROP_ALT, &user.name)
            }),
            html!(TAG_DIV, {
                .children([
                    html!("p", {
                        .class(css_class("greeting"))
                        .text(&format!("Welcome, {}", user.display_name()))
                    }),
                    html!(TAG_BUTTON, {
                        .class(css_class("logout"))
                        .text("Not you? Sign out")
                        .event(move |_: events::Click| landing.logout(&BrowserStore))
                    }),
                    html!(TAG_BUTTON, {
                        .class(css_class("open"))
                        .text("Open dashboard")
                        .event(|_: events::Click| go_to(Route::Dashboard))
                    }),
                ])
            }),
        ])
    })
}

fn showcase(landing: &Rc<Landing>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("card"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("brand"))
                .children([
                    icon_brand(&css_class("logo")),
                    html!(TAG_SPAN, { .text(APP_TITLE) }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("steps"))
                .children(STEPS.iter().enumerate().map(|(index, step)| {
                    html!(TAG_DIV, {
                        .class(css_class("step"))
                        .class_signal("active", landing.active_step.signal().map(move |active| active == index))
                        .children([
                            html!(TAG_DIV, {
                                .class(css_class("step-number"))
                                .text(&(index + 1).to_string())
                            }),
                            html!(TAG_SPAN, {
                                .class(css_class("step-title"))
                                .text(step.title)
                            }),
                        ])
                    })
                }))
            }),
            html!(TAG_DIV, {
                .class(css_class("step-content"))
                .class_signal("fading", landing.animating.signal())
                .text_signal(landing.active_step.signal().map(|active| STEPS[active % STEPS.len()].description))
            }),
        ])
    })
}
