use std::rc::Rc;

use dominator::{Dom, events, html, link};
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen_futures::spawn_local;

use shared::catalog::Catalog;
use shared::constants::ERROR_AUTH_REQUIRED;
use shared::dashboard::{Dashboard, Outcome};
use shared::route::Route;
use shared::session;

use crate::connect_fetch::FetchTransport;
use crate::connect_storage::BrowserStore;
use crate::constants::{APP_TITLE, PROP_DISABLED, PROP_FOR, PROP_ID, PROP_SELECTED, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_LABEL, TAG_OPTION, TAG_SELECT};
use crate::dialog::dialogs::Dialog;
use crate::elements::app_header::app_header;
use crate::state::CONFIG;
use crate::utils::{BrowserClipboard, get_value_from_target, set_title, TimeoutTimer};

fn css_class(label: &str) -> String {
    format!("app-dashboard__{label}")
}

pub fn app_dashboard() -> Dom {
    set_title(&format!("{APP_TITLE} | Generate Form Link"));
    let dashboard = Rc::new(Dashboard::new(Catalog::embedded(), &CONFIG.api_url));
    html!(TAG_DIV, {
        .class(css_class("page"))
        .children([
            app_header(session::load_profile(&BrowserStore)),
            html!("main", {
                .class(css_class("container"))
                .children([
                    panel(&dashboard),
                    link!(Route::Landing.path(), {
                        .class(css_class("back"))
                        .text("\u{2190} Back to Home")
                    }),
                ])
            }),
        ])
    })
}

fn panel(dashboard: &Rc<Dashboard>) -> Dom {
    let result = dashboard.clone();
    html!(TAG_DIV, {
        .class(css_class("card"))
        .child(html!("h1", {
            .class(css_class("title"))
            .text("Generate Form Link")
        }))
        .child_signal(dashboard.auth_error.signal().map(|flag| flag.then(auth_banner)))
        .children([
            semester_field(dashboard),
            subject_field(dashboard),
            generate_button(dashboard),
        ])
        .child_signal(result.form_link.signal_cloned().map(move |link| {
            if link.is_empty() {
                None
            } else {
                Some(link_panel(&result, &link))
            }
        }))
    })
}

fn auth_banner() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("auth-error"))
        .attr("role", "alert")
        .text(ERROR_AUTH_REQUIRED)
    })
}

fn option(value: &str, label: &str, selected: impl Signal<Item=bool> + 'static) -> Dom {
    html!(TAG_OPTION, {
        .attr(PROP_VALUE, value)
        .prop_signal(PROP_SELECTED, selected)
        .text(label)
    })
}

fn field(id: &str, label: &str, select: Dom) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("field"))
        .children([
            html!(TAG_LABEL, {
                .class(css_class("label"))
                .attr(PROP_FOR, id)
                .text(label)
            }),
            select,
        ])
    })
}

fn semester_field(dashboard: &Rc<Dashboard>) -> Dom {
    let semester = dashboard.semester.clone();
    let placeholder = option("", "Select a semester", semester.signal_ref(|id| id.is_empty()));
    let options = dashboard.semesters().iter().map(|row| {
        let id = row.id.clone();
        option(&row.id, &row.name, semester.signal_ref(move |current| *current == id))
    });

    let dashboard = dashboard.clone();
    field("semester", "Select Semester", html!(TAG_SELECT, {
        .attr(PROP_ID, "semester")
        .class(css_class("select"))
        .child(placeholder)
        .children(options)
        .event(move |ev: events::Change| {
            dashboard.select_semester(&get_value_from_target(ev.target()));
        })
    }))
}

fn subject_field(dashboard: &Rc<Dashboard>) -> Dom {
    let subject = dashboard.subject.clone();
    let placeholder = option("", "Select a subject", subject.signal_ref(|id| id.is_empty()));
    let options = dashboard.subjects_signal().map(move |subjects| {
        subjects.iter().map(|row| {
            let id = row.id.clone();
            option(&row.id, &row.name, subject.signal_ref(move |current| *current == id))
        }).collect::<Vec<_>>()
    });

    let disabled = dashboard.semester.signal_ref(|id| id.is_empty());
    let dashboard = dashboard.clone();
    field("subject", "Select Subject", html!(TAG_SELECT, {
        .attr(PROP_ID, "subject")
        .class(css_class("select"))
        .prop_signal(PROP_DISABLED, disabled)
        .child(placeholder)
        .children_signal_vec(options.to_signal_vec())
        .event(move |ev: events::Change| {
            dashboard.select_subject(&get_value_from_target(ev.target()));
        })
    }))
}

fn generate_button(dashboard: &Rc<Dashboard>) -> Dom {
    let label = dashboard.generating.signal().map(|busy| if busy { "Generating..." } else { "Generate Form Link" });
    let disabled = dashboard.can_generate_signal().map(|ready| !ready);
    let dashboard = dashboard.clone();
    html!(TAG_BUTTON, {
        .class(css_class("generate"))
        .class_signal("busy", dashboard.generating.signal())
        .prop_signal(PROP_DISABLED, disabled)
        .text_signal(label)
        .event(move |_: events::Click| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Outcome::Failed(err) = dashboard.generate(&FetchTransport, &BrowserStore).await {
                    Dialog::alert(&err.alert_message());
                }
            });
        })
    })
}

fn link_panel(dashboard: &Rc<Dashboard>, link: &str) -> Dom {
    let copy = dashboard.clone();
    html!(TAG_DIV, {
        .class(css_class("result"))
        .children([
            html!(TAG_LABEL, {
                .class(css_class("label"))
                .text("Your Google Form Link")
            }),
            html!(TAG_DIV, {
                .class(css_class("link-row"))
                .children([
                    html!(TAG_INPUT, {
                        .class(css_class("link"))
                        .attr(PROP_TYPE, "text")
                        .attr("readonly", "")
                        .prop(PROP_VALUE, link)
                    }),
                    html!(TAG_BUTTON, {
                        .class(css_class("copy"))
                        .class_signal("copied", dashboard.copied.signal())
                        .text_signal(dashboard.copied.signal().map(|copied| if copied { "Copied!" } else { "Copy" }))
                        .event(move |_: events::Click| {
                            copy.copy_link(&BrowserClipboard, &TimeoutTimer);
                        })
                    }),
                ])
            }),
            html!("p", {
                .class(css_class("hint"))
                .text("This link will direct students to your custom Google Form. \
                    All responses will be automatically saved to your Google Drive.")
            }),
            next_steps(),
        ])
    })
}

fn next_steps() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("next"))
        .children([
            html!("h3", { .text("What happens next?") }),
            html!("ul", {
                .children([
                    "Share this link with your students",
                    "Responses will be automatically collected in your Google Sheets",
                    "Access response data anytime from your dashboard",
                ].map(|text| html!("li", { .text(text) })))
            }),
        ])
    })
}
