use dominator::{Dom, html, svg};

use shared::types::UserProfile;

use crate::constants::{APP_TITLE, TAG_DIV, TAG_SPAN};

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header(profile: Option<UserProfile>) -> Dom {
    let initial = profile.as_ref().map(UserProfile::initial).unwrap_or_else(|| "U".to_string());
    let title = profile.map(|p| p.name).unwrap_or_default();
    html!("header", {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("brand"))
                .children([
                    icon_brand(&css_class("logo")),
                    html!(TAG_SPAN, {
                        .class(css_class("title"))
                        .text(APP_TITLE)
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("avatar"))
                .attr("title", &title)
                .text(&initial)
            }),
        ])
    })
}

pub fn icon_brand(class: &str) -> Dom {
    svg!("svg", {
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .class(class)
        .child(svg!("path", {
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("stroke-width", "2")
            .attr("d", "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z")
        }))
    })
}
