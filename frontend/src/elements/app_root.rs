use dominator::{Dom, html, routing};
use futures_signals::signal::SignalExt;

use shared::route::Route;

use crate::constants::TAG_DIV;
use crate::dialog::dialogs::dialogs;
use crate::elements::app_dashboard::app_dashboard;
use crate::elements::app_landing::app_landing;
use crate::utils::url_pathname;

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .child_signal(routing::url()
            .signal_ref(|url| Route::from_path(&url_pathname(url)))
            .dedupe()
            .map(route_page))
        .child_signal(dialogs())
    })
}

fn route_page(route: Option<Route>) -> Option<Dom> {
    log::debug!("route: {route:?}");
    route.map(|route| match route {
        Route::Landing => app_landing(),
        Route::Dashboard => app_dashboard(),
    })
}

pub fn go_to(route: Route) {
    routing::go_to_url(route.path());
}
