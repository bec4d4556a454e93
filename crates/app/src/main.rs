use dioxus::prelude::*;

mod routes;
mod session;
use routes::Route;
use session::Session;

const DESK_BASE: Asset = asset!("/assets/desk.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    let accounts = shared_types::directory();
    tracing::info!(accounts = accounts.len(), "credential directory loaded");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(Session::new);

    rsx! {
        document::Title { "Support Desk" }
        document::Link { rel: "stylesheet", href: DESK_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
