use dioxus::prelude::*;

/// Top bar of a dashboard: title on the left, actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "desk-page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "desk-page-title", {children} }
    }
}

/// Secondary line under the title, e.g. the greeting.
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "desk-page-subtitle", {children} }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "desk-page-actions", {children} }
    }
}
