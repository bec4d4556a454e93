use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form field caption. Pair with `html_for` so clicking the text focuses
/// the input; the login page appends its own required marker.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
