use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Hairline rule between dashboard sections, e.g. under a ticket title.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-separator", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}
