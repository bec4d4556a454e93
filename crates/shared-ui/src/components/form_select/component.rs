use dioxus::prelude::*;

/// Native `<select>` with the desk styling.
///
/// Children are `option { value: "...", "Label" }` elements. Put an
/// `option { value: "", disabled: true, "..." }` first to get a placeholder.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "desk-select", None, false),
        Attribute::new(
            "aria-invalid",
            if error.is_some() { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "desk-select-wrapper",
            if !label.is_empty() {
                label { class: "desk-select-label",
                    "{label}"
                    if required {
                        span { class: "desk-required", " *" }
                    }
                }
            }
            select {
                value: value,
                disabled: disabled,
                required: required,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
            if let Some(message) = error {
                span { class: "desk-field-error", "{message}" }
            }
        }
    }
}
