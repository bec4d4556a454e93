use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use dioxus_primitives::accordion as prim;

#[component]
pub fn Accordion(mut props: prim::AccordionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-accordion", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Accordion { ..props }
    }
}

#[component]
pub fn AccordionItem(mut props: prim::AccordionItemProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-accordion-item", None, false));

    rsx! {
        prim::AccordionItem { ..props }
    }
}

/// Header row of an item; a chevron is appended after the caller's content
/// and rotates via CSS when the item opens.
#[component]
pub fn AccordionTrigger(mut props: prim::AccordionTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-accordion-trigger", None, false));

    let label = props.children;
    props.children = rsx! {
        span { class: "desk-accordion-label", {label} }
        Icon::<LdChevronDown> { class: "desk-accordion-chevron", icon: LdChevronDown, width: 16, height: 16 }
    };

    rsx! {
        prim::AccordionTrigger { ..props }
    }
}

#[component]
pub fn AccordionContent(mut props: prim::AccordionContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-accordion-content", None, false));

    rsx! {
        prim::AccordionContent { ..props }
    }
}
