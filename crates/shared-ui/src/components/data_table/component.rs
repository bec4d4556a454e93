use dioxus::prelude::*;

/// Scrollable table with sticky header row.
#[component]
pub fn DataTable(
    #[props(default)] caption: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "desk-table",
            table {
                if let Some(text) = caption {
                    caption { "{text}" }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header; `numeric` right-aligns the column.
#[component]
pub fn DataTableColumn(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        th { class: if numeric { "numeric" }, {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { class: if numeric { "numeric" }, {children} }
    }
}
