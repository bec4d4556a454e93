use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-alert-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    props.class.get_or_insert_with(|| "desk-alert".to_string());

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-alert-title", None, false));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-alert-description", None, false));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-alert-actions", None, false));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-alert-action", None, false));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

#[component]
pub fn AlertDialogCancel(mut props: prim::AlertDialogCancelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "desk-alert-cancel", None, false));

    rsx! {
        prim::AlertDialogCancel { ..props }
    }
}

/// Modal message that must be acknowledged.
///
/// Without `cancel_label` it is a plain notice with one button; with it, a
/// yes/no confirmation. Either button closes the dialog through
/// `on_open_change(false)`; only the confirm button fires `on_confirm`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    description: String,
    #[props(default = "OK".to_string())] confirm_label: String,
    #[props(default)] cancel_label: Option<String>,
    #[props(default)] on_confirm: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            open: open,
            on_open_change: move |v: bool| on_open_change.call(v),
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{description}" }
                AlertDialogActions {
                    if let Some(cancel) = cancel_label {
                        AlertDialogCancel { "{cancel}" }
                    }
                    AlertDialogAction {
                        on_click: move |_| {
                            on_open_change.call(false);
                            if let Some(handler) = &on_confirm {
                                handler.call(());
                            }
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
