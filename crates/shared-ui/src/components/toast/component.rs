use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

/// Views raise toasts with `use_toast().success(..)`; the customer form
/// uses it to acknowledge a submitted ticket.
pub use dioxus_primitives::toast::{use_toast, ToastOptions};

/// Mount once around the router so any view can raise a toast.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
