//! Transient notifications.
//!
//! Toasts are plain DOM nodes appended to `<body>`, independent of the
//! component tree, so they survive the re-render (or unmount) of whichever
//! component raised them.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

pub fn show_toast(message: &str) {
    push_toast(message, ToastKind::Info);
}

pub fn show_error(message: &str) {
    push_toast(message, ToastKind::Error);
}

/// Appends a toast and removes it after [`TOAST_DURATION_MS`]. The
/// message is set as text, never as markup.
fn push_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name(kind.class());
    toast.set_attribute("role", "status").ok();
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
