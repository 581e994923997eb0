//! Copy an element's text to the clipboard.
//!
//! The DOM lookup, the clipboard and the notification surface are traits so
//! [`copy_element_text`] runs against fakes in tests.

use std::future::Future;

use leptos::{prelude::*, task::spawn_local};
use mxnan_core::html::COPY_TARGET_ATTR;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{
    icons::{Icon, IconKind},
    toast::{Notifier, Toaster},
};

pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard";
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("element `{0}` has no text")]
    EmptyText(String),

    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Looks up the text content of an element.
pub trait TextSource {
    fn text_of(&self, id: &str) -> Option<String>;
}

/// Asynchronous clipboard writer.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Copy the text of element `id`, reporting the outcome through `notifier`.
///
/// The clipboard is not touched when the element is missing or empty.
pub async fn copy_element_text(
    source: &impl TextSource,
    clipboard: &impl ClipboardSink,
    notifier: &impl Notifier,
    id: &str,
) -> Result<(), ClipboardError> {
    let result = match source.text_of(id) {
        None => Err(ClipboardError::MissingElement(id.to_string())),
        Some(text) if text.is_empty() => Err(ClipboardError::EmptyText(id.to_string())),
        Some(text) => clipboard.write_text(&text).await,
    };

    match &result {
        Ok(()) => notifier.success(COPY_SUCCESS_MESSAGE),
        Err(err) => {
            log::warn!("copy of `{id}` failed: {err}");
            notifier.error(COPY_FAILURE_MESSAGE);
        }
    }
    result
}

/// Text lookup in the current document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTextSource;

impl TextSource for DocumentTextSource {
    fn text_of(&self, id: &str) -> Option<String> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .text_content()
    }
}

/// `navigator.clipboard` of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl ClipboardSink for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
    }
}

/// Copy element `id` in the background; the toaster reports the outcome.
pub fn spawn_copy(toaster: Toaster, id: String) {
    spawn_local(async move {
        let _ = copy_element_text(&DocumentTextSource, &NavigatorClipboard, &toaster, &id).await;
    });
}

/// Target id of the inline copy button a click landed on, if any.
///
/// Inline buttons come pre-rendered inside prose HTML, so they are found
/// from the click target rather than bound one by one.
pub fn inline_copy_target(ev: &web_sys::MouseEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    element
        .closest(&format!("[{COPY_TARGET_ATTR}]"))
        .ok()
        .flatten()?
        .get_attribute(COPY_TARGET_ATTR)
        .filter(|id| !id.is_empty())
}

/// Button copying the text of the element with id `target`.
#[component]
pub fn CopyButton(#[prop(into)] target: String) -> impl IntoView {
    let toaster = Toaster::expect();
    let target = StoredValue::new(target);

    let on_click = move |_| spawn_copy(toaster, target.get_value());

    view! {
      <button
        type="button"
        class="copy-button absolute top-2 right-2 p-1 rounded opacity-70 hover:opacity-100"
        aria-label="Copy code"
        on:click=on_click
      >
        <Icon kind=IconKind::CopyPlus class="w-4 h-4" />
      </button>
    }
}
