//! Transient notifications.

use std::{collections::VecDeque, time::Duration};

use leptos::prelude::*;

/// Toasts visible at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Time before a toast dismisses itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast list with a visibility cap.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    /// Add a toast, returning its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        id
    }

    /// Remove a toast; `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reports the outcome of user actions.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Reactive handle to the page's toast queue, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    /// Create the queue and provide it to descendants.
    pub fn provide() -> Self {
        let toaster = Self {
            queue: RwSignal::new(ToastQueue::default()),
        };
        provide_context(toaster);
        toaster
    }

    /// The toaster provided by an ancestor.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn show(&self, kind: ToastKind, message: &str) {
        let queue = self.queue;
        let id = queue.write().push(kind, message);
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }
}

/// Renders the toast stack of the provided [`Toaster`].
#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = Toaster::expect();
    let toasts = move || toaster.queue.with(|q| q.iter().cloned().collect::<Vec<_>>());

    view! {
      <ol class="toaster" aria-live="polite">
        <For
          each=toasts
          key=|toast| toast.id
          children=move |toast| {
            let id = toast.id;
            view! {
              <li class=toast.kind.class() role="status">
                <span class="toast-message">{toast.message}</span>
                <button
                  class="toast-close"
                  aria-label="Dismiss"
                  on:click=move |_| toaster.dismiss(id)
                >
                  "×"
                </button>
              </li>
            }
          }
        />
      </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a");
        let b = queue.push(ToastKind::Error, "b");
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(ToastKind::Success, format!("t{i}"));
        }
        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Error, "Failed to copy");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
