use chrono::{DateTime, Duration, Utc};
use leptos::prelude::*;
use leptos_use::use_interval_fn;

/// How long a toast stays up.
pub const TOAST_DISMISS_MS: i64 = 3000;
const SWEEP_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
    expires_at: DateTime<Utc>,
}

/// Push-only toast handle provided via context from `App`.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    counter: RwSignal<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        ToastQueue {
            toasts: RwSignal::new(Vec::new()),
            counter: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.counter.get_untracked() + 1;
        self.counter.set(id);
        let expires_at = Utc::now() + Duration::milliseconds(TOAST_DISMISS_MS);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message,
                expires_at,
            })
        });
    }

    fn entries(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    // Drop expired toasts without waking subscribers when nothing changed.
    fn sweep(&self) {
        let now = Utc::now();
        let expired = self
            .toasts
            .with_untracked(|list| list.iter().any(|t| t.expires_at <= now));
        if expired {
            self.toasts.update(|list| list.retain(|t| t.expires_at > now));
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();
    use_interval_fn(move || queue.sweep(), SWEEP_INTERVAL_MS);

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col gap-2" role="status">
            {move || {
                queue
                    .entries()
                    .into_iter()
                    .map(|toast| {
                        let tone = match toast.kind {
                            ToastKind::Success => {
                                "border-emerald-500 bg-emerald-50 text-emerald-900 dark:bg-emerald-950 dark:text-emerald-100"
                            }
                            ToastKind::Error => {
                                "border-red-500 bg-red-50 text-red-900 dark:bg-red-950 dark:text-red-100"
                            }
                        };
                        view! {
                            <div class=format!(
                                "px-4 py-3 rounded-md border shadow-lg text-sm {tone}",
                            )>{toast.message}</div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
