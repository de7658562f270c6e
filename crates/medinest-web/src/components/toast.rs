//! Toast notification system

use leptos::prelude::*;
use medinest_core::ToastPosition;
use std::time::Duration;

/// Toast notification type (determines styling)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

impl ToastType {
    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "ℹ️",
            ToastType::Success => "✅",
            ToastType::Error => "❌",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastType::Info => "toast-info",
            ToastType::Success => "toast-success",
            ToastType::Error => "toast-error",
        }
    }
}

/// Single toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
    pub auto_dismiss_ms: Option<u64>,
}

impl Toast {
    pub fn new(id: usize, message: String, toast_type: ToastType) -> Self {
        let auto_dismiss_ms = match toast_type {
            ToastType::Error => 5000, // Errors stay longer
            _ => 3000,
        };
        Self {
            id,
            message,
            toast_type,
            auto_dismiss_ms: Some(auto_dismiss_ms),
        }
    }
}

/// Toast context for managing global toast state
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<usize>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Add a toast notification
    pub fn show(&self, message: impl Into<String>, toast_type: ToastType) {
        let id = self.next_id.get_untracked();
        self.next_id.update(|n| *n += 1);

        let toast = Toast::new(id, message.into(), toast_type);
        let auto_dismiss_ms = toast.auto_dismiss_ms;

        self.toasts.update(|toasts| toasts.push(toast));

        if let Some(ms) = auto_dismiss_ms {
            let toasts = self.toasts;
            set_timeout(
                move || {
                    toasts.update(|toasts| toasts.retain(|t| t.id != id));
                },
                Duration::from_millis(ms),
            );
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastType::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastType::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastType::Error);
    }

    /// Manually dismiss a toast
    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast provider component (wraps app root)
#[component]
pub fn ToastProvider(
    /// Corner the stack is anchored to
    #[prop(optional)]
    position: ToastPosition,
    children: Children,
) -> impl IntoView {
    provide_context(ToastContext::new());

    view! {
        {children()}
        <ToastContainer position />
    }
}

/// Renders all active toasts
#[component]
pub fn ToastContainer(position: ToastPosition) -> impl IntoView {
    let toast_context = expect_context::<ToastContext>();

    view! {
        <div class=format!("toast-container {}", position.class()) role="status" aria-live="polite">
            <For
                each=move || toast_context.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <ToastItem toast=toast /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toast_context = expect_context::<ToastContext>();
    let id = toast.id;
    let icon = toast.toast_type.icon();
    let class = toast.toast_type.class();

    view! {
        <div class=format!("toast {}", class)>
            <div class="toast-content">
                <span class="toast-icon">{icon}</span>
                <span class="toast-message">{toast.message}</span>
            </div>
            <button
                class="toast-close"
                on:click=move |_| toast_context.dismiss(id)
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

/// Hook to access toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_linger() {
        let info = Toast::new(0, "Saved".to_string(), ToastType::Success);
        let error = Toast::new(1, "Failed".to_string(), ToastType::Error);

        assert_eq!(info.auto_dismiss_ms, Some(3000));
        assert_eq!(error.auto_dismiss_ms, Some(5000));
        assert_eq!(error.toast_type.class(), "toast-error");
    }
}
