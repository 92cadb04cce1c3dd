use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Outcome message shown above a form or list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// Dismissable notice bound to a signal; success notices close themselves
#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    Effect::new(move |_| {
        let shown = notice.get();
        if let Some(shown) = shown.filter(|n| n.kind == NoticeKind::Success) {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                // Only clear if nothing newer replaced it meanwhile.
                if notice.get_untracked().as_ref() == Some(&shown) {
                    notice.set(None);
                }
            });
        }
    });

    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.class() role="status">
                    <span class="notice__text">{n.text.clone()}</span>
                    <button
                        type="button"
                        class="notice__close"
                        aria-label="Close"
                        on:click=move |_| notice.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
