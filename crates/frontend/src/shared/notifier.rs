use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Сколько висит уведомление, мс
const AUTO_HIDE_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Error,
}

impl NotificationStatus {
    fn class(&self) -> &'static str {
        match self {
            NotificationStatus::Success => "notification notification--success",
            NotificationStatus::Error => "notification notification--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub status: NotificationStatus,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            status: NotificationStatus::Error,
            text: text.into(),
        }
    }
}

/// Сервис всплывающих уведомлений (toasts)
#[derive(Clone, Copy)]
pub struct Notifier {
    items: RwSignal<Vec<(u64, Notification)>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push((id, notification)));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_HIDE_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|(item_id, _)| *item_id != id));
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not found")
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifier.items.get()
                key=|(id, _)| *id
                children=move |(id, notification)| {
                    view! {
                        <div class=notification.status.class() on:click=move |_| notifier.dismiss(id)>
                            <span class="notification__text">{notification.text.clone()}</span>
                            <span class="notification__close">{icon("x")}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
