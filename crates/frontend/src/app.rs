use crate::routes::routes::AppRoutes;
use crate::shared::navigator::Navigator;
use crate::shared::notifier::{NotificationStack, Notifier};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сервисы уровня приложения: URL и всплывающие уведомления
    provide_context(Navigator::new());
    provide_context(Notifier::new());

    view! {
        <AppRoutes />
        <NotificationStack />
    }
}
