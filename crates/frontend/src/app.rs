use crate::usecases::u101_compose_reply::ComposeReplyPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ComposeReplyPage />
        </ConfigProvider>
    }
}
