//! Status element for one form. Messages must be safe to render and never
//! include passwords.

use crate::features::auth::status::StatusMessage;
use leptos::prelude::*;

/// Renders the current status message, hidden when there is none.
#[component]
pub fn StatusBanner(
    id: &'static str,
    #[prop(into)] status: Signal<Option<StatusMessage>>,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="mt-4 text-sm"
            role="status"
            aria-live="polite"
            style:display=move || if status.with(Option::is_some) { "block" } else { "none" }
            style:color=move || status.with(|message| message.as_ref().map_or("inherit", StatusMessage::color))
        >
            {move || status.get().map(|message| message.text).unwrap_or_default()}
        </div>
    }
}
