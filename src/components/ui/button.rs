use crate::app_lib::ButtonVariant;
use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class=variant.class()
            class:cursor-not-allowed=move || disabled.get()
            style:opacity=move || if disabled.get() { variant.disabled_opacity() } else { "1" }
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
