//! Labelled inputs with live validity borders. `on_focus` lets the owning form
//! clear its status message as soon as the user returns to a field.

use super::Button;
use crate::{
    app_lib::{ButtonVariant, Theme},
    features::auth::validation::FieldValidity,
};
use leptos::prelude::*;

#[component]
pub fn TextInput(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    value: RwSignal<String>,
    #[prop(optional, into, default = Signal::from(FieldValidity::Untouched))] validity: Signal<
        FieldValidity,
    >,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(into)] on_focus: Callback<()>,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=Theme::INPUT
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or_default()
                required
                prop:value=move || value.get()
                style:border-color=move || validity.get().border_color().unwrap_or_default()
                on:input=move |event| value.set(event_target_value(&event))
                on:focus=move |_| on_focus.run(())
                on:blur=move |_| {
                    if let Some(on_blur) = on_blur {
                        on_blur.run(());
                    }
                }
            />
        </div>
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    id: &'static str,
    label: &'static str,
    autocomplete: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into, default = Signal::from(FieldValidity::Untouched))] validity: Signal<
        FieldValidity,
    >,
    #[prop(into)] on_focus: Callback<()>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div>
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class=Theme::INPUT
                    autocomplete=autocomplete
                    required
                    prop:value=move || value.get()
                    style:border-color=move || validity.get().border_color().unwrap_or_default()
                    on:input=move |event| value.set(event_target_value(&event))
                    on:focus=move |_| on_focus.run(())
                />
                <Button
                    variant=ButtonVariant::Inline
                    {..}
                    aria-label=move || {
                        if visible.get() { "Ocultar contraseña" } else { "Mostrar contraseña" }
                    }
                    on:click=move |_| visible.update(|shown| *shown = !*shown)
                >
                    {move || if visible.get() { "🙈" } else { "👁️" }}
                </Button>
            </div>
        </div>
    }
}
