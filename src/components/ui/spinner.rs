use leptos::prelude::*;

/// Loading affordance shown while a submission is in flight.
#[component]
pub fn Spinner(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loading-state"
            class="mt-4 flex justify-center"
            class:show=move || visible.get()
            style:display=move || if visible.get() { "flex" } else { "none" }
        >
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-red-200 border-t-red-700"
                role="status"
                aria-label="Cargando"
            ></div>
        </div>
    }
}
