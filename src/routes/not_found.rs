//! Minimal 404 page for unknown routes.

use crate::components::AuthLayout;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthLayout>
            <div class="flex flex-col items-center text-center space-y-4">
                <h2 class="text-6xl font-black text-slate-200 select-none">"404"</h2>
                <p class="text-sm text-slate-500">"La página que buscas no existe."</p>
                <A href="/login" {..} class="text-sm font-medium text-red-700 hover:underline">
                    "Volver al inicio de sesión"
                </A>
            </div>
        </AuthLayout>
    }
}
