use crate::app_lib::build_info::git_commit_hash;
use leptos::prelude::*;

/// Centered card with the portal header used by the public auth pages.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-slate-50 px-6 py-10">
            <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8">
                <div class="mb-6 space-y-1 text-center">
                    <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-red-700">
                        "INACAP"
                    </p>
                    <h1 class="text-2xl font-semibold text-slate-900">"Portal académico"</h1>
                </div>
                {children()}
            </div>
            <p class="mt-4 text-xs text-slate-400">{format!("build {}", git_commit_hash())}</p>
        </div>
    }
}
