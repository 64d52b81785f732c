//! Login and registration page. Both forms share one loading affordance and
//! each owns a status element. Submissions run through the shared coordinator;
//! this module only gathers input and wires signals to the ports.

use crate::{
    app_lib::AppConfig,
    components::{AuthLayout, Button, PasswordInput, Spinner, StatusBanner, TextInput},
    features::auth::{
        browser::{BrowserNavigator, SignalFormView},
        client::HttpAuthTransport,
        status::{FormView, StatusMessage},
        submission::{AuthForm, SubmissionCoordinator},
        tabs::{AuthTab, TabController},
        types::{Credentials, RegistrationRequest},
        validation::{
            FieldValidity, is_institutional_email, is_valid_name, is_valid_password,
            normalize_email, passwords_match,
        },
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::use_location;

/// Shown when the registration email leaves focus without an allowed domain.
const INSTITUTIONAL_HINT: &str = "Usa @inacap.cl, @alumnos.inacap.cl o @profesor.inacap.cl";

/// Renders the tabbed auth page with the tab named by the current path selected.
#[component]
pub fn AuthPage() -> impl IntoView {
    let initial = use_location().pathname.with_untracked(|path| AuthTab::for_path(path));
    let config = StoredValue::new(AppConfig::load());
    let loading = RwSignal::new(false);
    let login_view = SignalFormView::new(loading);
    let register_view = SignalFormView::new(loading);
    let tabs = RwSignal::new(TabController::new(
        initial,
        vec![login_view, register_view],
    ));

    let panel_active = move |tab: AuthTab| tabs.with(|controller| controller.is_active(tab));

    view! {
        <AuthLayout>
            <div class="mb-6 grid grid-cols-2 gap-2" role="tablist">
                {AuthTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                id=tab.id()
                                role="tab"
                                class="auth-tab rounded-lg px-3 py-2 text-sm font-medium text-slate-500"
                                class:active=move || panel_active(tab)
                                class:bg-red-50=move || panel_active(tab)
                                class:text-red-700=move || panel_active(tab)
                                aria-selected=move || panel_active(tab).to_string()
                                aria-controls=tab.panel_id()
                                on:click=move |_| tabs.update(|controller| controller.select(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                id=AuthTab::Login.panel_id()
                class="form-panel"
                class:active=move || panel_active(AuthTab::Login)
                role="tabpanel"
                style:display=move || if panel_active(AuthTab::Login) { "block" } else { "none" }
            >
                <LoginForm form_view=login_view config=config />
            </div>
            <div
                id=AuthTab::Register.panel_id()
                class="form-panel"
                class:active=move || panel_active(AuthTab::Register)
                role="tabpanel"
                style:display=move || if panel_active(AuthTab::Register) { "block" } else { "none" }
            >
                <RegisterForm form_view=register_view config=config />
            </div>

            <Spinner visible=loading />
        </AuthLayout>
    }
}

/// Hands `form` to a coordinator built for this submission.
fn dispatch<F: AuthForm + 'static>(form: F, view: SignalFormView, config: AppConfig) {
    spawn_local(async move {
        let fallback_redirect = config.fallback_redirect.clone();
        let coordinator =
            SubmissionCoordinator::new(HttpAuthTransport::new(config), view, BrowserNavigator)
                .with_fallback_redirect(fallback_redirect);
        coordinator.submit(&form).await;
    });
}

#[component]
fn LoginForm(form_view: SignalFormView, config: StoredValue<AppConfig>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let clear_status = move |_: ()| form_view.hide_status();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        dispatch(form, form_view, config.get_value());
    };

    view! {
        <form id="login-form" class="space-y-4" on:submit=on_submit>
            <TextInput
                id="login-email"
                label="Correo institucional"
                input_type="email"
                autocomplete="email"
                placeholder="nombre@inacap.cl"
                value=email
                on_focus=clear_status
            />
            <PasswordInput
                id="login-password"
                label="Contraseña"
                autocomplete="current-password"
                value=password
                on_focus=clear_status
            />
            <Button button_type="submit" disabled=form_view.loading>
                <span class="btn-text">"Ingresar"</span>
            </Button>
            <StatusBanner id="login-message" status=form_view.status />
        </form>
    }
}

#[component]
fn RegisterForm(form_view: SignalFormView, config: StoredValue<AppConfig>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let name_validity = RwSignal::new(FieldValidity::Untouched);
    let email_validity = RwSignal::new(FieldValidity::Untouched);

    let password_validity = Signal::derive(move || {
        password.with(|value| {
            if value.is_empty() {
                FieldValidity::Untouched
            } else {
                FieldValidity::from_check(is_valid_password(value))
            }
        })
    });
    let confirm_validity = Signal::derive(move || {
        let confirmation = confirm_password.get();
        if confirmation.is_empty() {
            FieldValidity::Untouched
        } else {
            FieldValidity::from_check(password.with(|value| passwords_match(value, &confirmation)))
        }
    });

    let clear_status = move |_: ()| form_view.hide_status();
    let check_name = move |_: ()| {
        name_validity.set(FieldValidity::from_check(name.with(|value| is_valid_name(value))));
    };
    let check_email = move |_: ()| {
        let value = normalize_email(&email.get_untracked());
        if value.is_empty() {
            return;
        }
        let institutional = is_institutional_email(&value);
        email_validity.set(FieldValidity::from_check(institutional));
        if institutional {
            form_view.hide_status();
        } else {
            form_view.show_status(StatusMessage::info(INSTITUTIONAL_HINT));
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = RegistrationRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        dispatch(form, form_view, config.get_value());
    };

    view! {
        <form id="register-form" class="space-y-4" on:submit=on_submit>
            <TextInput
                id="register-name"
                label="Nombre completo"
                autocomplete="name"
                value=name
                validity=name_validity
                on_blur=check_name
                on_focus=clear_status
            />
            <TextInput
                id="register-email"
                label="Correo institucional"
                input_type="email"
                autocomplete="email"
                placeholder="nombre@alumnos.inacap.cl"
                value=email
                validity=email_validity
                on_blur=check_email
                on_focus=clear_status
            />
            <PasswordInput
                id="register-password"
                label="Contraseña"
                autocomplete="new-password"
                value=password
                validity=password_validity
                on_focus=clear_status
            />
            <PasswordInput
                id="register-confirm"
                label="Confirmar contraseña"
                autocomplete="new-password"
                value=confirm_password
                validity=confirm_validity
                on_focus=clear_status
            />
            <Button button_type="submit" disabled=form_view.loading>
                <span class="btn-text">"Crear cuenta"</span>
            </Button>
            <StatusBanner id="register-message" status=form_view.status />
        </form>
    }
}
