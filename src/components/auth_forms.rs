//! Login and registration forms. Only one is visible at a time, and neither
//! once a session is active.
use leptos::ev::{Event, MouseEvent, SubmitEvent};
use leptos::*;

use crate::app::{dispatch, use_client_state, use_controller};
use crate::state::{AuthForm, View};

#[component]
pub fn AuthSection() -> impl IntoView {
    let state = use_client_state();
    let hidden = move || state.with(|s| s.view == View::Authenticated);

    view! {
        <section
            id="authSection"
            class="auth-section"
            style:display=move || if hidden() { "none" } else { "flex" }
        >
            <LoginForm/>
            <RegisterForm/>
        </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();
    let visible = move || state.with(|s| s.view == View::Unauthenticated(AuthForm::Login));

    let on_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            dispatch(&controller, |c| async move {
                c.submit_login().await;
            });
        }
    };
    let on_email = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.login.email = value);
        }
    };
    let on_password = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.login.password = value);
        }
    };
    let show_register = move |ev: MouseEvent| {
        ev.prevent_default();
        controller.show_auth_form(AuthForm::Register);
    };

    view! {
        <div
            id="loginForm"
            class="form-container"
            style:display=move || if visible() { "block" } else { "none" }
        >
            <h2>"Login"</h2>
            <form id="loginFormElement" on:submit=on_submit>
                <input
                    type="email"
                    id="loginEmail"
                    placeholder="Email"
                    required=true
                    prop:value=move || state.with(|s| s.forms.login.email.clone())
                    on:input=on_email
                />
                <input
                    type="password"
                    id="loginPassword"
                    placeholder="Password"
                    required=true
                    prop:value=move || state.with(|s| s.forms.login.password.clone())
                    on:input=on_password
                />
                <button type="submit" class="btn-primary">"Login"</button>
            </form>
            <p class="form-switch">
                "Don't have an account? "
                <a href="#" id="showRegister" on:click=show_register>"Register here"</a>
            </p>
        </div>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();
    let visible = move || state.with(|s| s.view == View::Unauthenticated(AuthForm::Register));

    let on_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            dispatch(&controller, |c| async move {
                c.submit_register().await;
            });
        }
    };
    let on_username = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.register.username = value);
        }
    };
    let on_email = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.register.email = value);
        }
    };
    let on_password = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.register.password = value);
        }
    };
    let show_login = move |ev: MouseEvent| {
        ev.prevent_default();
        controller.show_auth_form(AuthForm::Login);
    };

    view! {
        <div
            id="registerForm"
            class="form-container"
            style:display=move || if visible() { "block" } else { "none" }
        >
            <h2>"Register"</h2>
            <form id="registerFormElement" on:submit=on_submit>
                <input
                    type="text"
                    id="registerUsername"
                    placeholder="Username"
                    required=true
                    prop:value=move || state.with(|s| s.forms.register.username.clone())
                    on:input=on_username
                />
                <input
                    type="email"
                    id="registerEmail"
                    placeholder="Email"
                    required=true
                    prop:value=move || state.with(|s| s.forms.register.email.clone())
                    on:input=on_email
                />
                <input
                    type="password"
                    id="registerPassword"
                    placeholder="Password"
                    required=true
                    prop:value=move || state.with(|s| s.forms.register.password.clone())
                    on:input=on_password
                />
                <button type="submit" class="btn-primary">"Register"</button>
            </form>
            <p class="form-switch">
                "Already have an account? "
                <a href="#" id="showLogin" on:click=show_login>"Login here"</a>
            </p>
        </div>
    }
}
