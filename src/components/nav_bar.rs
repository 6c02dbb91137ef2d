use leptos::ev::MouseEvent;
use leptos::*;

use crate::app::{dispatch, use_client_state, use_controller};
use crate::state::AuthForm;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();

    let authenticated = move || state.with(|s| s.is_authenticated());
    let guest_only = move || if authenticated() { "none" } else { "inline" };
    let members_only = move || if authenticated() { "inline" } else { "none" };

    let on_login = {
        let controller = controller.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            controller.show_auth_form(AuthForm::Login);
        }
    };
    let on_register = {
        let controller = controller.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            controller.show_auth_form(AuthForm::Register);
        }
    };
    let on_logout = {
        let controller = controller.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            controller.logout();
        }
    };
    let on_home = {
        let controller = controller.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            dispatch(&controller, |c| async move { c.show_home().await });
        }
    };
    let on_my_reviews = move |ev: MouseEvent| {
        ev.prevent_default();
        dispatch(&controller, |c| async move { c.show_my_reviews().await });
    };

    view! {
        <nav class="navbar">
            <div class="nav-brand">"📚 Book Reviews"</div>
            <div class="nav-links">
                <a href="#" id="homeLink" style:display=members_only on:click=on_home>"Home"</a>
                <a href="#" id="myReviewsLink" style:display=members_only on:click=on_my_reviews>"My Reviews"</a>
                <a href="#" id="loginLink" style:display=guest_only on:click=on_login>"Login"</a>
                <a href="#" id="registerLink" style:display=guest_only on:click=on_register>"Register"</a>
                <a href="#" id="logoutLink" style:display=members_only on:click=on_logout>"Logout"</a>
            </div>
        </nav>
    }
}
