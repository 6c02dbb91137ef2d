use leptos::*;

use crate::app::{dispatch, use_client_state, use_controller};
use crate::config::ClientConfig;

/// Transient notification. Each new toast is dismissed after the configured
/// duration unless another one has replaced it by then.
#[component]
pub fn MessageToast() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();
    let delay = expect_context::<ClientConfig>().toast_duration;

    let toast = create_memo(move |_| state.with(|s| s.toast.clone()));

    create_effect(move |_| {
        if let Some(toast) = toast.get() {
            let id = toast.id;
            dispatch(&controller, move |c| async move {
                gloo_timers::future::sleep(delay).await;
                c.dismiss_toast(id);
            });
        }
    });

    view! {
        <div
            id="messageToast"
            class=move || match toast.get() {
                Some(toast) => format!("message-toast show {}", toast.kind.class()),
                None => "message-toast".to_string(),
            }
        >
            {move || toast.get().map(|toast| toast.message).unwrap_or_default()}
        </div>
    }
}
