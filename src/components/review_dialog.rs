use leptos::ev::{Event, MouseEvent};
use leptos::*;

use crate::app::{dispatch, use_client_state, use_controller};
use crate::state::{Dialog, DialogOutcome};

#[derive(Debug, Clone, Copy, PartialEq)]
enum OpenDialog {
    Edit,
    ConfirmDelete,
}

/// Modal for editing a review's text or confirming a delete.
#[component]
pub fn ReviewDialog() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();

    // Only re-render when a dialog opens or closes, not on every keystroke.
    let open = create_memo(move |_| {
        state.with(|s| match s.dialog {
            Some(Dialog::EditReview { .. }) => Some(OpenDialog::Edit),
            Some(Dialog::ConfirmDelete { .. }) => Some(OpenDialog::ConfirmDelete),
            None => None,
        })
    });
    let edit_text = move || {
        state.with(|s| match &s.dialog {
            Some(Dialog::EditReview { text, .. }) => text.clone(),
            _ => String::new(),
        })
    };

    let confirm = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            dispatch(&controller, |c| async move {
                c.resolve_dialog(DialogOutcome::Confirmed).await;
            });
        }
    };
    let cancel = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            dispatch(&controller, |c| async move {
                c.resolve_dialog(DialogOutcome::Cancelled).await;
            });
        }
    };
    let on_text = move |ev: Event| controller.set_dialog_text(event_target_value(&ev));

    move || {
        open.get().map(|dialog| {
            let body = match dialog {
                OpenDialog::Edit => view! {
                    <h3>"Edit your review:"</h3>
                    <textarea
                        id="editReviewText"
                        prop:value=edit_text
                        on:input=on_text.clone()
                    ></textarea>
                }
                .into_view(),
                OpenDialog::ConfirmDelete => view! {
                    <p>"Are you sure you want to delete this review?"</p>
                }
                .into_view(),
            };
            let confirm_label = match dialog {
                OpenDialog::Edit => "Save",
                OpenDialog::ConfirmDelete => "Delete",
            };
            view! {
                <div class="modal-backdrop">
                    <div class="modal" role="dialog" aria-modal="true">
                        {body}
                        <div class="modal-actions">
                            <button id="dialogConfirm" class="btn-primary" on:click=confirm.clone()>
                                {confirm_label}
                            </button>
                            <button id="dialogCancel" class="btn-secondary" on:click=cancel.clone()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
