use leptos::ev::MouseEvent;
use leptos::*;

use crate::app::{use_client_state, use_controller};
use crate::view_model::{build_list, ReviewCard, ReviewListView};

#[component]
pub fn ReviewsList() -> impl IntoView {
    let state = use_client_state();
    let listing = create_memo(move |_| {
        state.with(|s| build_list(&s.shown, s.session.as_ref().map(|session| &session.user)))
    });

    view! {
        <div id="reviewsList" class="reviews-list">
            {move || match listing.get() {
                ReviewListView::Empty { message } => {
                    view! { <p class="empty-message">{message}</p> }.into_view()
                }
                ReviewListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ReviewEntry card=card/> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ReviewEntry(card: ReviewCard) -> impl IntoView {
    let controller = use_controller();
    let id = card.id;

    let actions = card.owned.then(|| {
        let on_edit = {
            let controller = controller.clone();
            move |_: MouseEvent| controller.begin_edit(id)
        };
        let on_delete = move |_: MouseEvent| controller.request_delete(id);
        view! {
            <div class="review-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
            </div>
        }
    });

    view! {
        <div class="review-card">
            <div class="review-header">
                <div>
                    <div class="review-title">{card.title}</div>
                    <div class="review-author">{card.byline}</div>
                </div>
                <div class="review-rating">{card.stars}</div>
            </div>
            <div class="review-meta">
                <span>{card.reviewer}</span>
                <span>{card.reviewed_on}</span>
            </div>
            <div class="review-text">{card.text}</div>
            {actions}
        </div>
    }
}
