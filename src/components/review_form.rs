use leptos::ev::{Event, SubmitEvent};
use leptos::*;

use crate::app::{dispatch, use_client_state, use_controller};

const RATING_CHOICES: [(&str, &str); 5] = [
    ("5", "5 - Excellent"),
    ("4", "4 - Very Good"),
    ("3", "3 - Good"),
    ("2", "2 - Fair"),
    ("1", "1 - Poor"),
];

#[component]
pub fn ReviewForm() -> impl IntoView {
    let state = use_client_state();
    let controller = use_controller();

    let handle_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            dispatch(&controller, |c| async move {
                c.submit_review().await;
            });
        }
    };
    let on_title = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.review.title = value);
        }
    };
    let on_author = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.review.author = value);
        }
    };
    let on_rating = {
        let controller = controller.clone();
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.edit_forms(|forms| forms.review.rating = value);
        }
    };
    let on_text = move |ev: Event| {
        let value = event_target_value(&ev);
        controller.edit_forms(|forms| forms.review.review_text = value);
    };

    let rating_options = RATING_CHOICES
        .iter()
        .map(|&(value, label)| {
            view! {
                <option
                    value=value
                    prop:selected=move || state.with(|s| s.forms.review.rating == value)
                >
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="add-review-section">
            <h2>"Add a Book Review"</h2>
            <form id="addReviewForm" on:submit=handle_submit>
                <input
                    type="text"
                    id="bookTitle"
                    placeholder="Book Title"
                    required=true
                    prop:value=move || state.with(|s| s.forms.review.title.clone())
                    on:input=on_title
                />
                <input
                    type="text"
                    id="bookAuthor"
                    placeholder="Author"
                    required=true
                    prop:value=move || state.with(|s| s.forms.review.author.clone())
                    on:input=on_author
                />
                <select id="bookRating" required=true on:change=on_rating>
                    {rating_options}
                </select>
                <textarea
                    id="bookReview"
                    placeholder="Write your review..."
                    required=true
                    prop:value=move || state.with(|s| s.forms.review.review_text.clone())
                    on:input=on_text
                ></textarea>
                <button type="submit" class="btn-primary">"Submit Review"</button>
            </form>
        </div>
    }
}
