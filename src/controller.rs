//! The client controller: session handling, review CRUD and list filtering.
//!
//! All state lives in a [`ClientState`] owned by the controller. Every change
//! is published to the subscribers as a fresh snapshot, which is how the view
//! layer learns it has to re-render. The state is never borrowed across an
//! `.await`, so overlapping requests are fine: whichever resolves last wins.
use std::cell::RefCell;

use leptos::logging::{log, warn};
use uuid::Uuid;

use crate::api::ReviewApi;
use crate::filter::parse_rating_filter;
use crate::models::review::{coerce_rating, NewReview, ReviewUpdate};
use crate::models::user::{LoginRequest, RegisterRequest, Session};
use crate::state::{AuthForm, ClientState, Dialog, DialogOutcome, Forms, Toast};
use crate::storage::{clear_session, load_session, persist_session, KeyValueStore};

pub const CONNECTION_ERROR: &str = "Error connecting to server";

type Subscriber = Box<dyn Fn(&ClientState)>;

pub struct Controller<A, S> {
    api: A,
    storage: S,
    state: RefCell<ClientState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<A: ReviewApi, S: KeyValueStore> Controller<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            state: RefCell::new(ClientState::default()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Registers `f` to receive every new state snapshot.
    pub fn subscribe(&self, f: impl Fn(&ClientState) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(f));
    }

    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.borrow_mut();
            let result = f(&mut state);
            (result, state.clone())
        };
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&snapshot);
        }
        result
    }

    fn read<R>(&self, f: impl FnOnce(&ClientState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn token(&self) -> Option<String> {
        self.read(|state| state.token().map(str::to_string))
    }

    fn session(&self) -> Option<Session> {
        self.read(|state| state.session.clone())
    }

    fn fail(&self, message: String) {
        self.update(|state| state.notify(Toast::error(message)));
    }

    // Session

    /// Picks up a session persisted by an earlier visit and loads the list.
    /// Returns whether a session was found.
    pub async fn restore_session(&self) -> bool {
        let Some(session) = load_session(&self.storage) else {
            return false;
        };
        log!("[SESSION] Restored session for {}", session.username());
        self.update(|state| state.activate(session));
        self.load_reviews().await;
        true
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        match self.api.login(&request).await {
            Ok(response) => {
                let session = Session { token: response.token, user: response.user };
                if let Err(err) = persist_session(&self.storage, &session) {
                    warn!("[SESSION] Could not persist session: {}", err);
                }
                log!("[SESSION] Logged in as {}", session.username());
                self.update(|state| {
                    state.notify(Toast::success("Login successful!"));
                    state.activate(session);
                });
                self.load_reviews().await;
                true
            }
            Err(err) => {
                self.fail(err.describe("Login failed", CONNECTION_ERROR));
                false
            }
        }
    }

    /// Logs in with the login form and clears it on success.
    pub async fn submit_login(&self) -> bool {
        let form = self.read(|state| state.forms.login.clone());
        let ok = self.login(&form.email, &form.password).await;
        if ok {
            self.update(|state| state.forms.login = Default::default());
        }
        ok
    }

    /// Creates an account. Does not log in; on success the login form is shown.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> bool {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.api.register(&request).await {
            Ok(()) => {
                self.update(|state| {
                    state.notify(Toast::success("Registration successful! Please login."));
                    state.show_auth_form(AuthForm::Login);
                });
                true
            }
            Err(err) => {
                self.fail(err.describe("Registration failed", CONNECTION_ERROR));
                false
            }
        }
    }

    pub async fn submit_register(&self) -> bool {
        let form = self.read(|state| state.forms.register.clone());
        let ok = self.register(&form.username, &form.email, &form.password).await;
        if ok {
            self.update(|state| state.forms.register = Default::default());
        }
        ok
    }

    pub fn logout(&self) {
        clear_session(&self.storage);
        log!("[SESSION] Logged out");
        self.update(|state| {
            state.deactivate();
            state.notify(Toast::success("Logged out successfully!"));
        });
    }

    // View

    pub fn show_auth_form(&self, form: AuthForm) {
        self.update(|state| state.show_auth_form(form));
    }

    pub fn edit_forms(&self, f: impl FnOnce(&mut Forms)) {
        self.update(|state| f(&mut state.forms));
    }

    pub fn dismiss_toast(&self, id: Uuid) {
        self.update(|state| state.dismiss_toast(id));
    }

    pub async fn show_home(&self) {
        self.load_reviews().await;
    }

    pub async fn show_my_reviews(&self) {
        if let Some(session) = self.session() {
            self.load_my_reviews(session.user_id()).await;
        }
    }

    // Reviews

    /// Fetches every review, replaces the cache and shows the full list.
    pub async fn load_reviews(&self) {
        let Some(token) = self.token() else {
            return;
        };
        match self.api.list_reviews(&token).await {
            Ok(reviews) => {
                log!("[REVIEWS] Loaded {} reviews", reviews.len());
                self.update(|state| {
                    if state.token() == Some(token.as_str()) {
                        state.replace_reviews(reviews);
                    }
                });
            }
            Err(err) => self.fail(err.describe("Error loading reviews", "Error loading reviews")),
        }
    }

    /// Shows only `user_id`'s reviews. The cache keeps the full list.
    pub async fn load_my_reviews(&self, user_id: i64) {
        let Some(token) = self.token() else {
            return;
        };
        match self.api.list_user_reviews(&token, user_id).await {
            Ok(reviews) => {
                log!("[REVIEWS] Loaded {} reviews for user {}", reviews.len(), user_id);
                self.update(|state| {
                    if state.token() == Some(token.as_str()) {
                        state.show_reviews(reviews);
                    }
                });
            }
            Err(err) => self.fail(err.describe("Error loading your reviews", "Error loading your reviews")),
        }
    }

    pub async fn create_review(&self, title: &str, author: &str, rating: &str, review_text: &str) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        let review = NewReview {
            title: title.to_string(),
            author: author.to_string(),
            rating: coerce_rating(rating),
            review_text: review_text.to_string(),
        };
        match self.api.create_review(&token, &review).await {
            Ok(()) => {
                log!("[REVIEWS] Created review \"{}\"", review.title);
                self.update(|state| {
                    state.notify(Toast::success("Review added successfully!"));
                    state.forms.review = Default::default();
                });
                self.load_reviews().await;
                true
            }
            Err(err) => {
                self.fail(err.describe("Failed to add review", CONNECTION_ERROR));
                false
            }
        }
    }

    /// Creates a review from the review form. The form is cleared on success.
    pub async fn submit_review(&self) -> bool {
        let form = self.read(|state| state.forms.review.clone());
        self.create_review(&form.title, &form.author, &form.rating, &form.review_text)
            .await
    }

    /// Replaces a review's text. `None` or empty text aborts without a request.
    pub async fn update_review(&self, id: i64, new_text: Option<String>) -> bool {
        let Some(text) = new_text.filter(|text| !text.is_empty()) else {
            return false;
        };
        let Some(token) = self.token() else {
            return false;
        };
        match self.api.update_review(&token, id, &ReviewUpdate { review_text: text }).await {
            Ok(()) => {
                self.update(|state| state.notify(Toast::success("Review updated successfully!")));
                self.load_reviews().await;
                true
            }
            Err(err) => {
                self.fail(err.describe("Failed to update review", CONNECTION_ERROR));
                false
            }
        }
    }

    /// Deletes a review once the user has confirmed.
    pub async fn delete_review(&self, id: i64, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let Some(token) = self.token() else {
            return false;
        };
        match self.api.delete_review(&token, id).await {
            Ok(()) => {
                self.update(|state| state.notify(Toast::success("Review deleted successfully!")));
                self.load_reviews().await;
                true
            }
            Err(err) => {
                self.fail(err.describe("Failed to delete review", CONNECTION_ERROR));
                false
            }
        }
    }

    // Dialogs

    /// Opens the edit dialog pre-filled with the cached text. Unknown ids are
    /// ignored.
    pub fn begin_edit(&self, id: i64) {
        self.update(|state| {
            let text = state.find_review(id).map(|review| review.review_text.clone());
            if let Some(text) = text {
                state.dialog = Some(Dialog::EditReview { review_id: id, text });
            }
        });
    }

    pub fn request_delete(&self, id: i64) {
        self.update(|state| state.dialog = Some(Dialog::ConfirmDelete { review_id: id }));
    }

    pub fn set_dialog_text(&self, text: String) {
        self.update(|state| {
            if let Some(Dialog::EditReview { text: current, .. }) = state.dialog.as_mut() {
                *current = text;
            }
        });
    }

    /// Closes the open dialog and carries out its action if confirmed.
    pub async fn resolve_dialog(&self, outcome: DialogOutcome) {
        let Some(dialog) = self.update(|state| state.dialog.take()) else {
            return;
        };
        if outcome == DialogOutcome::Cancelled {
            return;
        }
        match dialog {
            Dialog::EditReview { review_id, text } => {
                self.update_review(review_id, Some(text)).await;
            }
            Dialog::ConfirmDelete { review_id } => {
                self.delete_review(review_id, true).await;
            }
        }
    }

    // Filtering

    pub fn set_search_term(&self, term: String) {
        self.update(|state| {
            state.filter.search_term = term;
            state.apply_filter();
        });
    }

    pub fn set_rating_filter(&self, raw: &str) {
        let rating = parse_rating_filter(raw);
        self.update(|state| {
            state.filter.rating = rating;
            state.apply_filter();
        });
    }
}
