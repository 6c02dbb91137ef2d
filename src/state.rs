//! Everything the page shows, owned by the controller and published to the
//! view layer as snapshots.
use uuid::Uuid;

use crate::filter::{filter_reviews, FilterCriteria};
use crate::models::review::Review;
use crate::models::user::Session;

/// Which sub-form the auth section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Unauthenticated(AuthForm),
    Authenticated,
}

impl Default for View {
    fn default() -> Self {
        View::Unauthenticated(AuthForm::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub title: String,
    pub author: String,
    /// Raw `<select>` value, coerced to an integer on submit.
    pub rating: String,
    pub review_text: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            rating: "5".to_string(),
            review_text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forms {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub review: ReviewForm,
}

/// A modal waiting for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    EditReview { review_id: i64, text: String },
    ConfirmDelete { review_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), message: message.into(), kind: ToastKind::Error }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub session: Option<Session>,
    pub view: View,
    /// Last full list fetched. Only ever replaced as a whole.
    pub all_reviews: Vec<Review>,
    /// What the list currently shows.
    pub shown: Vec<Review>,
    pub filter: FilterCriteria,
    pub forms: Forms,
    pub dialog: Option<Dialog>,
    pub toast: Option<Toast>,
}

impl ClientState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    pub fn activate(&mut self, session: Session) {
        self.session = Some(session);
        self.view = View::Authenticated;
    }

    /// Drops the session and everything fetched with it. The auth sub-form
    /// shown before login is kept.
    pub fn deactivate(&mut self) {
        self.session = None;
        self.all_reviews.clear();
        self.shown.clear();
        self.dialog = None;
        if self.view == View::Authenticated {
            self.view = View::default();
        }
    }

    pub fn show_auth_form(&mut self, form: AuthForm) {
        if let View::Unauthenticated(current) = &mut self.view {
            *current = form;
        }
    }

    pub fn replace_reviews(&mut self, reviews: Vec<Review>) {
        self.shown = reviews.clone();
        self.all_reviews = reviews;
    }

    pub fn show_reviews(&mut self, reviews: Vec<Review>) {
        self.shown = reviews;
    }

    /// Recomputes the shown list from the full cache.
    pub fn apply_filter(&mut self) {
        self.shown = filter_reviews(&self.all_reviews, &self.filter);
    }

    pub fn find_review(&self, id: i64) -> Option<&Review> {
        self.all_reviews.iter().find(|review| review.id == id)
    }

    pub fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Clears the toast if it is still the one identified by `id`.
    pub fn dismiss_toast(&mut self, id: Uuid) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }
}
