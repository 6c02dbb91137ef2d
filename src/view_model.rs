//! Maps reviews to what the list renders, independent of the markup.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::models::review::Review;
use crate::models::user::User;

pub const EMPTY_PLACEHOLDER: &str = "No reviews found.";
pub const STAR: &str = "⭐";
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub id: i64,
    pub title: String,
    pub byline: String,
    pub stars: String,
    pub reviewer: String,
    pub reviewed_on: String,
    pub text: String,
    /// Whether edit/delete controls are shown. Display only, the server
    /// decides who may change a review.
    pub owned: bool,
}

impl ReviewCard {
    pub fn from_review(review: &Review, viewer: Option<&User>) -> Self {
        Self {
            id: review.id,
            title: review.title.clone(),
            byline: format!("by {}", review.author),
            stars: star_glyphs(review.rating),
            reviewer: format!("Reviewed by: {}", review.username),
            reviewed_on: format_review_date(&review.created_at),
            text: review.review_text.clone(),
            owned: viewer.is_some_and(|user| review.is_owned_by(user.id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewListView {
    Empty { message: &'static str },
    Cards(Vec<ReviewCard>),
}

pub fn build_list(reviews: &[Review], viewer: Option<&User>) -> ReviewListView {
    if reviews.is_empty() {
        return ReviewListView::Empty { message: EMPTY_PLACEHOLDER };
    }
    ReviewListView::Cards(
        reviews
            .iter()
            .map(|review| ReviewCard::from_review(review, viewer))
            .collect(),
    )
}

pub fn star_glyphs(rating: u8) -> String {
    STAR.repeat(usize::from(rating))
}

/// Formats a server timestamp as `M/D/YYYY`. Accepts RFC 3339, SQLite's
/// `YYYY-MM-DD HH:MM:SS[.fff]` and bare dates.
pub fn format_review_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, user_id: i64, rating: u8) -> Review {
        Review {
            id,
            user_id,
            title: "The Hobbit".into(),
            author: "J.R.R. Tolkien".into(),
            rating,
            review_text: "There and back again.".into(),
            created_at: "2024-03-09 14:02:11".into(),
            username: "bilbo".into(),
        }
    }

    fn viewer(id: i64) -> User {
        User { id, username: "viewer".into(), email: None }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(
            build_list(&[], Some(&viewer(1))),
            ReviewListView::Empty { message: "No reviews found." }
        );
    }

    #[test]
    fn card_carries_display_fields() {
        let card = ReviewCard::from_review(&review(7, 2, 3), None);
        assert_eq!(card.id, 7);
        assert_eq!(card.title, "The Hobbit");
        assert_eq!(card.byline, "by J.R.R. Tolkien");
        assert_eq!(card.stars, "⭐⭐⭐");
        assert_eq!(card.reviewer, "Reviewed by: bilbo");
        assert_eq!(card.reviewed_on, "3/9/2024");
        assert_eq!(card.text, "There and back again.");
    }

    #[test]
    fn controls_only_for_the_owner() {
        let reviews = vec![review(1, 1, 5), review(2, 2, 4)];
        let ReviewListView::Cards(cards) = build_list(&reviews, Some(&viewer(2))) else {
            panic!("expected cards");
        };
        assert!(!cards[0].owned);
        assert!(cards[1].owned);

        let ReviewListView::Cards(anonymous) = build_list(&reviews, None) else {
            panic!("expected cards");
        };
        assert!(anonymous.iter().all(|card| !card.owned));
    }

    #[test]
    fn one_star_per_rating_point() {
        assert_eq!(star_glyphs(0), "");
        assert_eq!(star_glyphs(1).chars().count(), 1);
        assert_eq!(star_glyphs(5), STAR.repeat(5));
    }

    #[test]
    fn dates_in_server_formats() {
        assert_eq!(format_review_date("2023-12-25 08:00:00"), "12/25/2023");
        assert_eq!(format_review_date("2023-12-25 08:00:00.123"), "12/25/2023");
        assert_eq!(format_review_date("2023-01-05T10:11:12"), "1/5/2023");
        assert_eq!(format_review_date("2023-01-05"), "1/5/2023");
        assert_eq!(format_review_date("yesterday"), "Invalid Date");
    }

    #[test]
    fn offset_timestamps_use_the_local_date() {
        // Late on the 5th in UTC-10 is already the 6th in UTC.
        let raw = "2023-01-05T23:30:00-10:00";
        let local = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Local);
        assert_eq!(format_review_date(raw), local.format("%-m/%-d/%Y").to_string());
    }
}
