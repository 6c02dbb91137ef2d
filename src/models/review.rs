// src/models/review.rs
use serde::{Deserialize, Serialize};

/// A review record as returned by the Review API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,         // Owner of the review, used for edit/delete affordances only
    pub title: String,        // Book title
    pub author: String,       // Book author
    pub rating: u8,           // 1-5
    pub review_text: String,
    pub created_at: String,   // Server timestamp, e.g. "2024-03-09 14:02:11"
    pub username: String,     // Reviewer display name
}

impl Review {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Body of `POST /reviews/`.
///
/// `rating` is `None` when the form value has no leading integer; it is
/// still sent (as `null`) so the server can reject it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub title: String,
    pub author: String,
    pub rating: Option<i64>,
    pub review_text: String,
}

/// Body of `PUT /reviews/{id}/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewUpdate {
    pub review_text: String,
}

/// Coerces a rating form value into an integer the way a browser `parseInt`
/// does: surrounding whitespace is ignored, an optional sign is accepted and
/// only the leading run of digits counts ("4", " 4 ", "4.5" and "4 stars" all
/// give 4).
pub fn coerce_rating(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: i64 = unsigned[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_rating_like_parse_int() {
        assert_eq!(coerce_rating("4"), Some(4));
        assert_eq!(coerce_rating(" 5 "), Some(5));
        assert_eq!(coerce_rating("3.9"), Some(3));
        assert_eq!(coerce_rating("2 stars"), Some(2));
        assert_eq!(coerce_rating("-1"), Some(-1));
        assert_eq!(coerce_rating(""), None);
        assert_eq!(coerce_rating("four"), None);
        assert_eq!(coerce_rating("-"), None);
    }

    #[test]
    fn new_review_sends_rating_as_integer() {
        let body = NewReview {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            rating: coerce_rating("4"),
            review_text: "Spice.".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["rating"], serde_json::json!(4));
        assert!(json["rating"].is_i64());
        assert_eq!(json["review_text"], "Spice.");
    }

    #[test]
    fn unparsable_rating_is_sent_as_null() {
        let body = NewReview {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            rating: coerce_rating(""),
            review_text: "Spice.".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["rating"].is_null());
    }

    #[test]
    fn decodes_server_review() {
        let raw = r#"{
            "id": 7, "user_id": 2, "title": "The Hobbit", "author": "J.R.R. Tolkien",
            "rating": 5, "review_text": "There and back again.",
            "created_at": "2024-03-09 14:02:11", "username": "bilbo"
        }"#;
        let review: Review = serde_json::from_str(raw).unwrap();
        assert_eq!(review.id, 7);
        assert!(review.is_owned_by(2));
        assert!(!review.is_owned_by(3));
    }
}
