use crate::models::review::{coerce_rating, Review};

/// Search and rating constraints taken from the filter inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Matched case-insensitively against title or author.
    pub search_term: String,
    /// `None` means any rating.
    pub rating: Option<i64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.rating.is_none()
    }

    pub fn matches(&self, review: &Review) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = review.title.to_lowercase().contains(&needle)
            || review.author.to_lowercase().contains(&needle);
        let matches_rating = self
            .rating
            .map_or(true, |rating| i64::from(review.rating) == rating);
        matches_search && matches_rating
    }
}

/// Reads the rating `<select>` value. The "All Ratings" option has an empty
/// value; anything without a leading integer is also treated as "any".
pub fn parse_rating_filter(raw: &str) -> Option<i64> {
    if raw.trim().is_empty() {
        return None;
    }
    coerce_rating(raw)
}

/// Reviews from `reviews` matching `criteria`, in their original order.
pub fn filter_reviews(reviews: &[Review], criteria: &FilterCriteria) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| criteria.matches(review))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, title: &str, author: &str, rating: u8) -> Review {
        Review {
            id,
            user_id: 1,
            title: title.into(),
            author: author.into(),
            rating,
            review_text: String::new(),
            created_at: "2024-01-01 00:00:00".into(),
            username: "reader".into(),
        }
    }

    fn shelf() -> Vec<Review> {
        vec![
            review(1, "Dune", "Frank Herbert", 5),
            review(2, "The Left Hand of Darkness", "Ursula K. Le Guin", 4),
            review(3, "Children of Dune", "Frank Herbert", 3),
            review(4, "A Wizard of Earthsea", "Ursula K. Le Guin", 5),
        ]
    }

    fn ids(reviews: &[Review]) -> Vec<i64> {
        reviews.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_criteria_keeps_everything_in_order() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(filter_reviews(&shelf(), &criteria), shelf());
    }

    #[test]
    fn search_is_case_insensitive_over_title_or_author() {
        let by_title = FilterCriteria { search_term: "dUnE".into(), rating: None };
        assert_eq!(ids(&filter_reviews(&shelf(), &by_title)), vec![1, 3]);

        let by_author = FilterCriteria { search_term: "le guin".into(), rating: None };
        assert_eq!(ids(&filter_reviews(&shelf(), &by_author)), vec![2, 4]);
    }

    #[test]
    fn rating_is_an_exact_match_combined_with_search() {
        let five_stars = FilterCriteria { search_term: String::new(), rating: Some(5) };
        assert_eq!(ids(&filter_reviews(&shelf(), &five_stars)), vec![1, 4]);

        let herbert_five = FilterCriteria { search_term: "herbert".into(), rating: Some(5) };
        assert_eq!(ids(&filter_reviews(&shelf(), &herbert_five)), vec![1]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let criteria = FilterCriteria { search_term: "Hobbit".into(), rating: None };
        assert!(filter_reviews(&shelf(), &criteria).is_empty());
    }

    #[test]
    fn rating_select_values() {
        assert_eq!(parse_rating_filter(""), None);
        assert_eq!(parse_rating_filter("3"), Some(3));
        assert_eq!(parse_rating_filter("any"), None);
    }
}
