use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub movie_title: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

/// Per-field messages for a rejected edit submission.
#[derive(Debug, Default)]
pub struct EditErrors {
    pub rating: Option<&'static str>,
    pub review: Option<&'static str>,
}

pub fn validate_title(raw: &str) -> Result<String, &'static str> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    Ok(title.to_string())
}

pub fn validate_rating(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Rating is required");
    }
    raw.parse().map_err(|_| "Rating must be a number, e.g. 7.5")
}

pub fn validate_review(raw: &str) -> Result<String, &'static str> {
    let review = raw.trim();
    if review.is_empty() {
        return Err("Review is required");
    }
    Ok(review.to_string())
}
