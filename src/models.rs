/// A search hit from the catalog, carrying just enough to let the user
/// pick the right movie. Rating, synopsis and artwork are only fetched
/// once a candidate is chosen.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieCandidate {
    pub id: i32,
    pub title: String,
    // raw release-date string from the catalog, may be empty
    pub year: String,
}

/// Full metadata for a chosen movie, as returned by the catalog's
/// details endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub description: Option<String>,
    pub img_url: Option<String>,
}
