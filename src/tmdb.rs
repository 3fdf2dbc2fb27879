use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::AppResult,
    models::{MovieCandidate, MovieDetails},
};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String, rps: u32) -> Self {
        // Warn once on app load if using mock data
        if access_token.trim().is_empty() {
            tracing::warn!("Using mock TMDB data - no TMDB_ACCESS_TOKEN provided");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, access_token, base_url, limiter }
    }

    pub async fn search(&self, title: &str) -> AppResult<Vec<MovieCandidate>> {
        // Use mock data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(mock_search_results());
        }

        self.limiter.until_ready().await;

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[("query", title), ("page", "1"), ("language", "en")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(query = %title, results = resp.results.len(), "searched catalog");

        Ok(resp.results.into_iter().map(SearchMovie::into_candidate).collect())
    }

    pub async fn details(&self, tmdb_id: i32) -> AppResult<MovieDetails> {
        // Use mock data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(mock_details());
        }

        self.limiter.until_ready().await;

        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        let resp: DetailsResponse = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(tmdb_id = tmdb_id, title = %resp.original_title, "fetched movie details");

        Ok(resp.into_details())
    }
}

fn poster_url(poster_path: &str) -> String {
    format!("{POSTER_BASE}{poster_path}")
}

fn mock_search_results() -> Vec<MovieCandidate> {
    vec![
        MovieCandidate { id: 550, title: "Fight Club".to_string(), year: "1999-10-15".to_string() },
        MovieCandidate { id: 807, title: "Se7en".to_string(), year: "1995-09-22".to_string() },
    ]
}

fn mock_details() -> MovieDetails {
    MovieDetails {
        title: "Fight Club".to_string(),
        year: "1999-10-15".to_string(),
        description: Some(
            "An insomniac office worker and a devil-may-care soapmaker form an underground \
             fight club."
                .to_string(),
        ),
        img_url: Some(poster_url("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")),
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMovie>,
}

#[derive(Debug, Deserialize)]
struct SearchMovie {
    id: i32,
    original_title: String,
    #[serde(default)]
    release_date: String,
}

impl SearchMovie {
    fn into_candidate(self) -> MovieCandidate {
        MovieCandidate { id: self.id, title: self.original_title, year: self.release_date }
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    original_title: String,
    #[serde(default)]
    release_date: String,
    overview: Option<String>,
    poster_path: Option<String>,
}

impl DetailsResponse {
    fn into_details(self) -> MovieDetails {
        let description = self.overview.and_then(|s| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        });
        let img_url = self.poster_path.as_deref().map(poster_url);
        MovieDetails { title: self.original_title, year: self.release_date, description, img_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_keep_only_id_title_and_release_date() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 603, "original_title": "The Matrix", "release_date": "1999-03-30",
                 "overview": "ignored", "vote_average": 8.2, "poster_path": "/x.jpg"},
                {"id": 604, "original_title": "The Matrix Reloaded"}
            ],
            "total_pages": 1
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let candidates: Vec<_> = resp.results.into_iter().map(SearchMovie::into_candidate).collect();

        assert_eq!(
            candidates,
            vec![
                MovieCandidate {
                    id: 603,
                    title: "The Matrix".to_string(),
                    year: "1999-03-30".to_string()
                },
                MovieCandidate {
                    id: 604,
                    title: "The Matrix Reloaded".to_string(),
                    year: String::new()
                },
            ]
        );
    }

    #[test]
    fn details_build_full_size_poster_url() {
        let json = r#"{
            "original_title": "The Matrix",
            "release_date": "1999-03-30",
            "overview": "A computer hacker learns the truth.",
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
        }"#;
        let resp: DetailsResponse = serde_json::from_str(json).unwrap();
        let details = resp.into_details();

        assert_eq!(
            details.img_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg")
        );
        assert_eq!(details.description.as_deref(), Some("A computer hacker learns the truth."));
        assert_eq!(details.year, "1999-03-30");
    }

    #[test]
    fn details_tolerate_missing_optional_fields() {
        let json = r#"{"original_title": "Obscure Film", "overview": ""}"#;
        let resp: DetailsResponse = serde_json::from_str(json).unwrap();
        let details = resp.into_details();

        assert_eq!(details.title, "Obscure Film");
        assert_eq!(details.year, "");
        assert_eq!(details.description, None);
        assert_eq!(details.img_url, None);
    }

    #[tokio::test]
    async fn blank_token_serves_canned_data() {
        let client = TmdbClient::new(
            reqwest::Client::new(),
            String::new(),
            "https://api.themoviedb.org/3".to_string(),
            4,
        );

        let candidates = client.search("fight club").await.unwrap();
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].id, 550);

        let details = client.details(550).await.unwrap();
        assert_eq!(details.title, "Fight Club");
        assert!(details.img_url.is_some());
    }
}
