use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;

use crate::{
    AppState,
    entities::movie,
    error::AppResult,
    forms::{self, AddForm, EditErrors, EditForm},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_submit))
        .route("/select", get(select))
        .route("/find", get(find))
        .route("/edit/{id}", get(edit_form).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
}

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_ranked().await?;
    Ok(Html(templates::home_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(None))
}

pub async fn add_submit(Form(form): Form<AddForm>) -> Response {
    match forms::validate_title(&form.movie_title) {
        Ok(title) => {
            let url = format!("/select?movie_title={}", urlencoding::encode(&title));
            Redirect::to(&url).into_response()
        },
        Err(message) => Html(templates::add_page(Some(message))).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    movie_title: String,
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SelectQuery>,
) -> AppResult<Html<String>> {
    let candidates = state.tmdb.search(&q.movie_title).await?;
    Ok(Html(templates::select_page(&q.movie_title, &candidates)))
}

#[derive(Debug, Deserialize)]
pub struct MovieIdQuery {
    movie_id: i32,
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Redirect> {
    let details = state.tmdb.details(q.movie_id).await?;

    let movie = movie::Model {
        id: q.movie_id,
        title: details.title,
        year: details.year,
        description: details.description,
        rating: None,
        ranking: None,
        review: None,
        img_url: details.img_url,
    };
    state.store.create(movie).await?;

    Ok(Redirect::to(&format!("/edit/{}", q.movie_id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(id).await?;
    Ok(Html(templates::edit_page(&movie, &EditErrors::default())))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(id).await?;

    match (forms::validate_rating(&form.rating), forms::validate_review(&form.review)) {
        (Ok(rating), Ok(review)) => {
            state.store.set_rating_and_review(id, rating, review).await?;
            Ok(Redirect::to("/").into_response())
        },
        (rating, review) => {
            let errors = EditErrors { rating: rating.err(), review: review.err() };
            Ok(Html(templates::edit_page(&movie, &errors)).into_response())
        },
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieIdQuery>,
) -> AppResult<Redirect> {
    state.store.delete(q.movie_id).await?;
    Ok(Redirect::to("/"))
}
