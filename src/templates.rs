use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, forms::EditErrors, models::MovieCandidate};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn home_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Ranked by your rating." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add your first movie." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title_error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search the catalog by title." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="movie_title" { "Title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="movie_title" id="movie_title";
                                @if let Some(message) = title_error {
                                    p class="mt-2 text-sm text-red-600" { (message) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[MovieCandidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                        p class="mt-2 text-gray-600" { "Results for “" (query) "”." }

                        @if candidates.is_empty() {
                            p class="mt-8 text-gray-600" { "No matches. Try another title." }
                        } @else {
                            ul class="mt-8 divide-y divide-gray-200" {
                                @for candidate in candidates {
                                    li {
                                        a class="block py-3 text-blue-600 hover:text-blue-800" href=(format!("/find?movie_id={}", candidate.id)) {
                                            (candidate.title)
                                            @if !candidate.year.is_empty() {
                                                span class="ml-2 text-gray-500" { "(" (candidate.year) ")" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, errors: &EditErrors) -> String {
    page(
        "Rate Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "Update your rating and review." }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out of 10. Ex: 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating";
                                @if let Some(message) = errors.rating {
                                    p class="mt-2 text-sm text-red-600" { (message) }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review";
                                @if let Some(message) = errors.review {
                                    p class="mt-2 text-sm text-red-600" { (message) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> String {
    page(
        "Not Found",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Not Found" }
                        p class="mt-4 text-gray-700" { "That movie is not on your list." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-6" {
                @if let Some(img_url) = &movie.img_url {
                    img class="w-24 rounded-md shadow" src=(img_url) alt=(movie.title);
                }
                div class="flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            @if !movie.year.is_empty() {
                                span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                            }
                        }
                        @if let Some(ranking) = movie.ranking {
                            span class="rounded-full bg-blue-100 px-3 py-1 text-sm font-semibold text-blue-800" { "#" (ranking) }
                        }
                    }

                    @if let Some(rating) = movie.rating {
                        p class="mt-2 text-sm text-gray-700" { span class="font-medium" { (format!("{rating:.1}")) } " / 10" }
                    } @else {
                        p class="mt-2 text-sm text-gray-500" { "Not rated yet" }
                    }

                    @if let Some(review) = &movie.review {
                        p class="mt-2 text-sm italic text-gray-600" { "“" (review) "”" }
                    }

                    @if let Some(description) = &movie.description {
                        p class="mt-3 text-sm text-gray-600" { (description) }
                    }

                    div class="mt-4 flex gap-4" {
                        a class="text-sm text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Update" }
                        a class="text-sm text-red-600 hover:text-red-800" href=(format!("/delete?movie_id={}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}
