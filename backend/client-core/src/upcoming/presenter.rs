use crate::delivery::DeliveryContext;
use crate::error::ClientError;
use crate::upcoming::models::Movie;

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use log::debug;

const GENRE_SEPARATOR: &str = ", ";

/// Display-ready movie row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieViewModel {
    pub title: String,
    pub poster: String,
    pub backdrop: String,
    pub genre: String,
    pub overview: String,
    pub release_date: String,
}

/// A surface that can show upcoming movies.
pub trait MovieDisplay: Send + Sync {
    fn display_movies(&self, movies: Vec<MovieViewModel>);
    fn display_error(&self, message: String);
}

/// Maps movies to view models and hands them to the display.
///
/// The presenter does not own the display. If the display has been dropped
/// by the time a delivery runs, the delivery does nothing.
pub struct UpcomingMoviesPresenter {
    display: Weak<dyn MovieDisplay>,
    delivery: Arc<dyn DeliveryContext>,
    image_base_url: String,
}

impl UpcomingMoviesPresenter {
    pub fn new(
        display: Weak<dyn MovieDisplay>,
        delivery: Arc<dyn DeliveryContext>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            display,
            delivery,
            image_base_url: image_base_url.into(),
        }
    }

    pub fn present_movies(&self, movies: &[Movie], genres: &HashMap<i64, String>) {
        let view_models: Vec<MovieViewModel> = movies
            .iter()
            .map(|movie| MovieViewModel {
                title: movie.title.clone(),
                poster: image_url(&self.image_base_url, movie.poster_path.as_deref()),
                backdrop: image_url(&self.image_base_url, movie.backdrop_path.as_deref()),
                genre: genre_string(&movie.genre_ids, genres),
                overview: movie.overview.clone(),
                release_date: movie.release_date.clone(),
            })
            .collect();

        self.hand_off(move |display| display.display_movies(view_models));
    }

    pub fn present_error(&self, error: &ClientError) {
        let message = error.to_string();
        self.hand_off(move |display| display.display_error(message));
    }

    fn hand_off<F>(&self, present: F)
    where
        F: FnOnce(&dyn MovieDisplay) + Send + 'static,
    {
        let display = self.display.clone();
        self.delivery.deliver(Box::new(move || match display.upgrade() {
            Some(display) => present(display.as_ref()),
            None => debug!("Display is gone, skipping delivery"),
        }));
    }
}

/// Names for `genre_ids`, unknown ids skipped, joined with ", ".
pub fn genre_string(genre_ids: &[i64], genres: &HashMap<i64, String>) -> String {
    genre_ids
        .iter()
        .filter_map(|id| genres.get(id).map(String::as_str))
        .collect::<Vec<_>>()
        .join(GENRE_SEPARATOR)
}

fn image_url(base: &str, path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        _ => String::new(),
    }
}
