// Unit tests for the upcoming movies presenter.

use crate::delivery::{InlineDelivery, MainQueue};
use crate::error::ClientError;
use crate::upcoming::models::{Genre, GenreList, Movie};
use crate::upcoming::presenter::{MovieDisplay, MovieViewModel, UpcomingMoviesPresenter, genre_string};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

const IMAGE_BASE: &str = "https://image.example.com/t/p/w500";

#[derive(Default)]
struct RecordingDisplay {
    movies: Mutex<Vec<Vec<MovieViewModel>>>,
    errors: Mutex<Vec<String>>,
}

impl MovieDisplay for RecordingDisplay {
    fn display_movies(&self, movies: Vec<MovieViewModel>) {
        self.movies.lock().unwrap().push(movies);
    }

    fn display_error(&self, message: String) {
        self.errors.lock().unwrap().push(message);
    }
}

fn genres() -> HashMap<i64, String> {
    GenreList {
        genres: vec![
            Genre {
                id: 28,
                name: "Action".to_string(),
            },
            Genre {
                id: 12,
                name: "Adventure".to_string(),
            },
        ],
    }
    .as_map()
}

fn movie(poster: Option<&str>, genre_ids: Vec<i64>) -> Movie {
    Movie {
        id: 1,
        title: "Arrival".to_string(),
        poster_path: poster.map(str::to_string),
        backdrop_path: None,
        genre_ids,
        overview: "Linguist meets visitors.".to_string(),
        release_date: "2016-11-11".to_string(),
    }
}

/// **VALUE**: Verifies genre ids map to names in order, skipping unknown ids.
///
/// **BUG THIS CATCHES**: Would catch a lookup that panics or inserts blanks for ids
/// missing from the genre table.
#[test]
fn given_known_and_unknown_genre_ids_when_genre_string_then_joins_known_names() {
    assert_eq!(genre_string(&[12, 999, 28], &genres()), "Adventure, Action");
    assert_eq!(genre_string(&[], &genres()), "");
    assert_eq!(genre_string(&[999], &genres()), "");
}

/// **VALUE**: Verifies the full movie to view model mapping.
#[test]
fn given_movie_when_present_movies_then_display_receives_view_model() {
    // GIVEN: A live display and inline delivery
    let display = Arc::new(RecordingDisplay::default());
    let weak: Weak<dyn MovieDisplay> = Arc::downgrade(&display) as Weak<dyn MovieDisplay>;
    let presenter = UpcomingMoviesPresenter::new(weak, Arc::new(InlineDelivery), IMAGE_BASE);

    // WHEN: Presenting one movie
    presenter.present_movies(&[movie(Some("/poster.jpg"), vec![28])], &genres());

    // THEN: One batch with the mapped fields
    let batches = display.movies.lock().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(
        batches[0],
        vec![MovieViewModel {
            title: "Arrival".to_string(),
            poster: format!("{IMAGE_BASE}/poster.jpg"),
            backdrop: String::new(),
            genre: "Action".to_string(),
            overview: "Linguist meets visitors.".to_string(),
            release_date: "2016-11-11".to_string(),
        }]
    );
}

/// **VALUE**: Verifies presenting to a dropped display is a no-op.
///
/// **WHY THIS MATTERS**: The display can be torn down while a request is in flight. The
/// presenter must not keep it alive and must not fail when it is gone.
///
/// **BUG THIS CATCHES**: Would catch the presenter holding an `Arc` (keeping the display
/// alive) or unwrapping the upgrade.
#[test]
fn given_dropped_display_when_present_movies_then_delivery_is_silent_no_op() {
    // GIVEN: A presenter whose display has been dropped
    let display = Arc::new(RecordingDisplay::default());
    let weak: Weak<dyn MovieDisplay> = Arc::downgrade(&display) as Weak<dyn MovieDisplay>;
    let (handle, mut queue) = MainQueue::new();
    let presenter = UpcomingMoviesPresenter::new(weak, Arc::new(handle), IMAGE_BASE);
    drop(display);

    // WHEN: Presenting and draining
    presenter.present_movies(&[movie(None, vec![])], &genres());
    presenter.present_error(&ClientError::BrokenData);

    // THEN: Both deliveries run without effect or panic
    assert_eq!(queue.run_until_idle(), 2);
}

/// **VALUE**: Verifies display surfaces only receive work when the context runs it.
#[test]
fn given_main_queue_when_present_error_then_display_waits_for_drain() {
    let display = Arc::new(RecordingDisplay::default());
    let weak: Weak<dyn MovieDisplay> = Arc::downgrade(&display) as Weak<dyn MovieDisplay>;
    let (handle, mut queue) = MainQueue::new();
    let presenter = UpcomingMoviesPresenter::new(weak, Arc::new(handle), IMAGE_BASE);

    presenter.present_error(&ClientError::AuthenticationRequired);
    assert!(display.errors.lock().unwrap().is_empty());

    queue.run_until_idle();
    assert_eq!(
        *display.errors.lock().unwrap(),
        vec!["Authentication required.".to_string()]
    );
}
