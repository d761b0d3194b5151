//! Upcoming movies feature: response models, presenter and interactor.
//!
//! The interactor pulls the genre table and one page of upcoming movies
//! through [`HttpClient`](crate::http_client::HttpClient), and the presenter
//! turns them into view models for whatever display is still alive.

pub mod interactor;
pub mod models;
pub mod presenter;

pub use interactor::UpcomingMoviesInteractor;
pub use models::{Genre, GenreList, Movie, UpcomingPage};
pub use presenter::{MovieDisplay, MovieViewModel, UpcomingMoviesPresenter};
