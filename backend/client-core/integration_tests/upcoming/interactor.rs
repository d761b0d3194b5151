use client_core::config::{ApiSettings, HttpSettings};
use client_core::delivery::InlineDelivery;
use client_core::transport::ReqwestTransport;
use client_core::upcoming::{
    MovieDisplay, MovieViewModel, UpcomingMoviesInteractor, UpcomingMoviesPresenter,
};
use client_core::{ClientError, HttpClient};

use common::ApiKey;

use std::sync::{Arc, Mutex, Weak};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_API_KEY: &str = "test-key-12345";

#[derive(Default)]
struct RecordingDisplay {
    movies: Mutex<Vec<MovieViewModel>>,
    errors: Mutex<Vec<String>>,
}

impl MovieDisplay for RecordingDisplay {
    fn display_movies(&self, movies: Vec<MovieViewModel>) {
        self.movies.lock().unwrap().extend(movies);
    }

    fn display_error(&self, message: String) {
        self.errors.lock().unwrap().push(message);
    }
}

fn interactor(
    server: &MockServer,
    display: &Arc<RecordingDisplay>,
) -> UpcomingMoviesInteractor<ReqwestTransport> {
    let settings = ApiSettings {
        base_url: server.uri(),
        image_base_url: "https://image.example.com/t/p/w500".to_string(),
        language: "en-US".to_string(),
    };
    let weak: Weak<dyn MovieDisplay> = Arc::downgrade(display) as Weak<dyn MovieDisplay>;
    let presenter = UpcomingMoviesPresenter::new(
        weak,
        Arc::new(InlineDelivery),
        settings.image_base_url.clone(),
    );
    let client = HttpClient::new(ReqwestTransport::new(&HttpSettings::default()).unwrap());

    UpcomingMoviesInteractor::new(client, presenter, settings, ApiKey::new(TEST_API_KEY))
}

async fn mount_genres(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .and(query_param("api_key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 878, "name": "Science Fiction"}
            ]
        })))
        .mount(server)
        .await;
}

/// **VALUE**: Verifies the full flow: genres, upcoming page, presenter, display.
///
/// **WHY THIS MATTERS**: This is what the binary does on launch. Every piece (endpoint
/// catalogue, transport, decode, genre mapping, delivery) has to line up.
///
/// **BUG THIS CATCHES**: Would catch wrong routes or query parameters, model field
/// mismatches with the API's JSON, or the presenter not reaching the display.
#[tokio::test]
async fn given_api_serves_genres_and_movies_when_load_then_display_shows_view_models() {
    // GIVEN: A fake movie database
    let server = MockServer::start().await;
    mount_genres(&server).await;
    Mock::given(method("GET"))
        .and(path("/movie/upcoming"))
        .and(query_param("api_key", TEST_API_KEY))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "total_pages": 5,
            "total_results": 97,
            "results": [{
                "id": 329865,
                "title": "Arrival",
                "poster_path": "/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg",
                "backdrop_path": null,
                "genre_ids": [878, 28, 9999],
                "overview": "Taking place after alien crafts land around the world...",
                "release_date": "2016-11-10"
            }]
        })))
        .mount(&server)
        .await;
    let display = Arc::new(RecordingDisplay::default());

    // WHEN: Loading page 2
    let page = interactor(&server, &display).load(2).await.unwrap();

    // THEN: Page metadata returned and one view model displayed
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 5);

    let movies = display.movies.lock().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Arrival");
    assert_eq!(movies[0].genre, "Science Fiction, Action");
    assert_eq!(
        movies[0].poster,
        "https://image.example.com/t/p/w500/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg"
    );
    assert_eq!(movies[0].backdrop, "");
    assert!(display.errors.lock().unwrap().is_empty());
}

/// **VALUE**: Verifies a rejected key is presented as an error message and returned.
///
/// **WHY THIS MATTERS**: An invalid API key is the most common setup mistake. The user
/// must see a readable message rather than an empty list.
#[tokio::test]
async fn given_api_rejects_key_when_load_then_display_shows_authentication_error() {
    // GIVEN: Genres work, upcoming answers 403
    let server = MockServer::start().await;
    mount_genres(&server).await;
    Mock::given(method("GET"))
        .and(path("/movie/upcoming"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })))
        .mount(&server)
        .await;
    let display = Arc::new(RecordingDisplay::default());

    // WHEN: Loading
    let result = interactor(&server, &display).load(1).await;

    // THEN: AuthenticationRequired returned and presented
    assert_eq!(result, Err(ClientError::AuthenticationRequired));
    assert_eq!(
        *display.errors.lock().unwrap(),
        vec!["Authentication required.".to_string()]
    );
    assert!(display.movies.lock().unwrap().is_empty());
}

/// **VALUE**: Verifies the upcoming request is never sent when genres fail.
#[tokio::test]
async fn given_genres_missing_when_load_then_upcoming_is_not_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/upcoming"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let display = Arc::new(RecordingDisplay::default());

    let result = interactor(&server, &display).load(1).await;

    // wiremock answers unmatched routes with 404
    assert_eq!(result, Err(ClientError::CouldNotFindHost));
    assert_eq!(display.errors.lock().unwrap().len(), 1);
}
