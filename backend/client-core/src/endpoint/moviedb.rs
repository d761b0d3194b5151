//! Catalogue of movie database routes.

use crate::config::ApiSettings;
use crate::endpoint::Endpoint;

use common::ApiKey;

use url::form_urlencoded;

const UPCOMING_PATH: &str = "movie/upcoming";
const GENRES_PATH: &str = "genre/movie/list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieDbRoute {
    Upcoming { page: u32 },
    Genres,
}

impl MovieDbRoute {
    pub fn path(&self) -> &'static str {
        match self {
            MovieDbRoute::Upcoming { .. } => UPCOMING_PATH,
            MovieDbRoute::Genres => GENRES_PATH,
        }
    }
}

/// A fully parameterised movie database request target.
///
/// A blank `base_url` produces an empty address so the client reports
/// `UrlNotFound` instead of calling a relative path.
#[derive(Debug, Clone)]
pub struct MovieDbEndpoint {
    route: MovieDbRoute,
    base_url: String,
    language: String,
    api_key: ApiKey,
}

impl MovieDbEndpoint {
    pub fn new(settings: &ApiSettings, api_key: &ApiKey, route: MovieDbRoute) -> Self {
        Self {
            route,
            base_url: settings.base_url.clone(),
            language: settings.language.clone(),
            api_key: api_key.clone(),
        }
    }

    pub fn upcoming(settings: &ApiSettings, api_key: &ApiKey, page: u32) -> Self {
        Self::new(settings, api_key, MovieDbRoute::Upcoming { page })
    }

    pub fn genres(settings: &ApiSettings, api_key: &ApiKey) -> Self {
        Self::new(settings, api_key, MovieDbRoute::Genres)
    }

    pub fn route(&self) -> MovieDbRoute {
        self.route
    }
}

impl Endpoint for MovieDbEndpoint {
    fn endpoint(&self) -> String {
        let base = self.base_url.trim();
        if base.is_empty() {
            return String::new();
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("api_key", self.api_key.expose());
        query.append_pair("language", &self.language);
        if let MovieDbRoute::Upcoming { page } = self.route {
            query.append_pair("page", &page.to_string());
        }

        format!(
            "{}/{}?{}",
            base.trim_end_matches('/'),
            self.route.path(),
            query.finish()
        )
    }
}
