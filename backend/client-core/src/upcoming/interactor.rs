use crate::config::ApiSettings;
use crate::endpoint::MovieDbEndpoint;
use crate::error::ClientResult;
use crate::http_client::HttpClient;
use crate::transport::{ReqwestTransport, Transport};
use crate::upcoming::models::{GenreList, UpcomingPage};
use crate::upcoming::presenter::UpcomingMoviesPresenter;

use common::ApiKey;

use log::info;

/// Loads upcoming movies and forwards the outcome to the presenter.
pub struct UpcomingMoviesInteractor<T: Transport = ReqwestTransport> {
    client: HttpClient<T>,
    presenter: UpcomingMoviesPresenter,
    settings: ApiSettings,
    api_key: ApiKey,
}

impl<T: Transport> UpcomingMoviesInteractor<T> {
    pub fn new(
        client: HttpClient<T>,
        presenter: UpcomingMoviesPresenter,
        settings: ApiSettings,
        api_key: ApiKey,
    ) -> Self {
        Self {
            client,
            presenter,
            settings,
            api_key,
        }
    }

    /// Fetch the genre table, then `page` of upcoming movies, and present them.
    ///
    /// Any failure is presented as an error message and also returned.
    pub async fn load(&self, page: u32) -> ClientResult<UpcomingPage> {
        match self.fetch(page).await {
            Ok((upcoming, genres)) => {
                info!(
                    "Loaded {} upcoming movies (page {} of {})",
                    upcoming.results.len(),
                    upcoming.page,
                    upcoming.total_pages
                );
                self.presenter
                    .present_movies(&upcoming.results, &genres.as_map());
                Ok(upcoming)
            }
            Err(error) => {
                self.presenter.present_error(&error);
                Err(error)
            }
        }
    }

    async fn fetch(&self, page: u32) -> ClientResult<(UpcomingPage, GenreList)> {
        let genres: GenreList = self
            .client
            .fetch(&MovieDbEndpoint::genres(&self.settings, &self.api_key))
            .await?;

        let upcoming: UpcomingPage = self
            .client
            .fetch(&MovieDbEndpoint::upcoming(&self.settings, &self.api_key, page))
            .await?;

        Ok((upcoming, genres))
    }
}
