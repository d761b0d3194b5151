use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
}

/// One page of `movie/upcoming`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingPage {
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Body of `genre/movie/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

impl GenreList {
    /// Genre id to display name. Later duplicates win.
    pub fn as_map(&self) -> HashMap<i64, String> {
        self.genres
            .iter()
            .map(|g| (g.id, g.name.clone()))
            .collect()
    }
}
