//! Plain-text movie display.

use client_core::upcoming::{MovieDisplay, MovieViewModel};

use std::io::Write;
use std::sync::Mutex;

use log::warn;

const NO_GENRE_LABEL: &str = "Uncategorized";

/// Writes movie listings to any writer (stdout in the binary).
pub struct TextDisplay<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }

    fn write_with<F>(&self, write: F)
    where
        F: FnOnce(&mut W) -> std::io::Result<()>,
    {
        match self.out.lock() {
            Ok(mut out) => {
                if let Err(e) = write(&mut *out).and_then(|_| out.flush()) {
                    warn!("Failed to write to display: {e}");
                }
            }
            Err(_) => warn!("Display writer lock poisoned"),
        }
    }
}

impl<W: Write + Send> MovieDisplay for TextDisplay<W> {
    fn display_movies(&self, movies: Vec<MovieViewModel>) {
        self.write_with(|out| {
            if movies.is_empty() {
                return writeln!(out, "No upcoming movies.");
            }

            for movie in &movies {
                let genre = if movie.genre.is_empty() {
                    NO_GENRE_LABEL
                } else {
                    movie.genre.as_str()
                };
                writeln!(out, "{} ({})", movie.title, movie.release_date)?;
                writeln!(out, "  {genre}")?;
                if !movie.poster.is_empty() {
                    writeln!(out, "  {}", movie.poster)?;
                }
                if !movie.overview.is_empty() {
                    writeln!(out, "  {}", movie.overview)?;
                }
                writeln!(out)?;
            }
            Ok(())
        });
    }

    fn display_error(&self, message: String) {
        self.write_with(|out| writeln!(out, "Error: {message}"));
    }
}
