//! CSV parsers for the MovieLens data files.
//!
//! Each table gets its own parse function:
//! - `ratings.csv`: userId,movieId,rating,timestamp
//! - `movies.csv`: movieId,title,genres (pipe-delimited)
//! - `tags.csv`: userId,movieId,tag,timestamp
//!
//! Columns are header-defined; the readers deserialize rows through
//! serde so header order does not matter. Any malformed row aborts the
//! parse with the file name and line in the error.

use crate::error::{DataLoadError, Result};
use crate::types::{Movie, MovieId, Rating, Tag, NO_GENRES_LABEL};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw `movies.csv` row before the genre field is split.
#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
    title: String,
    genres: Option<String>,
}

/// Parse the ratings.csv file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    read_ratings(file_name(path), open_csv(path)?)
}

/// Parse the movies.csv file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    read_movies(file_name(path), open_csv(path)?)
}

/// Parse the tags.csv file
pub fn parse_tags(path: &Path) -> Result<Vec<Tag>> {
    read_tags(file_name(path), open_csv(path)?)
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    csv::Reader::from_path(path).map_err(|e| DataLoadError::from_csv(file_name(path), e))
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("<unknown>")
}

fn read_ratings<R: Read>(file: &str, mut reader: csv::Reader<R>) -> Result<Vec<Rating>> {
    let mut ratings = Vec::new();
    for record in reader.deserialize() {
        let rating: Rating = record.map_err(|e| DataLoadError::from_csv(file, e))?;
        ratings.push(rating);
    }
    Ok(ratings)
}

fn read_movies<R: Read>(file: &str, mut reader: csv::Reader<R>) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();
    for record in reader.deserialize() {
        let record: MovieRecord = record.map_err(|e| DataLoadError::from_csv(file, e))?;
        movies.push(Movie {
            id: record.movie_id,
            title: record.title,
            genres: split_genres(record.genres.as_deref()),
        });
    }
    Ok(movies)
}

fn read_tags<R: Read>(file: &str, mut reader: csv::Reader<R>) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    for record in reader.deserialize() {
        let tag: Tag = record.map_err(|e| DataLoadError::from_csv(file, e))?;
        tags.push(tag);
    }
    Ok(tags)
}

/// Split a pipe-delimited genre field into an ordered label list.
///
/// An absent or empty field yields the single [`NO_GENRES_LABEL`]
/// sentinel, so callers never see an empty genre list.
fn split_genres(field: Option<&str>) -> Vec<String> {
    match field {
        Some(s) if !s.is_empty() => s.split('|').map(str::to_string).collect(),
        _ => vec![NO_GENRES_LABEL.to_string()],
    }
}
