//! Core domain types for the MovieLens dataset.
//!
//! This module defines the record types for the three input tables
//! (ratings, movies, tags) and the [`Dataset`] container that holds
//! them in memory for the duration of a run.

use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// Sentinel genre label used by MovieLens for movies without genre data.
///
/// An empty or missing `genres` field normalizes to a single-element
/// list containing this label, so every loaded movie has a non-empty
/// genre list.
pub const NO_GENRES_LABEL: &str = "(no genres listed)";

// =============================================================================
// Record Types
// =============================================================================

/// A single rating given by a user to a movie.
///
/// Deserialized directly from `ratings.csv`; the camel-case column
/// headers are mapped onto snake-case fields.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    /// Rating value on the fixed 0.5-5.0 scale
    pub rating: f32,
    /// Unix timestamp when the rating was made
    pub timestamp: i64,
}

/// A movie with its parsed genre list.
///
/// The `genres` column of `movies.csv` is pipe-delimited
/// (`"Animation|Children|Comedy"`) and is split into an ordered list at
/// parse time. Labels are open strings: the 25M vocabulary includes
/// labels like `IMAX` alongside the classic genres, plus the
/// [`NO_GENRES_LABEL`] sentinel.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
}

/// A free-text tag applied by a user to a movie.
///
/// Tags are loaded and counted but feed no downstream computation.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub tag: String,
    pub timestamp: i64,
}

// =============================================================================
// Dataset - The In-Memory Source Tables
// =============================================================================

/// Holds the three loaded source tables for one analysis run.
///
/// Ratings and tags keep their file order; movies are indexed by id for
/// O(1) metadata lookups during joins. All derived tables elsewhere in
/// the workspace are pure functions of this struct.
#[derive(Debug, Default)]
pub struct Dataset {
    pub ratings: Vec<Rating>,
    pub(crate) movies: HashMap<MovieId, Movie>,
    pub tags: Vec<Tag>,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by ID, or `None` if the id never appeared in `movies.csv`
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Insert a movie into the lookup table
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Row counts for status output: (ratings, movies, tags)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.ratings.len(), self.movies.len(), self.tags.len())
    }
}
