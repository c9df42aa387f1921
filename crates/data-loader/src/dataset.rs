//! Dataset loading.
//!
//! This module wires the per-file parsers into a single directory load
//! that produces a ready-to-query [`Dataset`].

use crate::error::Result;
use crate::parser;
use crate::types::Dataset;
use std::path::Path;
use tracing::info;

impl Dataset {
    /// Load the three MovieLens tables from a dataset directory.
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse ratings.csv, movies.csv and tags.csv in parallel
    /// 2. Index movies by id for join lookups
    ///
    /// The first missing file or malformed row aborts the load; nothing
    /// is kept from a partial parse.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading MovieLens dataset from {}", data_dir.display());

        let ratings_path = data_dir.join("ratings.csv");
        let movies_path = data_dir.join("movies.csv");
        let tags_path = data_dir.join("tags.csv");

        // Parse all three files in parallel; nested joins give
        // three-way parallelism.
        let ((ratings, movies), tags) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_ratings(&ratings_path),
                    || parser::parse_movies(&movies_path),
                )
            },
            || parser::parse_tags(&tags_path),
        );

        let ratings = ratings?;
        let movies = movies?;
        let tags = tags?;

        info!(
            "Loaded {} ratings, {} movies, {} tags",
            ratings.len(),
            movies.len(),
            tags.len()
        );

        let mut dataset = Dataset::new();
        dataset.ratings = ratings;
        dataset.tags = tags;
        for movie in movies {
            dataset.insert_movie(movie);
        }

        Ok(dataset)
    }
}
