//! # Data Loader Crate
//!
//! This crate handles loading the MovieLens CSV tables into memory.
//!
//! ## Main Components
//!
//! - **types**: Record types (Rating, Movie, Tag) and the Dataset container
//! - **parser**: CSV parsers for the three input tables
//! - **dataset**: Parallel directory load
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! // Load the entire dataset
//! let dataset = Dataset::load_from_dir(Path::new("data/ml-25m"))?;
//!
//! let (ratings, movies, tags) = dataset.counts();
//! println!("{} ratings over {} movies ({} tags)", ratings, movies, tags);
//!
//! // Look up joined metadata
//! let movie = dataset.get_movie(296).unwrap();
//! println!("{}: {}", movie.title, movie.genres.join("|"));
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    Rating,
    Movie,
    Tag,
    Dataset,
    // Sentinel genre label
    NO_GENRES_LABEL,
};
