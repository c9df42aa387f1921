//! # Analysis Crate
//!
//! This crate derives every table and scalar the analysis reports from
//! a loaded [`Dataset`](data_loader::Dataset).
//!
//! ## Main Components
//!
//! - **stats**: distinct-user/movie counts and rating totals
//! - **popularity**: per-movie mean rating and rating count with
//!   left-joined metadata
//! - **entropy**: genre expansion, per-user Shannon entropy, global
//!   genre distribution
//! - **summary**: the one-row summary_stats.csv writer
//!
//! All derived tables are pure functions of the loaded source tables;
//! nothing here caches or mutates in place.
//!
//! ## Example Usage
//!
//! ```ignore
//! use analysis::{average_entropy, BasicStats, GenreExpansion, Summary};
//!
//! let stats = BasicStats::compute(&dataset.ratings);
//! let expansion = GenreExpansion::expand(&dataset);
//! let entropies = expansion.user_entropies();
//!
//! let summary = Summary {
//!     n_users: stats.n_users,
//!     n_movies: stats.n_movies,
//!     total_ratings: stats.total_ratings,
//!     average_genre_entropy: average_entropy(&entropies),
//! };
//! ```

pub mod stats;
pub mod popularity;
pub mod entropy;
pub mod summary;

// Re-export main types
pub use stats::BasicStats;
pub use popularity::{movie_popularity, MoviePopularity};
pub use entropy::{average_entropy, shannon_entropy, GenreExpansion, GenreShare, UserEntropy};
pub use summary::{write_summary, Summary, SUMMARY_FILE};
