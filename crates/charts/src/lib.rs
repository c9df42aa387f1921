//! # Charts Crate
//!
//! Renders the four analysis charts as PNG files.
//!
//! ## Main Components
//!
//! - **histogram**: pure binning helpers (equal-width and log-spaced)
//! - **plots**: the four renderers and their error type
//!
//! Every renderer is a pure function of its input slice plus the output
//! directory; a failed write is fatal to the run.
//!
//! ## Example Usage
//!
//! ```ignore
//! use charts::{render_rating_distribution, render_user_entropy};
//! use std::path::Path;
//!
//! let output_dir = Path::new("results");
//! render_rating_distribution(&rating_values, output_dir)?;
//! render_user_entropy(&entropy_values, output_dir)?;
//! ```

pub mod histogram;
pub mod plots;

// Re-export main types
pub use histogram::{linear_bins, log_bins, value_range, Bin};
pub use plots::{
    render_genre_distribution, render_movie_popularity, render_rating_distribution,
    render_user_entropy, PlotError, GENRE_DISTRIBUTION_FILE, MOVIE_POPULARITY_FILE,
    RATING_DISTRIBUTION_FILE, USER_ENTROPY_FILE,
};
