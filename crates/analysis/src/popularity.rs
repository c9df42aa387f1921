//! Per-movie rating aggregates.
//!
//! Groups the ratings table by movie and left-joins movie metadata,
//! producing the input for the popularity histogram.

use data_loader::{Dataset, MovieId};
use std::collections::BTreeMap;

/// Mean rating and rating count for one movie, with left-joined
/// metadata.
///
/// `title` and `genres` stay `None` when the movieId never appeared in
/// `movies.csv`.
#[derive(Debug, Clone)]
pub struct MoviePopularity {
    pub movie_id: MovieId,
    pub mean_rating: f64,
    pub rating_count: u64,
    pub title: Option<String>,
    pub genres: Option<Vec<String>>,
}

/// Group ratings by movie, compute mean and count, and left-join movie
/// metadata.
///
/// Movies with zero ratings do not appear in the output. Rows are
/// ordered by movieId.
pub fn movie_popularity(dataset: &Dataset) -> Vec<MoviePopularity> {
    // (sum, count) per movie
    let mut groups: BTreeMap<MovieId, (f64, u64)> = BTreeMap::new();
    for rating in &dataset.ratings {
        let entry = groups.entry(rating.movie_id).or_insert((0.0, 0));
        entry.0 += rating.rating as f64;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(movie_id, (sum, count))| {
            let movie = dataset.get_movie(movie_id);
            MoviePopularity {
                movie_id,
                mean_rating: sum / count as f64,
                rating_count: count,
                title: movie.map(|m| m.title.clone()),
                genres: movie.map(|m| m.genres.clone()),
            }
        })
        .collect()
}
