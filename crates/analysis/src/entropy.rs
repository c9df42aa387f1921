//! Genre expansion and Shannon-entropy diversity metrics.
//!
//! Each rating is exploded into one row per genre on its movie; the
//! expanded rows feed two derivations:
//! - per-user genre counts, summarized as Shannon entropy in bits
//! - the global genre distribution (proportion of all expanded rows)

use data_loader::{Dataset, UserId};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Per-user genre diversity, in bits.
///
/// Always >= 0; exactly 0 when the user's rated movies span a single
/// genre label.
#[derive(Debug, Clone)]
pub struct UserEntropy {
    pub user_id: UserId,
    pub genre_entropy: f64,
}

/// One genre's share of all expanded (user, movie, genre) rows.
#[derive(Debug, Clone)]
pub struct GenreShare {
    pub genre: String,
    pub count: u64,
    pub proportion: f64,
}

/// Result of exploding each rating into one row per genre.
///
/// Both count tables are accumulated in a single pass over the ratings:
/// per (user, genre) for the entropy metric, and globally per genre for
/// the distribution chart. Ratings whose movieId is missing from the
/// movies table have no genre list to expand and are skipped.
#[derive(Debug, Default)]
pub struct GenreExpansion {
    per_user: BTreeMap<UserId, HashMap<String, u64>>,
    global_counts: HashMap<String, u64>,
    /// Genre labels in order of first encounter, for stable tie-breaks
    first_seen: Vec<String>,
    total_rows: u64,
}

impl GenreExpansion {
    /// Join ratings to movie genre lists and expand one row per genre.
    pub fn expand(dataset: &Dataset) -> Self {
        let mut expansion = GenreExpansion::default();

        for rating in &dataset.ratings {
            let Some(movie) = dataset.get_movie(rating.movie_id) else {
                continue; // no genre list to explode
            };
            for genre in &movie.genres {
                expansion.record(rating.user_id, genre);
            }
        }

        expansion
    }

    fn record(&mut self, user_id: UserId, genre: &str) {
        *self
            .per_user
            .entry(user_id)
            .or_default()
            .entry(genre.to_string())
            .or_insert(0) += 1;

        match self.global_counts.get_mut(genre) {
            Some(count) => *count += 1,
            None => {
                self.global_counts.insert(genre.to_string(), 1);
                self.first_seen.push(genre.to_string());
            }
        }
        self.total_rows += 1;
    }

    /// Number of users with at least one expanded row
    pub fn user_count(&self) -> usize {
        self.per_user.len()
    }

    /// Total expanded rows across all users
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Shannon entropy of each user's genre-count vector, ordered by
    /// userId.
    pub fn user_entropies(&self) -> Vec<UserEntropy> {
        self.per_user
            .par_iter()
            .map(|(&user_id, counts)| UserEntropy {
                user_id,
                genre_entropy: shannon_entropy(counts.values().copied()),
            })
            .collect()
    }

    /// Each genre's proportion of all expanded rows.
    ///
    /// Ordered by count descending; ties keep first-encounter order
    /// (the sort is stable over the encounter-ordered rows).
    pub fn genre_distribution(&self) -> Vec<GenreShare> {
        let total = self.total_rows as f64;
        let mut shares: Vec<GenreShare> = self
            .first_seen
            .iter()
            .map(|genre| {
                let count = self.global_counts[genre];
                GenreShare {
                    genre: genre.clone(),
                    count,
                    proportion: count as f64 / total,
                }
            })
            .collect();

        shares.sort_by(|a, b| b.count.cmp(&a.count));
        shares
    }
}

/// Shannon entropy in bits of a count vector.
///
/// `H = -sum(p * log2(p))` with `p = count / sum(counts)`. Only
/// observed (nonzero) counts enter the sum, so a degenerate
/// single-label distribution yields exactly 0.
pub fn shannon_entropy<I: IntoIterator<Item = u64>>(counts: I) -> f64 {
    let counts: Vec<u64> = counts.into_iter().filter(|&c| c > 0).collect();
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    -counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Arithmetic mean of per-user entropies.
///
/// The mean is undefined over zero users; it is reported as 0.0 with a
/// warning rather than letting a NaN reach the summary file.
pub fn average_entropy(entropies: &[UserEntropy]) -> f64 {
    if entropies.is_empty() {
        warn!("no users with expanded genre rows, reporting average entropy as 0");
        return 0.0;
    }
    entropies.iter().map(|e| e.genre_entropy).sum::<f64>() / entropies.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Movie, Rating};

    fn movie(id: u32, title: &str, genres: &[&str]) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn rating(user_id: u32, movie_id: u32, value: f32) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating: value,
            timestamp: 1000000,
        }
    }

    fn create_test_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.insert_movie(movie(1, "Buddy Cops (1990)", &["Action", "Comedy"]));
        dataset.insert_movie(movie(2, "Standup Special (2005)", &["Comedy"]));
        dataset.ratings = vec![rating(1, 1, 5.0), rating(1, 2, 3.0)];
        dataset
    }

    #[test]
    fn test_expansion_counts() {
        // u1 rated Action|Comedy and Comedy: counts {Action: 1, Comedy: 2}
        let expansion = GenreExpansion::expand(&create_test_dataset());

        assert_eq!(expansion.user_count(), 1);
        assert_eq!(expansion.total_rows(), 3);

        let counts = &expansion.per_user[&1];
        assert_eq!(counts["Action"], 1);
        assert_eq!(counts["Comedy"], 2);
    }

    #[test]
    fn test_user_entropy_worked_example() {
        let expansion = GenreExpansion::expand(&create_test_dataset());
        let entropies = expansion.user_entropies();

        assert_eq!(entropies.len(), 1);
        assert_eq!(entropies[0].user_id, 1);
        // -(1/3 log2 1/3 + 2/3 log2 2/3) = 0.9183 bits
        assert!((entropies[0].genre_entropy - 0.918296).abs() < 1e-5);
    }

    #[test]
    fn test_single_genre_user_has_zero_entropy() {
        let mut dataset = Dataset::new();
        dataset.insert_movie(movie(1, "Drama One (1991)", &["Drama"]));
        dataset.insert_movie(movie(2, "Drama Two (1992)", &["Drama"]));
        dataset.ratings = vec![rating(7, 1, 4.0), rating(7, 2, 2.5)];

        let entropies = GenreExpansion::expand(&dataset).user_entropies();
        assert_eq!(entropies[0].genre_entropy, 0.0);
    }

    #[test]
    fn test_unknown_movie_excluded_from_expansion() {
        let mut dataset = create_test_dataset();
        dataset.ratings.push(rating(1, 99, 1.0));

        let expansion = GenreExpansion::expand(&dataset);
        assert_eq!(expansion.total_rows(), 3);
    }

    #[test]
    fn test_genre_distribution_order_and_sum() {
        let expansion = GenreExpansion::expand(&create_test_dataset());
        let distribution = expansion.genre_distribution();

        // Comedy (2 rows) ahead of Action (1 row)
        assert_eq!(distribution[0].genre, "Comedy");
        assert!((distribution[0].proportion - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(distribution[1].genre, "Action");

        let sum: f64 = distribution.iter().map(|s| s.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_genre_distribution_tie_keeps_first_encounter() {
        let mut dataset = Dataset::new();
        dataset.insert_movie(movie(1, "Western One (1960)", &["Western"]));
        dataset.insert_movie(movie(2, "Noir One (1950)", &["Film-Noir"]));
        // Equal counts; Western is encountered first in rating order
        dataset.ratings = vec![rating(1, 1, 4.0), rating(2, 2, 4.0)];

        let distribution = GenreExpansion::expand(&dataset).genre_distribution();
        assert_eq!(distribution[0].genre, "Western");
        assert_eq!(distribution[1].genre, "Film-Noir");
    }

    #[test]
    fn test_shannon_entropy_uniform() {
        // Four equally likely labels: exactly 2 bits
        let entropy = shannon_entropy([5, 5, 5, 5]);
        assert!((entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_shannon_entropy_degenerate() {
        assert_eq!(shannon_entropy([42]), 0.0);
        assert_eq!(shannon_entropy([]), 0.0);
    }

    #[test]
    fn test_average_entropy_empty_is_zero() {
        // Mean over zero users is reported as 0, never NaN
        let average = average_entropy(&[]);
        assert_eq!(average, 0.0);
        assert!(!average.is_nan());
    }

    #[test]
    fn test_average_entropy() {
        let entropies = vec![
            UserEntropy { user_id: 1, genre_entropy: 1.0 },
            UserEntropy { user_id: 2, genre_entropy: 2.0 },
        ];
        assert!((average_entropy(&entropies) - 1.5).abs() < 1e-12);
    }
}
