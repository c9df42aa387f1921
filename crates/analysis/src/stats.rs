//! Scalar aggregates over the ratings table.

use data_loader::Rating;
use std::collections::HashSet;

/// Dataset-wide counters derived from the ratings table.
///
/// These are the three scalars the summary reports alongside the
/// average genre entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStats {
    /// Count of distinct userIds appearing in ratings
    pub n_users: u64,
    /// Count of distinct movieIds appearing in ratings
    pub n_movies: u64,
    /// Total rating rows
    pub total_ratings: u64,
}

impl BasicStats {
    /// Count distinct users, distinct movies, and total rows.
    ///
    /// Pure aggregation over already-validated data; an empty table
    /// yields zeros with no special casing.
    pub fn compute(ratings: &[Rating]) -> Self {
        let mut users = HashSet::new();
        let mut movies = HashSet::new();
        for rating in ratings {
            users.insert(rating.user_id);
            movies.insert(rating.movie_id);
        }

        Self {
            n_users: users.len() as u64,
            n_movies: movies.len() as u64,
            total_ratings: ratings.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: u32, movie_id: u32, rating: f32) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating,
            timestamp: 1000000,
        }
    }

    #[test]
    fn test_distinct_counts() {
        let ratings = vec![
            rating(1, 10, 5.0),
            rating(1, 20, 3.0),
            rating(2, 10, 4.0),
            rating(2, 10, 4.5), // same user re-rating the same movie
        ];

        let stats = BasicStats::compute(&ratings);
        assert_eq!(stats.n_users, 2);
        assert_eq!(stats.n_movies, 2);
        assert_eq!(stats.total_ratings, 4);
    }

    #[test]
    fn test_empty_ratings() {
        let stats = BasicStats::compute(&[]);
        assert_eq!(stats.n_users, 0);
        assert_eq!(stats.n_movies, 0);
        assert_eq!(stats.total_ratings, 0);
    }
}
