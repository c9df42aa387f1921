use analysis::{
    average_entropy, movie_popularity, write_summary, BasicStats, GenreExpansion, Summary,
    SUMMARY_FILE,
};
use anyhow::{Context, Result};
use charts::{
    render_genre_distribution, render_movie_popularity, render_rating_distribution,
    render_user_entropy, GENRE_DISTRIBUTION_FILE, MOVIE_POPULARITY_FILE,
    RATING_DISTRIBUTION_FILE, USER_ENTROPY_FILE,
};
use clap::Parser;
use colored::Colorize;
use data_loader::Dataset;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// ReelStats - MovieLens dataset analysis
#[derive(Parser)]
#[command(name = "reel-stats")]
#[command(about = "Exploratory analysis over a MovieLens dataset", long_about = None)]
struct Cli {
    /// Path to MovieLens dataset directory
    #[arg(short, long, default_value = "data/ml-25m")]
    data_dir: PathBuf,

    /// Directory for charts and the summary file (created if absent)
    #[arg(short, long, default_value = "results")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;

    // Load the three source tables (this may take a moment)
    println!(
        "Loading MovieLens dataset from {}...",
        cli.data_dir.display()
    );
    let start = Instant::now();
    let dataset =
        Dataset::load_from_dir(&cli.data_dir).context("Failed to load MovieLens dataset")?;
    let (ratings, movies, tags) = dataset.counts();
    println!(
        "{} Loaded {} ratings, {} movies, {} tags in {:?}",
        "✓".green(),
        ratings,
        movies,
        tags,
        start.elapsed()
    );

    // Basic stats over the ratings table
    let stats = BasicStats::compute(&dataset.ratings);
    println!("\n{}", "Basic statistics:".bold().blue());
    println!("{}Unique users:  {}", "• ".green(), stats.n_users);
    println!("{}Unique movies: {}", "• ".green(), stats.n_movies);
    println!("{}Total ratings: {}", "• ".green(), stats.total_ratings);

    // Rating distribution chart
    let rating_values: Vec<f32> = dataset.ratings.iter().map(|r| r.rating).collect();
    render_rating_distribution(&rating_values, &cli.output_dir)
        .context("Failed to render rating distribution")?;
    println!("\n{} Wrote {}", "✓".green(), RATING_DISTRIBUTION_FILE);

    // Per-movie aggregates feed the popularity chart
    let popularity = movie_popularity(&dataset);
    let rating_counts: Vec<u64> = popularity.iter().map(|p| p.rating_count).collect();
    render_movie_popularity(&rating_counts, &cli.output_dir)
        .context("Failed to render movie popularity")?;
    println!("{} Wrote {}", "✓".green(), MOVIE_POPULARITY_FILE);

    // Genre expansion feeds the entropy and distribution charts
    let expansion = GenreExpansion::expand(&dataset);
    let entropies = expansion.user_entropies();
    let entropy_values: Vec<f64> = entropies.iter().map(|e| e.genre_entropy).collect();
    render_user_entropy(&entropy_values, &cli.output_dir)
        .context("Failed to render user genre entropy")?;
    println!("{} Wrote {}", "✓".green(), USER_ENTROPY_FILE);

    let shares: Vec<(String, f64)> = expansion
        .genre_distribution()
        .iter()
        .map(|s| (s.genre.clone(), s.proportion))
        .collect();
    render_genre_distribution(&shares, &cli.output_dir)
        .context("Failed to render global genre distribution")?;
    println!("{} Wrote {}", "✓".green(), GENRE_DISTRIBUTION_FILE);

    let average = average_entropy(&entropies);
    println!(
        "\n{}Average user genre entropy: {:.3}",
        "• ".cyan(),
        average
    );

    // Summary row, the only non-image output
    let summary = Summary {
        n_users: stats.n_users,
        n_movies: stats.n_movies,
        total_ratings: stats.total_ratings,
        average_genre_entropy: average,
    };
    write_summary(&summary, &cli.output_dir).context("Failed to write summary file")?;
    println!("{} Wrote {}", "✓".green(), SUMMARY_FILE);

    println!(
        "\n{} Analysis complete! Results saved in {}",
        "✓".green(),
        cli.output_dir.display()
    );
    Ok(())
}
