use data_loader::Dataset;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/ml-25m");

    println!("Loading MovieLens dataset...\n");

    let start = Instant::now();
    let dataset = Dataset::load_from_dir(data_dir)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (ratings, movies, tags) = dataset.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Ratings: {}", ratings);
    println!("Movies: {}", movies);
    println!("Tags: {}", tags);
    println!("\nPerformance: {:.0} ratings/second",
             ratings as f64 / elapsed.as_secs_f64());
}
