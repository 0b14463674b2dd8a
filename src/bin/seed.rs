use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use travel_listings::{
    config::Config,
    domain::services::seeder::{SeedOptions, Seeder},
    error::AppError,
    infra::factory::bootstrap_state,
    init_logging,
};

/// Seeds the database with sample listings, users, bookings, and reviews.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Clear existing data before seeding
    #[arg(long)]
    clear: bool,

    /// Number of sample users to create
    #[arg(long = "num_users", default_value_t = 5)]
    num_users: usize,

    /// Number of sample listings per host
    #[arg(long = "num_listings_per_host", default_value_t = 3)]
    num_listings_per_host: usize,

    /// Number of sample bookings per listing
    #[arg(long = "num_bookings_per_listing", default_value_t = 2)]
    num_bookings_per_listing: usize,

    /// Number of sample reviews per listing
    #[arg(long = "num_reviews_per_listing", default_value_t = 1)]
    num_reviews_per_listing: usize,

    /// Seed for the random generator, for reproducible fixtures
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&Args> for SeedOptions {
    fn from(args: &Args) -> Self {
        Self {
            clear: args.clear,
            num_users: args.num_users,
            num_listings_per_host: args.num_listings_per_host,
            num_bookings_per_listing: args.num_bookings_per_listing,
            num_reviews_per_listing: args.num_reviews_per_listing,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let _guard = init_logging();
    let args = Args::parse();

    let config = Config::from_env();
    let state = bootstrap_state(&config).await?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using fixed random seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let report = Seeder::from_state(&state)
        .run(&SeedOptions::from(&args), &mut rng)
        .await?;

    info!(
        users_created = report.users_created,
        listings = report.listings_created,
        bookings = report.bookings_created,
        reviews = report.reviews_created,
        "Seeding finished against {}",
        config.database_url
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let args = Args::parse_from(["seed"]);
        assert_eq!(SeedOptions::from(&args), SeedOptions::default());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_snake_case_flags() {
        let args = Args::parse_from([
            "seed", "--clear", "--num_users", "2", "--num_listings_per_host", "1",
            "--num_bookings_per_listing", "0", "--num_reviews_per_listing", "4", "--seed", "7",
        ]);
        let options = SeedOptions::from(&args);

        assert!(options.clear);
        assert_eq!(options.num_users, 2);
        assert_eq!(options.num_listings_per_host, 1);
        assert_eq!(options.num_bookings_per_listing, 0);
        assert_eq!(options.num_reviews_per_listing, 4);
        assert_eq!(args.seed, Some(7));
    }
}
