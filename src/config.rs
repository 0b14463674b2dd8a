use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://travel_listings.db?mode=rwc".to_string()),
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000),
        }
    }
}
