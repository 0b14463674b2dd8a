#[tokio::main]
async fn main() -> Result<(), travel_listings::error::AppError> {
    travel_listings::run().await
}
