use commons_metadata::{CommonsClient, CommonsMetadataError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CommonsMetadataError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let title = std::env::args().nth(1).unwrap_or_else(|| {
        "File:Webysther_20211009111944_-_Igreja_Matriz_de_Nossa_Senhora_da_Candelária.jpg"
            .to_owned()
    });

    let client = CommonsClient::builder().build()?;

    println!("{}", client.get_location(&title).await?);
    println!("{}", client.get_country(&title).await?);
    println!("{}", client.date_taken(&title).await?);
    println!("{}", client.get_camera(&title).await?);
    println!("{}", client.get_dimension(&title).await?);
    println!("{}", client.get_coordinates(&title).await?);

    Ok(())
}
