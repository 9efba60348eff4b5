//! # Commons Metadata
//!
//! Look up image metadata for files hosted on Wikimedia Commons.
//!
//! This crate queries the Commons `action=query` API for a named file and
//! extracts specific metadata fields, returning them either as typed values
//! or as ready-to-print messages with fixed fallbacks for anything the file
//! does not carry.
//!
//! ## Key Features
//!
//! - **Embedded metadata**: Reads the `commonmetadata` records (Exif-derived
//!   fields such as the capture date, camera model, and shoot location).
//! - **Dimensions**: Retrieves the original pixel dimensions and byte size.
//! - **Geo-coordinates**: Retrieves the latitude/longitude attached to the
//!   file's page.
//! - **Formatted messages**: Every lookup has a formatted variant that
//!   substitutes a fixed "unavailable" message when the data is absent.
//!
//! ## Usage
//!
//! Create a [`CommonsClient`] and call its lookup methods with a `File:`
//! title.
//!
//! ```rust,no_run
//! use commons_metadata::CommonsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), commons_metadata::CommonsMetadataError> {
//!     let client = CommonsClient::builder().build()?;
//!
//!     let file = "File:Example.jpg";
//!     println!("{}", client.date_taken(file).await?);
//!     println!("{}", client.get_camera(file).await?);
//!     println!("{}", client.get_coordinates(file).await?);
//!
//!     Ok(())
//! }
//! ```

pub mod commons_client;
pub mod error;
pub mod features;
pub mod query;

pub use commons_client::CommonsClient;
pub use error::CommonsMetadataError;
pub use features::coordinates::Coordinates;
pub use features::dimensions::ImageDimensions;
pub use features::metadata::{MetadataField, field_value};
pub use query::QueryError;
