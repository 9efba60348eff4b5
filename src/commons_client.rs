use crate::CommonsMetadataError;
use crate::features::coordinates::{self, Coordinates};
use crate::features::dimensions::{self, ImageDimensions};
use crate::features::metadata::{self, MetadataField};
use crate::query::{self, QueryError};
use bon::bon;
use serde_json::Value;
use std::time::Duration;

const COMMONS_API_URL: &str = "https://commons.wikimedia.org/w/api.php";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("commons_metadata/", env!("CARGO_PKG_VERSION"));

/// Client for the Wikimedia Commons metadata API.
///
/// Holds a configured HTTP client and the API endpoint. It is designed to be
/// created once and reused for looking up multiple files; every lookup
/// performs exactly one request.
///
/// File titles are passed to the API verbatim (`File:` prefix included) and
/// are not percent-encoded, so they must already be safe to embed in a URL.
///
/// Use the builder pattern to construct an instance:
/// ```rust,no_run
/// use commons_metadata::CommonsClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), commons_metadata::CommonsMetadataError> {
/// let client = CommonsClient::builder().build()?;
/// println!("{}", client.date_taken("File:Example.jpg").await?);
/// # Ok(())
/// # }
/// ```
pub struct CommonsClient {
    http: reqwest::Client,
    base_url: String,
}

#[bon]
impl CommonsClient {
    /// Constructs a `CommonsClient` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `base_url: Option<String>` - An alternative API endpoint. Defaults to the public Commons endpoint, `https://commons.wikimedia.org/w/api.php`.
    /// * `timeout: Duration` - (Default: 30 seconds) Request timeout applied to every lookup.
    /// * `user_agent: Option<String>` - The User-Agent header sent with every request. Defaults to `commons_metadata/<version>`.
    ///
    /// # Errors
    ///
    /// Returns [`CommonsMetadataError::ClientInit`] if the underlying HTTP
    /// client cannot be constructed.
    #[builder]
    pub fn new(
        base_url: Option<String>,
        #[builder(default = REQUEST_TIMEOUT)] timeout: Duration,
        user_agent: Option<String>,
    ) -> Result<Self, CommonsMetadataError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or_else(|| USER_AGENT.to_owned()))
            .build()
            .map_err(CommonsMetadataError::ClientInit)?;

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| COMMONS_API_URL.to_owned()),
        })
    }

    async fn fetch_query(
        &self,
        prop: &str,
        iiprop: Option<&str>,
        title: &str,
    ) -> Result<Value, QueryError> {
        let url = query::query_url(&self.base_url, prop, iiprop, title);
        query::fetch(&self.http, &url).await
    }

    async fn metadata_message(
        &self,
        title: &str,
        name: &str,
        prefix: &str,
        label: &str,
    ) -> Result<String, CommonsMetadataError> {
        let fields = self.common_metadata(title).await?;
        Ok(metadata::field_message(&fields, name, prefix, label))
    }

    /// Returns the embedded metadata records (`commonmetadata`) of a file.
    ///
    /// # Errors
    ///
    /// Fails on request/decode errors and when the response carries no
    /// `imageinfo`/`commonmetadata` block at all, which is how the API
    /// responds for titles that do not exist.
    pub async fn common_metadata(
        &self,
        title: &str,
    ) -> Result<Vec<MetadataField>, CommonsMetadataError> {
        let document = self
            .fetch_query("imageinfo", Some("commonmetadata"), title)
            .await?;
        let page = query::single_page(&document)?;
        Ok(metadata::common_metadata(page)?)
    }

    /// Looks up a single named metadata record; first match wins.
    pub async fn metadata_field(
        &self,
        title: &str,
        name: &str,
    ) -> Result<Option<String>, CommonsMetadataError> {
        let fields = self.common_metadata(title).await?;
        Ok(metadata::field_value(&fields, name).map(str::to_owned))
    }

    /// Returns the pixel dimensions and byte size of a file, or `None` when
    /// the response carries no image info.
    pub async fn dimensions(
        &self,
        title: &str,
    ) -> Result<Option<ImageDimensions>, CommonsMetadataError> {
        let document = self
            .fetch_query("imageinfo", Some("dimensions"), title)
            .await?;
        let page = query::single_page(&document)?;
        Ok(dimensions::dimensions(page))
    }

    /// Returns the geo-coordinates of a file, or `None` when the page has
    /// none.
    pub async fn coordinates(
        &self,
        title: &str,
    ) -> Result<Option<Coordinates>, CommonsMetadataError> {
        let document = self.fetch_query("coordinates", None, title).await?;
        let page = query::single_page(&document)?;
        Ok(coordinates::coordinates(page))
    }

    /// Returns the primary location where the image was taken, formatted as
    /// `Image Location: <value>`.
    pub async fn get_location(&self, title: &str) -> Result<String, CommonsMetadataError> {
        self.metadata_message(title, "SublocationDest", "Image Location", "Location")
            .await
    }

    /// Returns the country where the image was taken, formatted as
    /// `Country Location: <value>`.
    pub async fn get_country(&self, title: &str) -> Result<String, CommonsMetadataError> {
        self.metadata_message(title, "CountryDest", "Country Location", "Country")
            .await
    }

    /// Returns the date and time the image was originally taken, formatted
    /// as `Date of Image: <value>`.
    pub async fn date_taken(&self, title: &str) -> Result<String, CommonsMetadataError> {
        self.metadata_message(title, "DateTimeOriginal", "Date of Image", "Date of Image")
            .await
    }

    /// Returns the camera model used for the image, formatted as
    /// `Camera Model: <value>`.
    pub async fn get_camera(&self, title: &str) -> Result<String, CommonsMetadataError> {
        self.metadata_message(title, "Model", "Camera Model", "Camera Model")
            .await
    }

    /// Returns the original dimensions of the image, formatted as
    /// `Image Dimensions: <info>` with the raw info object rendered as JSON,
    /// or `Image dimensions unavailable.` when the response has none.
    pub async fn get_dimension(&self, title: &str) -> Result<String, CommonsMetadataError> {
        let document = self
            .fetch_query("imageinfo", Some("dimensions"), title)
            .await?;
        let page = query::single_page(&document)?;
        Ok(dimensions::dimensions_message(page))
    }

    /// Returns the geo-location of the image, formatted as
    /// `Latitude: <lat>, Longitude: <lon>`, or `Geo-location unavailable.`
    /// when the page carries no coordinates.
    pub async fn get_coordinates(&self, title: &str) -> Result<String, CommonsMetadataError> {
        let document = self.fetch_query("coordinates", None, title).await?;
        let page = query::single_page(&document)?;
        Ok(coordinates::coordinates_message(page))
    }
}
