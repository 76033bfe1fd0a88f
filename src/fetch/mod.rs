use reqwest::Client;
use tracing::instrument;

use crate::error::Error;
use crate::parse::RawRecord;
use crate::Result;

/// The DataSF mobile food facility schedule dataset.
static URL: &str = "http://data.sfgov.org/resource/bbb8-hzi6.json";

pub fn make_client() -> Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Fetches the whole schedule dataset in a single request.
#[instrument(skip(client))]
pub async fn schedule(client: &Client) -> Result<Vec<RawRecord>> {
    schedule_from(client, URL).await
}

async fn schedule_from(client: &Client, url: &str) -> Result<Vec<RawRecord>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status,
            url: url.to_owned(),
        });
    }
    let body = response.text().await?;
    let records: Vec<RawRecord> = serde_json::from_str(&body)?;
    log::debug!("fetched {} raw schedule records", records.len());
    Ok(records)
}
