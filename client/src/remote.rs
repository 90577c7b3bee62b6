use serde::de::DeserializeOwned;
use tracing::debug;

use squadboard_shared::{AcquisitionError, DataSupplier, MemberRecord, Snapshot, SquadRecord};

use crate::config::{Config, MEMBERS_PATH, SQUADS_PATH, USER_AGENT};

const BODY_PREVIEW_CHARS: usize = 200;

/// Loads both collections from the dashboard API.
#[derive(Debug, Clone)]
pub struct RemoteSupplier {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSupplier {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AcquisitionError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| AcquisitionError::Client(e.to_string()))?;
        Ok(Self::new(client, config.api_url.as_str()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, AcquisitionError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "requesting collection");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AcquisitionError::Request {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| AcquisitionError::Request {
            endpoint: path.to_string(),
            message: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(AcquisitionError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                preview: body_preview(&bytes),
            });
        }

        decode_collection(path, &bytes)
    }
}

impl DataSupplier for RemoteSupplier {
    async fn supply(&self) -> Result<Snapshot, AcquisitionError> {
        let (squads, members) = tokio::try_join!(
            self.fetch_collection::<SquadRecord>(SQUADS_PATH),
            self.fetch_collection::<MemberRecord>(MEMBERS_PATH),
        )?;
        Ok(Snapshot { squads, members })
    }
}

fn decode_collection<T: DeserializeOwned>(
    path: &str,
    bytes: &[u8],
) -> Result<Vec<T>, AcquisitionError> {
    serde_json::from_slice(bytes).map_err(|e| AcquisitionError::Decode {
        endpoint: path.to_string(),
        message: format!("{e}; body preview: {}", body_preview(bytes)),
    })
}

fn body_preview(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect()
}
