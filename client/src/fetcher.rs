//! HTTP fetcher for the backend's startup listing.
//!
//! The credential is always handed in by the caller; nothing in here reads
//! persisted storage.

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};

use novanest_common::config::Config;
use novanest_common::protocol::decode_startups;
use novanest_common::{Credential, FetchError, Filter, Startup};

/// Anything that can produce the startup list for a filter.
#[allow(async_fn_in_trait)]
pub trait StartupSource {
    async fn list_startups(
        &self,
        credential: &Credential,
        filter: &Filter,
    ) -> Result<Vec<Startup>, FetchError>;
}

/// `GET {base}/api/startups?{filter}` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpStartupSource {
    client: reqwest::Client,
    config: Config,
}

impl HttpStartupSource {
    pub fn new(config: &Config) -> Result<Self> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };

        let client = builder.build().context("Cannot create HTTP client")?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl StartupSource for HttpStartupSource {
    async fn list_startups(
        &self,
        credential: &Credential,
        filter: &Filter,
    ) -> Result<Vec<Startup>, FetchError> {
        let url = self.config.startups_url(&filter.to_query_string());
        if !credential.is_present() {
            warn!("No bearer token stored – sending an empty one");
        }
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, credential.authorization())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let startups = decode_startups(&body)?;
        debug!("Received {} startup(s)", startups.len());
        Ok(startups)
    }
}
