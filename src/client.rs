//! This module provides a client for the JSON relay in front of the spreadsheet store

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::PlannerError;
use crate::planner::PlannerState;
use crate::traits::StateStore;

/// A planner store reached through the HTTP relay.
///
/// The relay exposes the whole state as one JSON document: `GET api/data`
/// returns it, `POST api/save` replaces it and acknowledges with
/// `{"success": true}`. Anything else (a failure status, a missing
/// acknowledgment) surfaces as a [`PlannerError::Transport`].
pub struct RelayClient {
    base_url: Url,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct SaveReceipt {
    #[serde(default)]
    success: bool,
}

impl RelayClient {
    /// Create a client. This does not open a connection yet.
    ///
    /// `base_url` should end with a `/` so the endpoint paths join under it.
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, PlannerError> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, PlannerError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl StateStore for RelayClient {
    async fn fetch(&self) -> Result<PlannerState, PlannerError> {
        let url = self.endpoint("api/data")?;
        let response = self.http.get(url.clone()).send().await?;
        if response.status().is_success() == false {
            return Err(PlannerError::Transport(format!("unexpected HTTP status code {} from {}", response.status(), url)));
        }

        let body = response.text().await?;
        let state = serde_json::from_str(&body)?;
        Ok(state)
    }

    async fn replace(&mut self, state: &PlannerState) -> Result<(), PlannerError> {
        let url = self.endpoint("api/save")?;
        let response = self.http.post(url.clone()).json(state).send().await?;
        if response.status().is_success() == false {
            return Err(PlannerError::Transport(format!("unexpected HTTP status code {} from {}", response.status(), url)));
        }

        let receipt: SaveReceipt = serde_json::from_str(&response.text().await?)?;
        if receipt.success == false {
            return Err(PlannerError::Transport(format!("the relay at {} did not acknowledge the save", url)));
        }
        Ok(())
    }
}
