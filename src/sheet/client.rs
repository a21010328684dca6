//! Full-range reads and clear-then-rewrite writes against a spreadsheet "values" API

use async_trait::async_trait;
use reqwest::header::CONTENT_LENGTH;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ACTIVITIES_TABLE, SUBJECTS_TABLE};
use crate::error::PlannerError;
use crate::planner::PlannerState;
use crate::sheet::schema;
use crate::traits::StateStore;

static DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// A planner store backed directly by a two-tab spreadsheet.
///
/// Every save clears and rewrites the full range of both tables (subjects
/// first, then activities); every load reads both full ranges back. The access
/// token is supplied by the caller: obtaining and refreshing credentials is
/// not this crate's business.
pub struct SheetClient {
    endpoint: Url,
    spreadsheet_id: String,
    token: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct ValueRange {
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct ValueRangeReply {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetClient {
    /// Create a client against the default API endpoint. This does not open a
    /// connection yet.
    pub fn new<S: ToString, T: ToString>(spreadsheet_id: S, token: T) -> Result<Self, PlannerError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, spreadsheet_id, token)
    }

    /// Create a client against a non-default endpoint (a test double, a
    /// self-hosted gateway...)
    pub fn with_endpoint<E: AsRef<str>, S: ToString, T: ToString>(endpoint: E, spreadsheet_id: S, token: T) -> Result<Self, PlannerError> {
        Ok(Self {
            endpoint: Url::parse(endpoint.as_ref())?,
            spreadsheet_id: spreadsheet_id.to_string(),
            token: token.to_string(),
            http: reqwest::Client::new(),
        })
    }

    fn values_url(&self, table: &str, suffix: &str) -> Result<Url, PlannerError> {
        Ok(self.endpoint.join(&format!("{}/values/{}{}", self.spreadsheet_id, table, suffix))?)
    }

    async fn read_table(&self, table: &str) -> Result<Vec<Vec<String>>, PlannerError> {
        let url = self.values_url(table, "")?;
        let response = self.http.get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?;
        if response.status().is_success() == false {
            return Err(PlannerError::Transport(format!("unexpected HTTP status code {} from {}", response.status(), url)));
        }

        let reply: ValueRangeReply = serde_json::from_str(&response.text().await?)?;
        Ok(reply.values)
    }

    async fn rewrite_table(&self, table: &str, values: Vec<Vec<String>>) -> Result<(), PlannerError> {
        // The new table may be shorter than the stored one, so the whole range
        // is cleared before writing
        let clear_url = self.values_url(table, ":clear")?;
        let response = self.http.post(clear_url.clone())
            .bearer_auth(&self.token)
            .header(CONTENT_LENGTH, 0)
            .send()
            .await?;
        if response.status().is_success() == false {
            return Err(PlannerError::Transport(format!("unexpected HTTP status code {} from {}", response.status(), clear_url)));
        }

        let update_url = self.values_url(table, "?valueInputOption=RAW")?;
        let response = self.http.put(update_url.clone())
            .bearer_auth(&self.token)
            .json(&ValueRange { values })
            .send()
            .await?;
        if response.status().is_success() == false {
            return Err(PlannerError::Transport(format!("unexpected HTTP status code {} from {}", response.status(), update_url)));
        }
        Ok(())
    }
}

#[async_trait]
impl StateStore for SheetClient {
    async fn fetch(&self) -> Result<PlannerState, PlannerError> {
        let subjects_table = SUBJECTS_TABLE.lock().unwrap().clone();
        let activities_table = ACTIVITIES_TABLE.lock().unwrap().clone();

        let subjects = schema::decode_subjects(&self.read_table(&subjects_table).await?)?;
        let activities = schema::decode_activities(&self.read_table(&activities_table).await?)?;
        Ok(PlannerState::from_parts(subjects, activities))
    }

    async fn replace(&mut self, state: &PlannerState) -> Result<(), PlannerError> {
        let subjects_table = SUBJECTS_TABLE.lock().unwrap().clone();
        let activities_table = ACTIVITIES_TABLE.lock().unwrap().clone();

        self.rewrite_table(&subjects_table, schema::encode_subjects(state.subjects())).await?;
        self.rewrite_table(&activities_table, schema::encode_activities(state.activities())).await?;
        Ok(())
    }
}
