use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use futures_util::future::join_all;
use pokeduel_battle::HistoryStore;
use pokeduel_protocol::{BattleRecord, RecordId, TeamMember, parse_battle_records, parse_team};
use pokeduel_team::Roster;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;

/// Client for the json-server backing store (`/team`, `/battles`)
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.store_url.trim_end_matches('/').to_string(),
        }
    }

    /// The stored team, in insertion order
    pub async fn team(&self) -> Result<Roster> {
        let body = self.get(&self.url("team")).await?;
        let members = parse_team(&body).context("Failed to parse team")?;
        Ok(Roster::from_members(members))
    }

    /// Add a member, enforcing the team-building rules first
    pub async fn add_team_member(&self, member: &TeamMember) -> Result<TeamMember> {
        let roster = self.team().await?;
        roster.check_add(&member.name)?;

        let stored = self.post(&self.url("team"), member).await?;
        tracing::info!(name = %member.name, "Added to team");
        Ok(stored)
    }

    pub async fn remove_team_member(&self, id: &RecordId) -> Result<()> {
        let mut roster = self.team().await?;
        let removed = roster.remove(id)?;

        self.delete(&self.url(&format!("team/{}", id))).await?;
        tracing::info!(name = %removed.name, "Removed from team");
        Ok(())
    }

    pub async fn battle_records(&self) -> Result<Vec<BattleRecord>> {
        let body = self.get(&self.url("battles")).await?;
        parse_battle_records(&body).context("Failed to parse battle records")
    }

    pub async fn save_battle_record(&self, record: &BattleRecord) -> Result<BattleRecord> {
        self.post(&self.url("battles"), record).await
    }

    pub async fn delete_battle_record(&self, id: &RecordId) -> Result<()> {
        self.delete(&self.url(&format!("battles/{}", id))).await
    }

    /// json-server has no bulk delete, so every record gets its own
    /// request. The requests run concurrently; when any of them fails the
    /// store may be left partly cleared and the error lists every record
    /// that survived. Returns how many were deleted.
    pub async fn clear_battle_records(&self) -> Result<usize> {
        let records = self.battle_records().await?;
        let ids: Vec<RecordId> = records
            .iter()
            .filter_map(|record| {
                if record.id.is_none() {
                    tracing::warn!(player1 = %record.player1, "Battle record without id, skipping");
                }
                record.id.clone()
            })
            .collect();

        let results = join_all(ids.iter().map(|id| self.delete_battle_record(id))).await;
        tally_deletes(ids.into_iter().zip(results))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("Store rejected GET {}", url))?;

        response.text().await.context("Failed to read store response")
    }

    async fn post<T: Serialize, R: DeserializeOwned>(&self, url: &str, body: &T) -> Result<R> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("Store rejected POST {}", url))?;

        response
            .json()
            .await
            .context("Failed to parse store response")
    }

    async fn delete(&self, url: &str) -> Result<()> {
        self.http
            .delete(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?
            .error_for_status()
            .with_context(|| format!("Store rejected DELETE {}", url))?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for StoreClient {
    async fn append_battle_record(&self, record: &BattleRecord) -> Result<BattleRecord> {
        self.save_battle_record(record).await
    }

    async fn list_battle_records(&self) -> Result<Vec<BattleRecord>> {
        self.battle_records().await
    }

    async fn delete_all_battle_records(&self) -> Result<()> {
        let deleted = self.clear_battle_records().await?;
        tracing::debug!(deleted, "Deleted battle records");
        Ok(())
    }
}

/// Count successful deletes, or fail naming every record left behind
fn tally_deletes(results: impl IntoIterator<Item = (RecordId, Result<()>)>) -> Result<usize> {
    let mut deleted = 0;
    let mut failed = Vec::new();

    for (id, result) in results {
        match result {
            Ok(()) => deleted += 1,
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to delete battle record");
                failed.push(id.to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(deleted)
    } else {
        Err(anyhow!(
            "Deleted {} battle records, {} failed: {}",
            deleted,
            failed.len(),
            failed.join(", ")
        ))
    }
}
