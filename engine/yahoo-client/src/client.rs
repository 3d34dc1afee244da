use crate::error::{YahooError, YahooResult};
use crate::models::{
    AddDropRequest, FantasyContent, PlayerPosition, PlayerXml, RosterUpdate, to_xml_body,
};
use chrono::NaiveDate;
use lineup_core::{OptimizedLineup, Position, RosterPlayer};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

const FANTASY_API_BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";
const TOKEN_URL: &str = "https://api.login.yahoo.com/oauth2/get_token";

/// Yahoo OAuth application credentials and team coordinates
#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    /// League key, e.g. "419.l.6795"
    pub league_id: String,
    /// Team id within the league, e.g. "4"
    pub team_id: String,
}

impl YahooConfig {
    /// Create config from environment variables
    pub fn from_env() -> YahooResult<Self> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| YahooError::Config(format!("{name} not set")))
        };
        Ok(Self {
            client_id: var("YAHOO_CLIENT_ID")?,
            client_secret: var("YAHOO_CLIENT_SECRET")?,
            refresh_token: var("YAHOO_REFRESH_TOKEN")?,
            league_id: var("YAHOO_LEAGUE_ID")?,
            team_id: var("YAHOO_TEAM_ID")?,
        })
    }

    pub fn team_key(&self) -> String {
        format!("{}.t.{}", self.league_id, self.team_id)
    }
}

/// OAuth token response from Yahoo's refresh-token grant
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub token_type: String,
}

/// Yahoo Fantasy API client.
///
/// `refresh_auth` must succeed before any roster call; every failure path is
/// surfaced to the caller so the engine is never run on partial inputs.
pub struct YahooClient {
    config: YahooConfig,
    http: Client,
    token: Option<TokenResponse>,
}

impl YahooClient {
    pub fn new(config: YahooConfig) -> YahooResult<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { config, http, token: None })
    }

    /// Exchange the long-lived refresh token for an access token.
    pub async fn refresh_auth(&mut self) -> YahooResult<()> {
        info!("Refreshing Yahoo OAuth token");
        let params = [
            ("grant_type", "refresh_token"),
            ("redirect_uri", "oob"),
            ("refresh_token", self.config.refresh_token.as_str()),
        ];
        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YahooError::Auth { status, body });
        }

        let token: TokenResponse = response.json().await?;
        info!(expires_in = token.expires_in, "Yahoo OAuth token refreshed");
        self.token = Some(token);
        Ok(())
    }

    fn access_token(&self) -> YahooResult<&str> {
        self.token.as_ref().map(|t| t.access_token.as_str()).ok_or(YahooError::NotAuthenticated)
    }

    /// Fetch the current roster, decoded through the typed XML schema into
    /// engine players.
    pub async fn roster_players(&self) -> YahooResult<Vec<RosterPlayer>> {
        let url =
            format!("{FANTASY_API_BASE_URL}/team/{}/roster/players", self.config.team_key());
        info!(%url, "Fetching roster");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token()?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(YahooError::Api { status, body });
        }

        let content: FantasyContent = quick_xml::de::from_str(&body)?;
        let players: Vec<RosterPlayer> = content
            .team
            .roster
            .players
            .player
            .into_iter()
            .map(PlayerXml::into_roster_player)
            .collect();
        info!(count = players.len(), "Fetched roster players");
        Ok(players)
    }

    /// PUT the optimized lineup as the roster for `date`.
    pub async fn set_roster(&self, date: NaiveDate, lineup: &OptimizedLineup) -> YahooResult<()> {
        let update = RosterUpdate::from_lineup(date, lineup);
        info!(players = lineup.player_count(), %date, "Submitting optimized roster");
        self.put_roster(&update).await
    }

    /// PUT explicit `(player_key, position)` assignments for `date`. Used by
    /// the goalie swap flow, which only touches G/BN.
    pub async fn swap_slots(
        &self,
        date: NaiveDate,
        assignments: &[(String, Position)],
    ) -> YahooResult<()> {
        let players: Vec<PlayerPosition> = assignments
            .iter()
            .map(|(key, position)| PlayerPosition::new(key, position.code()))
            .collect();
        let update = RosterUpdate::for_date(date, players);
        info!(players = assignments.len(), %date, "Submitting slot swaps");
        self.put_roster(&update).await
    }

    async fn put_roster(&self, update: &RosterUpdate) -> YahooResult<()> {
        let url = format!("{FANTASY_API_BASE_URL}/team/{}/roster", self.config.team_key());
        let body = to_xml_body(update)?;

        let response = self
            .http
            .put(&url)
            .bearer_auth(self.access_token()?)
            .header("Content-Type", "application/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(YahooError::Api { status, body });
        }
        info!("Roster update accepted");
        Ok(())
    }

    /// POST an add/drop transaction against the league.
    pub async fn add_drop(&self, add_key: &str, drop_key: &str) -> YahooResult<()> {
        let url = format!("{FANTASY_API_BASE_URL}/league/{}/transactions", self.config.league_id);
        let request = AddDropRequest::new(&self.config.team_key(), add_key, drop_key);
        let body = to_xml_body(&request)?;
        info!(add = add_key, drop = drop_key, "Submitting add/drop transaction");

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token()?)
            .header("Content-Type", "application/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Add/drop rejected");
            return Err(YahooError::Api { status, body });
        }
        Ok(())
    }
}
