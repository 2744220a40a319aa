//! STRATZ GraphQL client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use url::Url;

use super::{queries, GatewayError, StatsGateway, WinStatsQuery};
use crate::models::{
    GameVersion, HeroId, HeroInfo, HeroMatchupStats, MatchupOrder, RankBracket, RawDailyStat,
    RawMatchup,
};

/// Configuration for the STRATZ client.
#[derive(Debug, Clone)]
pub struct StratzGatewayConfig {
    /// GraphQL endpoint
    pub endpoint: Url,

    /// Bearer token
    pub api_token: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string (STRATZ expects "STRATZ_API")
    pub user_agent: String,
}

impl StratzGatewayConfig {
    pub fn new(endpoint: Url, api_token: impl Into<String>) -> Self {
        Self {
            endpoint,
            api_token: api_token.into(),
            timeout: Duration::from_secs(30),
            user_agent: "STRATZ_API".to_string(),
        }
    }
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ConstantsData<T> {
    constants: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameVersionsData {
    game_versions: Option<Vec<GameVersion>>,
}

#[derive(Debug, Deserialize)]
struct HeroesData {
    heroes: Option<Vec<HeroInfo>>,
}

/// Hero list from a constants response; null at any level means no heroes.
fn hero_list(data: Option<ConstantsData<HeroesData>>) -> Vec<HeroInfo> {
    data.and_then(|d| d.constants)
        .and_then(|c| c.heroes)
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeroStatsData<T> {
    hero_stats: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WinDayData {
    win_day: Option<Vec<RawDailyStat>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchUpData {
    match_up: Option<Vec<MatchUpRow>>,
}

#[derive(Debug, Deserialize)]
struct MatchUpRow {
    with: Option<Vec<RawMatchup>>,
    vs: Option<Vec<RawMatchup>>,
}

/// Decode a GraphQL response body, surfacing the `errors` array.
fn parse_response<T: DeserializeOwned>(body: &str) -> Result<Option<T>, GatewayError> {
    let response: GraphQlResponse<T> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(GatewayError::GraphQl(messages.join("; ")));
    }

    Ok(response.data)
}

/// Statistics gateway backed by the STRATZ GraphQL API.
pub struct StratzGateway {
    client: Client,
    endpoint: Url,
}

impl StratzGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: StratzGatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| GatewayError::InvalidHeader(format!("user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| GatewayError::InvalidHeader(format!("authorization: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Create a gateway reading the API token from an environment variable.
    pub fn from_env(
        endpoint: Url,
        token_env: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, GatewayError> {
        let api_token = std::env::var(token_env)
            .map_err(|_| GatewayError::MissingToken(token_env.to_string()))?;

        Self::new(StratzGatewayConfig {
            endpoint,
            api_token,
            timeout,
            user_agent: user_agent.to_string(),
        })
    }

    /// Run one GraphQL query and decode its `data` field.
    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<Option<T>, GatewayError> {
        debug!("POST {} variables={}", self.endpoint, variables);

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                body
            };
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

#[async_trait]
impl StatsGateway for StratzGateway {
    fn name(&self) -> &'static str {
        "stratz"
    }

    async fn list_game_versions(&self) -> Result<Vec<GameVersion>, GatewayError> {
        let data: Option<ConstantsData<GameVersionsData>> =
            self.query(queries::GAME_VERSIONS, json!({})).await?;

        Ok(data
            .and_then(|d| d.constants)
            .and_then(|c| c.game_versions)
            .unwrap_or_default())
    }

    async fn list_heroes(
        &self,
        game_version_id: Option<u32>,
        language: &str,
    ) -> Result<Vec<HeroInfo>, GatewayError> {
        let variables = json!({
            "gameVersionId": game_version_id,
            "language": language,
        });
        let data: Option<ConstantsData<HeroesData>> =
            self.query(queries::HEROES, variables).await?;

        Ok(hero_list(data))
    }

    async fn fetch_daily_win_stats(
        &self,
        query: &WinStatsQuery<'_>,
    ) -> Result<Vec<RawDailyStat>, GatewayError> {
        let variables = json!({
            "take": query.take,
            "bracketIds": [query.bracket.as_str()],
            "positionIds": [query.position.as_str()],
            "gameModeIds": query.modes,
        });
        let data: Option<HeroStatsData<WinDayData>> =
            self.query(queries::WIN_DAY, variables).await?;

        Ok(data
            .and_then(|d| d.hero_stats)
            .and_then(|s| s.win_day)
            .unwrap_or_default())
    }

    async fn fetch_hero_matchups(
        &self,
        hero_id: HeroId,
        bracket: &RankBracket,
        order_by: MatchupOrder,
        limit: usize,
    ) -> Result<HeroMatchupStats, GatewayError> {
        let variables = json!({
            "heroId": hero_id,
            "bracketBasicIds": [bracket.basic()],
            "orderBy": order_by.as_query_value(),
            "take": limit,
        });
        let data: Option<HeroStatsData<MatchUpData>> =
            self.query(queries::HERO_MATCHUP, variables).await?;

        let row = data
            .and_then(|d| d.hero_stats)
            .and_then(|s| s.match_up)
            .and_then(|rows| rows.into_iter().next());

        Ok(match row {
            Some(row) => HeroMatchupStats {
                with: row.with.unwrap_or_default(),
                vs: row.vs.unwrap_or_default(),
            },
            None => HeroMatchupStats::default(),
        })
    }
}
