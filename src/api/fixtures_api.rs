use crate::api::queries::FIXTURES_URL;
use crate::config::Config;
use crate::error::{FixturesError, Result};
use crate::models::{DisplayRecord, FixtureState};
use crate::utils::catalog::Catalog;
use crate::utils::normalizer::normalize;
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const AUTH_ERROR_KEY: &str = "token";

/// A fixture as returned by API-Football
#[derive(Debug, Deserialize)]
struct ApiFixture {
    fixture: ApiFixtureInfo,
    teams: ApiTeams,
    goals: ApiScoreLine,
    score: ApiScore,
}

#[derive(Debug, Deserialize)]
struct ApiFixtureInfo {
    date: String,
    status: ApiStatus,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    long: String,
    elapsed: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiTeams {
    home: ApiTeam,
    away: ApiTeam,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiScoreLine {
    home: Option<u32>,
    away: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiScore {
    penalty: ApiScoreLine,
}

impl ApiFixture {
    fn into_state(self) -> Option<FixtureState> {
        // The date comes back in the requested timezone, so its wall clock is the kickoff
        let kickoff = DateTime::parse_from_rfc3339(&self.fixture.date)
            .ok()?
            .format("%H:%M")
            .to_string();

        Some(FixtureState {
            team_a: self.teams.home.name,
            team_b: self.teams.away.name,
            goals_a: self.goals.home,
            goals_b: self.goals.away,
            elapsed: self.fixture.status.elapsed,
            status: self.fixture.status.long,
            kickoff,
            penalty_a: self.score.penalty.home,
            penalty_b: self.score.penalty.away,
        })
    }
}

/// True when the URL targets the fixtures endpoint and carries query parameters
pub fn is_valid_url(url: &str) -> bool {
    let mut parts = url.split('?');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(host), Some(params), None) => host == FIXTURES_URL && !params.is_empty(),
        _ => false,
    }
}

fn signals_bad_key(errors: &Value) -> bool {
    match errors {
        Value::Object(map) => map.contains_key(AUTH_ERROR_KEY),
        Value::Array(items) => items.iter().any(|e| e.as_str() == Some(AUTH_ERROR_KEY)),
        Value::String(s) => s.contains(AUTH_ERROR_KEY),
        _ => false,
    }
}

fn is_empty_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Turn a decoded response body into display rows.
///
/// `Ok(None)` when the API reported a non-authentication error or when any
/// fixture is missing a field we need.
fn interpret_payload(payload: Value) -> Result<Option<Vec<DisplayRecord>>> {
    let errors = payload.get("errors").cloned().unwrap_or(Value::Null);
    if signals_bad_key(&errors) {
        return Err(FixturesError::Authentication);
    }
    if !is_empty_errors(&errors) {
        warn!("Fixtures API returned errors: {}", errors);
        return Ok(None);
    }

    let Some(response) = payload.get("response").cloned() else {
        warn!("Fixtures API payload has no response field");
        return Ok(None);
    };
    let fixtures: Vec<ApiFixture> = match serde_json::from_value(response) {
        Ok(fixtures) => fixtures,
        Err(e) => {
            warn!("Failed to parse fixtures: {}", e);
            return Ok(None);
        }
    };

    let mut records = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        match fixture.into_state() {
            Some(state) => records.push(normalize(&state)),
            None => {
                warn!("Fixture has an unreadable kickoff date");
                return Ok(None);
            }
        }
    }
    Ok(Some(records))
}

pub struct FixturesApiClient<'a> {
    config: &'a Config,
    catalog: &'a Catalog,
    client: reqwest::Client,
}

impl<'a> FixturesApiClient<'a> {
    pub fn new(config: &'a Config, catalog: &'a Catalog) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(config, catalog, client))
    }

    pub fn with_client(config: &'a Config, catalog: &'a Catalog, client: reqwest::Client) -> Self {
        Self {
            config,
            catalog,
            client,
        }
    }

    fn check_timezone(&self) -> Result<()> {
        if self.catalog.is_valid_timezone(&self.config.timezone) {
            Ok(())
        } else {
            Err(FixturesError::UnknownTimezone(self.config.timezone.clone()))
        }
    }

    /// The GET for a URL, with the API key header and a timezone parameter
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str());
        if url.contains("timezone=") {
            request
        } else {
            request.query(&[("timezone", self.config.timezone.as_str())])
        }
    }

    /// Fetch and normalize the fixtures behind one URL.
    ///
    /// Returns `Ok(None)` when the API could not provide data, whatever the
    /// reason (network, rate limit, malformed payload).
    pub async fn fetch(&self, url: &str) -> Result<Option<Vec<DisplayRecord>>> {
        if !is_valid_url(url) {
            return Err(FixturesError::InvalidUrl(url.to_string()));
        }
        self.check_timezone()?;

        debug!("GET {}", url);
        let response = match self.request(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to reach fixtures API: {}", e);
                return Ok(None);
            }
        };
        if !response.status().is_success() {
            warn!("Fixtures API returned error: {}", response.status());
            return Ok(None);
        }
        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to decode fixtures API response: {}", e);
                return Ok(None);
            }
        };

        interpret_payload(payload)
    }

    /// Fetch every URL in order, giving up on the whole batch at the first one without data
    pub async fn fetch_all(&self, urls: &[String]) -> Result<Option<Vec<DisplayRecord>>> {
        // Also holds when there is nothing to fetch
        self.check_timezone()?;

        let mut all = Vec::new();
        for url in urls {
            match self.fetch(url).await? {
                Some(mut records) => all.append(&mut records),
                None => return Ok(None),
            }
        }
        Ok(Some(all))
    }
}
