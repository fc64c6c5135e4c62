use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;

const EMBEDDED_COMPETITIONS: &str = include_str!("../../data/competitions.json");
const EMBEDDED_TIMEZONES: &str = include_str!("../../data/timezones.json");

/// A country (or continental grouping) and its competition IDs, in query order
#[derive(Debug, Clone, Deserialize)]
pub struct CountryCompetitions {
    pub code: String,
    pub name: String,
    pub competitions: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompetitionTables {
    countries: Vec<CountryCompetitions>,
    top: Vec<CountryCompetitions>,
    todays_top: Vec<CountryCompetitions>,
}

/// Read-only reference data: competitions per country and accepted timezones
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<CountryCompetitions>,
    top: Vec<CountryCompetitions>,
    todays_top: Vec<CountryCompetitions>,
    timezones: HashSet<String>,
}

impl Catalog {
    /// Catalog built into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_COMPETITIONS, EMBEDDED_TIMEZONES)
    }

    /// Load competitions from a JSON file, keeping the embedded timezone list
    pub fn load_from_file(competitions_file: &str) -> Result<Self> {
        let json = std::fs::read_to_string(competitions_file)
            .with_context(|| format!("Failed to read catalog file {}", competitions_file))?;
        Self::from_json(&json, EMBEDDED_TIMEZONES)
    }

    pub fn from_json(competitions_json: &str, timezones_json: &str) -> Result<Self> {
        let tables: CompetitionTables = serde_json::from_str(competitions_json)
            .context("Failed to deserialize competition catalog")?;
        let timezones: Vec<String> = serde_json::from_str(timezones_json)
            .context("Failed to deserialize timezone list")?;

        Ok(Self {
            countries: tables
                .countries
                .into_iter()
                .map(|mut c| {
                    c.code = c.code.to_lowercase();
                    c
                })
                .collect(),
            top: tables.top,
            todays_top: tables.todays_top,
            timezones: timezones.into_iter().collect(),
        })
    }

    /// Competition IDs for a country code, case-insensitive
    pub fn competitions_for(&self, code: &str) -> Option<&[u32]> {
        let code = code.to_lowercase();
        self.countries
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.competitions.as_slice())
    }

    pub fn has_country(&self, code: &str) -> bool {
        self.competitions_for(code).is_some()
    }

    pub fn countries(&self) -> &[CountryCompetitions] {
        &self.countries
    }

    pub fn top_competitions(&self) -> &[CountryCompetitions] {
        &self.top
    }

    pub fn todays_top(&self) -> &[CountryCompetitions] {
        &self.todays_top
    }

    pub fn is_valid_timezone(&self, timezone: &str) -> bool {
        self.timezones.contains(timezone)
    }

    /// Every top competition ID in catalog order, joined with `-`
    pub fn top_competition_ids(&self) -> String {
        self.top
            .iter()
            .flat_map(|c| c.competitions.iter())
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
