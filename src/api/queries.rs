use crate::config::Config;
use crate::error::{FixturesError, Result};
use crate::models::UseCase;
use crate::utils::catalog::Catalog;
use chrono::{Datelike, Local, NaiveDate};

pub const FIXTURES_URL: &str = "https://v3.football.api-sports.io/fixtures";

/// Builds fixtures endpoint URLs for each use case
pub struct QueryBuilder<'a> {
    catalog: &'a Catalog,
    timezone: &'a str,
    today: NaiveDate,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(config: &'a Config, catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            timezone: &config.timezone,
            today: Local::now().date_naive(),
        }
    }

    /// Build queries for a fixed day instead of today
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The API labels a season by the year it started in
    pub fn season(&self) -> i32 {
        self.today.year() - 1
    }

    fn daily_url(&self, competition: u32) -> String {
        format!(
            "{}?league={}&season={}&date={}&timezone={}",
            FIXTURES_URL,
            competition,
            self.season(),
            self.today.format("%Y-%m-%d"),
            self.timezone
        )
    }

    /// One URL per competition registered for the country
    pub fn for_country(&self, code: &str) -> Result<Vec<String>> {
        let competitions = self
            .catalog
            .competitions_for(code)
            .ok_or_else(|| FixturesError::UnknownCountry(code.to_string()))?;
        Ok(competitions.iter().map(|&id| self.daily_url(id)).collect())
    }

    /// Single URL covering every top competition currently in play
    pub fn live(&self) -> String {
        format!(
            "{}?live={}&timezone={}",
            FIXTURES_URL,
            self.catalog.top_competition_ids(),
            self.timezone
        )
    }

    pub fn todays_top(&self) -> Vec<String> {
        self.catalog
            .todays_top()
            .iter()
            .flat_map(|country| country.competitions.iter())
            .map(|&id| self.daily_url(id))
            .collect()
    }

    pub fn for_use_case(&self, use_case: &UseCase) -> Result<Vec<String>> {
        match use_case {
            UseCase::Live => Ok(vec![self.live()]),
            UseCase::TodaysTop => Ok(self.todays_top()),
            UseCase::Country(code) => self.for_country(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "countries": [
            { "code": "en", "name": "England", "competitions": [39, 45] },
            { "code": "ma", "name": "Morocco", "competitions": [200] }
        ],
        "top": [
            { "code": "en", "name": "England", "competitions": [39] },
            { "code": "eu", "name": "Europe", "competitions": [2, 3] }
        ],
        "todays_top": [
            { "code": "en", "name": "England", "competitions": [39] },
            { "code": "ma", "name": "Morocco", "competitions": [200] }
        ]
    }"#;

    fn fixtures() -> (Config, Catalog) {
        (
            Config::new("key", "Africa/Casablanca"),
            Catalog::from_json(CATALOG, r#"["Africa/Casablanca"]"#).unwrap(),
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 9).unwrap()
    }

    #[test]
    fn test_country_urls() {
        let (config, catalog) = fixtures();
        let builder = QueryBuilder::new(&config, &catalog).with_date(day());
        let urls = builder.for_country("EN").unwrap();
        assert_eq!(
            urls,
            vec![
                "https://v3.football.api-sports.io/fixtures?league=39&season=2022&date=2023-04-09&timezone=Africa/Casablanca",
                "https://v3.football.api-sports.io/fixtures?league=45&season=2022&date=2023-04-09&timezone=Africa/Casablanca",
            ]
        );
    }

    #[test]
    fn test_unknown_country_is_invalid_input() {
        let (config, catalog) = fixtures();
        let builder = QueryBuilder::new(&config, &catalog);
        for code in ["InvalidCountry", "zz", ""] {
            let err = builder.for_country(code).unwrap_err();
            assert!(err.is_invalid_input());
            assert!(matches!(err, FixturesError::UnknownCountry(_)));
        }
    }

    #[test]
    fn test_live_url() {
        let (config, catalog) = fixtures();
        let builder = QueryBuilder::new(&config, &catalog).with_date(day());
        assert_eq!(
            builder.live(),
            "https://v3.football.api-sports.io/fixtures?live=39-2-3&timezone=Africa/Casablanca"
        );
    }

    #[test]
    fn test_todays_top_urls() {
        let (config, catalog) = fixtures();
        let builder = QueryBuilder::new(&config, &catalog).with_date(day());
        let urls = builder.todays_top();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("league=39&"));
        assert!(urls[1].contains("league=200&"));
        assert!(urls.iter().all(|u| u.contains("season=2022&date=2023-04-09")));
    }

    #[test]
    fn test_use_case_dispatch() {
        let (config, catalog) = fixtures();
        let builder = QueryBuilder::new(&config, &catalog).with_date(day());
        assert_eq!(builder.for_use_case(&UseCase::Live).unwrap().len(), 1);
        assert_eq!(builder.for_use_case(&UseCase::TodaysTop).unwrap().len(), 2);
        assert_eq!(
            builder
                .for_use_case(&UseCase::Country("ma".to_string()))
                .unwrap()
                .len(),
            1
        );
    }
}
