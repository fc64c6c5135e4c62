pub mod fixtures_api;
pub mod queries;

pub use fixtures_api::{is_valid_url, FixturesApiClient};
pub use queries::{QueryBuilder, FIXTURES_URL};
