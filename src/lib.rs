pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use api::*;
pub use config::Config;
pub use error::FixturesError;
pub use models::*;
pub use utils::*;

use error::Result;
use utils::catalog::Catalog;

/// Fetch every fixture for a use case.
///
/// `Ok(None)` means the API could not provide data for at least one of the
/// queries involved; `Ok(Some(vec![]))` means there is simply nothing on.
pub async fn fetch_games(
    config: &Config,
    catalog: &Catalog,
    use_case: &UseCase,
) -> Result<Option<Vec<DisplayRecord>>> {
    let urls = QueryBuilder::new(config, catalog).for_use_case(use_case)?;
    let client = FixturesApiClient::new(config, catalog)?;
    client.fetch_all(&urls).await
}
