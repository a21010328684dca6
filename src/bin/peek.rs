use chrono::Datelike;

use chalkplan::cache::Cache;
use chalkplan::client::RelayClient;
use chalkplan::grid::MonthGrid;
use chalkplan::provider::Provider;
use chalkplan::session::PlannerSession;

#[tokio::main]
async fn main() {
    env_logger::init();

    let relay_url = std::env::var("CHALKPLAN_RELAY_URL")
        .unwrap_or_else(|_| "http://localhost:1573/".to_string());
    let cache_dir = Cache::default_dir()
        .unwrap_or_else(|| std::env::temp_dir().join("chalkplan"));

    let client = match RelayClient::new(&relay_url) {
        Err(err) => {
            eprintln!("Invalid relay URL {}: {}", relay_url, err);
            return;
        },
        Ok(client) => client,
    };

    let session = PlannerSession::open(Provider::new(client, Cache::open(&cache_dir))).await;
    chalkplan::utils::print_state(session.state());

    let today = chrono::Local::now().date_naive();
    if let Ok(grid) = MonthGrid::new(today.year(), today.month()) {
        chalkplan::utils::print_month(session.state(), &grid);
    }
}
