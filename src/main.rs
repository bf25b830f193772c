use personnel_records::config::{DATA_DIR, LOG_FILTER, STORE_KEY};
use personnel_records::seed::fake_data;
use personnel_records::store::{FileSlot, Store};
use tracing::{info, warn};

fn main() {
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::new(LOG_FILTER.as_str()))
        .init();
    #[cfg(not(debug_assertions))]
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(true)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::new(LOG_FILTER.as_str()))
        .init();
    let slot = FileSlot::new(DATA_DIR.as_str());
    let store = match Store::open_or_seed(slot, STORE_KEY.as_str(), fake_data()) {
        Ok(store) => store,
        Err(err) => {
            warn!("failed to open {} in {}: {err}", *STORE_KEY, *DATA_DIR);
            std::process::exit(1);
        }
    };
    info!("{} personnel record(s) in {}", store.len(), *DATA_DIR);
    for person in store.list() {
        info!(
            "#{} {} ({}) {} - {}",
            person.order_number,
            person.full_name,
            person.date_of_birth,
            person.position,
            person.unit
        );
    }
}
