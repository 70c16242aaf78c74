//! Demo: two counter sections, one primary with an update log, one slower
//! with nested content.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ticker_ui::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let primary = CounterSection::new("blue", "Testing")
        .text("This is a basic testing component!")
        .primary(true)
        .on_update(|state| {
            let snapshot = serde_json::to_string(state).unwrap_or_default();
            info!(section = "primary", %snapshot, "state changed");
        });

    let secondary = CounterSection::new("gray", "Testing")
        .text("This is a basic testing component!")
        .interval(Duration::from_millis(1500))
        .child(Text::new("Counter children!"));

    App::new("Basic Testing")
        .root(Column::new().child(primary).child(secondary))
        .run()
        .await
}
