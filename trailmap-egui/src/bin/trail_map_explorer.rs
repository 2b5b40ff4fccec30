//! Trail Map Explorer.
//!
//! Usage: `trail-map-explorer [config.json]`. Set `RUST_LOG=debug` to see store
//! updates.

use trailmap_egui::InitBuilder;

fn main() -> anyhow::Result<()> {
    let builder = match std::env::args().nth(1) {
        Some(path) => InitBuilder::new().with_config_file(path),
        None => InitBuilder::new(),
    };

    builder.init()
}
