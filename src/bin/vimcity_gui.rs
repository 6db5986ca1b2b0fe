//! GUI viewer: Esc opens the menu, quitting asks for confirmation.

use anyhow::Context;
use vimcity::{Variant, VimcityApp, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let config = ViewerConfig::default().with_variant(Variant::Gui);
    let app = VimcityApp::new(config).context("failed to start the viewer")?;
    app.run().context("viewer stopped with an error")?;
    Ok(())
}
