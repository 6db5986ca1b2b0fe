//! Plain viewer: help panel on M, Esc closes the window.

use vimcity::Variant;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let app = vimcity::default(Variant::Plain)?;
    app.run()?;
    Ok(())
}
