use anyhow::Result;
use tracing::info;

use arrocco_session::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("arrocco starting");
    Session::new().run()?;
    Ok(())
}
