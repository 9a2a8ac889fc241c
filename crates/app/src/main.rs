use std::io::{self, Write};

use anyhow::Context;
use stocklog_infra::AppConfig;

fn main() -> anyhow::Result<()> {
    stocklog_observability::init();

    let config = AppConfig::from_env();
    tracing::info!(data_file = %config.data_file.display(), "starting inventory session");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    stocklog_app::run_demo_session(&config.data_file, &mut out)
        .context("failed to write inventory report to stdout")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
