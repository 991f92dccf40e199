use anyhow::Context;

use tsv_config::TsvConfig;

/// Load layered configuration, with `.env` support from the working directory.
pub fn load_config() -> anyhow::Result<TsvConfig> {
    dotenvy::dotenv().ok();
    TsvConfig::load().context("failed to load tsv configuration")
}
