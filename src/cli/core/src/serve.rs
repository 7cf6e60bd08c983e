/* src/cli/core/src/serve.rs */

// `elfinder serve` command: standalone file manager page over HTTP.

use std::path::Path;

use anyhow::{Result, anyhow};
use elfinder_axum::IntoAxumRouter;

use crate::config::ElfinderConfig;

pub async fn run_serve(config: &ElfinderConfig, config_path: &Path, port: u16) -> Result<()> {
  if config.widget.connector_route.is_none() {
    tracing::warn!("widget.connector_route is not set, every page will fail to render");
  }
  let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
  let host = config.host_config(base_dir);
  let addr = format!("0.0.0.0:{port}");
  host.serve(&addr).await.map_err(|e| anyhow!("server on {addr} failed: {e}"))
}
