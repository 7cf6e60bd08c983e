/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::HostConfig;

pub(crate) struct AppState {
  pub config: HostConfig,
}

/// `{page_path}` and `{page_path}/fragment`, joined without doubling `/`.
fn fragment_path(page_path: &str) -> String {
  format!("{}/fragment", page_path.trim_end_matches('/'))
}

pub(crate) fn build_router(config: HostConfig) -> Router {
  let page_path = config.page_path.clone();
  let mut router = Router::new()
    .route(&page_path, get(page::handle_page))
    .route(&fragment_path(&page_path), get(page::handle_fragment));

  // Serve the bundle only when it lives on this origin
  if let Some(ref dir) = config.assets_dir {
    let mount = config.asset_base_url.trim_end_matches('/');
    if mount.starts_with('/') {
      tracing::info!(dir = %dir.display(), mount, "serving elfinder assets");
      router = router.nest_service(mount, ServeDir::new(dir));
    } else if mount.is_empty() {
      router = router.fallback_service(ServeDir::new(dir));
    } else {
      tracing::warn!(
        base_url = %config.asset_base_url,
        "asset base URL is not a local path, not serving assets dir"
      );
    }
  }

  router.with_state(Arc::new(AppState { config }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fragment_path_joins() {
    assert_eq!(fragment_path("/"), "/fragment");
    assert_eq!(fragment_path("/files"), "/files/fragment");
    assert_eq!(fragment_path("/files/"), "/files/fragment");
  }
}
