/* src/server/adapter/axum/src/lib.rs */

mod csrf;
mod error;
mod handler;
mod locale;

use std::path::PathBuf;

use elfinder_engine::{DEFAULT_CSRF_PARAM, ResourceRef, WidgetConfig};

/// Re-export the engine for convenience
pub use elfinder_engine;

pub use csrf::generate_token;

/// Everything the HTTP host needs to serve one widget.
#[derive(Debug, Clone)]
pub struct HostConfig {
  pub widget: WidgetConfig,
  /// Public base URL of the elFinder bundle (e.g. `/assets/elfinder`).
  pub asset_base_url: String,
  /// Local copy of the bundle, served under `asset_base_url` when it is a path.
  pub assets_dir: Option<PathBuf>,
  /// Extra resources (jQuery, jQuery UI) placed ahead of the bundle.
  pub head_resources: Vec<ResourceRef>,
  pub page_path: String,
  pub default_locale: String,
  pub csrf_param: String,
  pub title: String,
}

impl HostConfig {
  pub fn new(widget: WidgetConfig, asset_base_url: impl Into<String>) -> Self {
    Self {
      widget,
      asset_base_url: asset_base_url.into(),
      assets_dir: None,
      head_resources: Vec::new(),
      page_path: "/".to_string(),
      default_locale: "en-US".to_string(),
      csrf_param: DEFAULT_CSRF_PARAM.to_string(),
      title: "File manager".to_string(),
    }
  }
}

/// Extension trait that converts a `HostConfig` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for HostConfig {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let page_path = self.page_path.clone();
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
      "elFinder running on http://localhost:{}{}",
      local_addr.port(),
      page_path
    );
    axum::serve(listener, router).await?;
    Ok(())
  }
}
