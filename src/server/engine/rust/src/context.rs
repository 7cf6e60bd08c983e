/* src/server/engine/rust/src/context.rs */

use crate::assets::AssetPaths;
use crate::dimension::Layout;
use crate::errors::WidgetError;

pub const DEFAULT_CSRF_PARAM: &str = "_csrf";

/// Request-scoped CSRF token, embedded as `customData.{param}` so the
/// connector receives it with every file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
  pub param: String,
  pub value: String,
}

impl CsrfToken {
  pub fn new(param: impl Into<String>, value: impl Into<String>) -> Self {
    Self { param: param.into(), value: value.into() }
  }
}

/// Everything a render needs from the host besides the caller's settings.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
  /// Active locale of the host (e.g. `be-BY`), used when `lang` is not set.
  pub locale: String,
  pub connector_url: Option<String>,
  pub csrf: CsrfToken,
  pub assets: AssetPaths,
  pub layout: Layout,
}

impl RuntimeContext {
  pub fn new(locale: impl Into<String>, csrf: CsrfToken, assets: AssetPaths) -> Self {
    Self { locale: locale.into(), connector_url: None, csrf, assets, layout: Layout::default() }
  }

  pub fn with_connector(mut self, url: impl Into<String>) -> Self {
    self.connector_url = Some(url.into());
    self
  }

  pub fn with_layout(mut self, layout: Layout) -> Self {
    self.layout = layout;
    self
  }

  /// The connector URL, or a configuration error when missing or blank.
  pub fn connector(&self) -> Result<&str, WidgetError> {
    match self.connector_url.as_deref().map(str::trim) {
      Some(url) if !url.is_empty() => Ok(url),
      _ => Err(WidgetError::MissingConnectorRoute),
    }
  }
}
