/* src/server/engine/rust/src/widget.rs */

use serde::Deserialize;

use crate::context::RuntimeContext;
use crate::errors::WidgetError;
use crate::render::{RenderOptions, RenderedFragment, render};
use crate::settings::RawSettings;

/// Declarative widget configuration, as written in a host's config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetConfig {
  #[serde(default = "default_id")]
  pub id: String,
  /// Connector endpoint. Required at render time.
  #[serde(default)]
  pub connector_route: Option<String>,
  #[serde(default)]
  pub settings: RawSettings,
  #[serde(default)]
  pub button_no_conflict: bool,
}

fn default_id() -> String {
  "elfinder".to_string()
}

impl Default for WidgetConfig {
  fn default() -> Self {
    Self {
      id: default_id(),
      connector_route: None,
      settings: RawSettings::new(),
      button_no_conflict: false,
    }
  }
}

impl WidgetConfig {
  pub fn new(id: impl Into<String>, connector_route: impl Into<String>) -> Self {
    Self { id: id.into(), connector_route: Some(connector_route.into()), ..Self::default() }
  }

  pub fn render_options(&self) -> RenderOptions {
    RenderOptions::new(self.id.clone()).no_conflict(self.button_no_conflict)
  }

  /// Render against `ctx`, with this widget's connector route taking the
  /// place of any connector already on the context.
  pub fn render(&self, ctx: &RuntimeContext) -> Result<RenderedFragment, WidgetError> {
    let mut ctx = ctx.clone();
    ctx.connector_url.clone_from(&self.connector_route);
    render(&self.settings, &ctx, &self.render_options())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assets::AssetPaths;
  use crate::context::CsrfToken;
  use serde_json::json;

  fn ctx() -> RuntimeContext {
    RuntimeContext::new("en", CsrfToken::new("_csrf", "abc"), AssetPaths::new("/assets"))
  }

  #[test]
  fn deserialize_defaults() {
    let cfg: WidgetConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
    assert_eq!(cfg.id, "elfinder");
  }

  #[test]
  fn deserialize_full() {
    let cfg: WidgetConfig = serde_json::from_value(json!({
      "id": "files",
      "connector_route": "/elfinder/connector",
      "button_no_conflict": true,
      "settings": {"lang": "ja", "uiOptions": {"cwd": {"oldSchool": true}}}
    }))
    .unwrap();
    assert_eq!(cfg.id, "files");
    assert!(cfg.button_no_conflict);
    assert_eq!(cfg.settings["lang"], json!("ja"));
  }

  #[test]
  fn missing_connector_route() {
    let cfg = WidgetConfig { id: "test".into(), ..WidgetConfig::default() };
    assert!(matches!(cfg.render(&ctx()), Err(WidgetError::MissingConnectorRoute)));
  }

  #[test]
  fn widget_route_replaces_context_connector() {
    let cfg = WidgetConfig { id: "test".into(), ..WidgetConfig::default() };
    let ctx = ctx().with_connector("/from/context");
    assert!(cfg.render(&ctx).is_err());
  }

  #[test]
  fn renders_container() {
    let cfg = WidgetConfig::new("test", "/elfinder/connector");
    let fragment = cfg.render(&ctx()).unwrap();
    assert_eq!(fragment.container_markup, r#"<div id="test"></div>"#);
  }

  #[test]
  fn no_conflict_flag_forwarded() {
    let mut cfg = WidgetConfig::new("test", "/elfinder/connector");
    cfg.button_no_conflict = true;
    assert!(cfg.render_options().no_conflict);
  }
}
