/* src/cli/core/src/render.rs */

// `elfinder render` command: prints widget markup for pasting into a page.

use anyhow::{Context, Result};
use elfinder_engine::{
  AssetPaths, CsrfToken, DocumentOptions, Layout, RuntimeContext, render_document,
};
use serde_json::Value;

use crate::config::ElfinderConfig;

#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
  /// Ambient locale; falls back to `server.default_locale`.
  pub locale: Option<String>,
  /// CSRF token; a fresh one is generated when omitted.
  pub csrf: Option<String>,
  pub full_page: bool,
  /// Force `lang = false`, so no translation file is loaded.
  pub lang_off: bool,
}

/// Render the configured widget. With `full_page` the result is a complete
/// HTML document filling the window; otherwise resource tags, container and
/// script, one after another.
pub fn render_widget(config: &ElfinderConfig, args: &RenderArgs) -> Result<String> {
  let mut widget = config.widget.clone();
  if args.lang_off {
    widget.settings.insert("lang".to_string(), Value::Bool(false));
  }

  let locale = args.locale.clone().unwrap_or_else(|| config.server.default_locale.clone());
  let token = args.csrf.clone().unwrap_or_else(elfinder_axum::generate_token);
  let layout = if args.full_page { Layout::FullWindow } else { Layout::Embedded };
  let ctx = RuntimeContext::new(
    locale.clone(),
    CsrfToken::new(config.server.csrf_param.clone(), token),
    AssetPaths::resolve(&config.assets.base_url),
  )
  .with_layout(layout);

  let fragment = widget.render(&ctx).context("failed to render widget")?;
  tracing::debug!(locale = %locale, full_page = args.full_page, "rendered widget");

  if args.full_page {
    let opts = DocumentOptions {
      title: config.server.title.clone(),
      lang: Some(locale),
      head_resources: config.head_resources(),
    };
    return Ok(render_document(&fragment, &opts));
  }
  Ok(format!("{}\n{}", fragment.resource_tags(), fragment.to_html()))
}
