/* src/server/engine/rust/src/render.rs */

use serde::Serialize;

use crate::assets::ResourceRef;
use crate::context::RuntimeContext;
use crate::errors::WidgetError;
use crate::escape::{escape_html, escape_script_json};
use crate::settings::{RawSettings, normalize};

/// Restores jQuery UI's `button` when Bootstrap's plugin has replaced it;
/// Bootstrap's version stays reachable as `jQuery.fn.btn`.
pub const NO_CONFLICT_GUARD: &str =
  "if (jQuery.fn.button.noConflict) { jQuery.fn.btn = jQuery.fn.button.noConflict(); }";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
  pub container_id: String,
  pub no_conflict: bool,
}

impl RenderOptions {
  pub fn new(container_id: impl Into<String>) -> Self {
    Self { container_id: container_id.into(), no_conflict: false }
  }

  pub fn no_conflict(mut self, enabled: bool) -> Self {
    self.no_conflict = enabled;
    self
  }
}

/// Output of one render. The host emits `resource_refs` in order, then the
/// container, then the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFragment {
  #[serde(rename = "container")]
  pub container_markup: String,
  /// JavaScript source, without the surrounding `<script>` element.
  #[serde(rename = "script")]
  pub embedded_script: String,
  #[serde(rename = "resources")]
  pub resource_refs: Vec<ResourceRef>,
}

impl RenderedFragment {
  /// Container followed by the inline `<script>` element.
  pub fn to_html(&self) -> String {
    format!("{}\n<script>\n{}\n</script>", self.container_markup, self.embedded_script)
  }

  /// `<link>`/`<script>` tags for the resources, one per line, in load order.
  pub fn resource_tags(&self) -> String {
    self.resource_refs.iter().map(ResourceRef::to_tag).collect::<Vec<_>>().join("\n")
  }
}

/// Render the widget: container markup, init script, and resource list.
///
/// Validation happens before anything is built, so an error never leaves a
/// partial fragment behind.
pub fn render(
  raw: &RawSettings,
  ctx: &RuntimeContext,
  opts: &RenderOptions,
) -> Result<RenderedFragment, WidgetError> {
  if opts.container_id.trim().is_empty() {
    return Err(WidgetError::MissingContainerId);
  }
  let normalized = normalize(raw, ctx)?;
  let options_json = normalized.config.to_json()?;
  let id_literal = escape_script_json(&serde_json::to_string(&opts.container_id)?);

  let mut script = String::new();
  if opts.no_conflict {
    script.push_str(NO_CONFLICT_GUARD);
    script.push('\n');
  }
  script.push_str(&format!(
    "jQuery(function () {{ jQuery(document.getElementById({id_literal})).elfinder({options_json}); }});"
  ));

  tracing::debug!(
    container = %opts.container_id,
    lang = ?normalized.config.lang,
    resources = normalized.resources.len(),
    "rendered elfinder widget"
  );

  Ok(RenderedFragment {
    container_markup: format!(r#"<div id="{}"></div>"#, escape_html(&opts.container_id)),
    embedded_script: script,
    resource_refs: normalized.resources,
  })
}
