/* src/server/engine/rust/src/assets.rs */

use serde::Serialize;

use crate::escape::escape_html;

pub const CORE_SCRIPT: &str = "/js/elfinder.min.js";
pub const CORE_STYLE: &str = "/css/elfinder.min.css";
pub const LOCALE_SCRIPT_DIR: &str = "/js/i18n";
pub const SOUNDS_DIR: &str = "/sounds";

/// Supplies the public base URL the elFinder bundle is served from.
///
/// Implemented by hosts; called once per render.
pub trait AssetLocation {
  fn base_url(&self) -> String;
}

impl AssetLocation for str {
  fn base_url(&self) -> String {
    self.to_string()
  }
}

impl AssetLocation for String {
  fn base_url(&self) -> String {
    self.clone()
  }
}

/// Static resource classes of the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceClass<'a> {
  CoreScript,
  CoreStyle,
  /// Translation file for the given suffix.
  LocaleScript(&'a str),
  Sounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
  pub base_url: String,
  pub subpath: String,
}

impl ResourceLocation {
  pub fn url(&self) -> String {
    format!("{}{}", self.base_url, self.subpath)
  }
}

/// Asset base URL resolved once for a render; every location shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
  base_url: String,
}

impl AssetPaths {
  pub fn resolve<L: AssetLocation + ?Sized>(location: &L) -> Self {
    Self::new(location.base_url())
  }

  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into();
    let base_url = base_url.trim_end_matches('/').to_string();
    Self { base_url }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn location(&self, class: ResourceClass<'_>) -> ResourceLocation {
    let subpath = match class {
      ResourceClass::CoreScript => CORE_SCRIPT.to_string(),
      ResourceClass::CoreStyle => CORE_STYLE.to_string(),
      ResourceClass::LocaleScript(suffix) => format!("{LOCALE_SCRIPT_DIR}/elfinder.{suffix}.js"),
      ResourceClass::Sounds => SOUNDS_DIR.to_string(),
    };
    ResourceLocation { base_url: self.base_url.clone(), subpath }
  }

  pub fn url(&self, class: ResourceClass<'_>) -> String {
    self.location(class).url()
  }
}

/// A static asset the host page must load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum ResourceRef {
  Style(String),
  Script(String),
}

impl ResourceRef {
  pub fn url(&self) -> &str {
    match self {
      Self::Style(url) | Self::Script(url) => url,
    }
  }

  /// Render as a `<link>` or `<script>` tag.
  pub fn to_tag(&self) -> String {
    match self {
      Self::Style(url) => format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(url)),
      Self::Script(url) => format!(r#"<script src="{}"></script>"#, escape_html(url)),
    }
  }
}
