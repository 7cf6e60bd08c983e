/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use elfinder_axum::HostConfig;
use elfinder_engine::{DEFAULT_CSRF_PARAM, ResourceRef, WidgetConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElfinderConfig {
  #[serde(default)]
  pub widget: WidgetConfig,
  #[serde(default)]
  pub assets: AssetsSection,
  #[serde(default)]
  pub server: ServerSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsSection {
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Local bundle directory, relative to the config file.
  pub dir: Option<String>,
  /// Host dependencies (jQuery, jQuery UI) for full pages.
  #[serde(default)]
  pub scripts: Vec<String>,
  #[serde(default)]
  pub styles: Vec<String>,
}

impl Default for AssetsSection {
  fn default() -> Self {
    Self { base_url: default_base_url(), dir: None, scripts: Vec::new(), styles: Vec::new() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_page_path")]
  pub page_path: String,
  #[serde(default = "default_locale")]
  pub default_locale: String,
  #[serde(default = "default_csrf_param")]
  pub csrf_param: String,
  #[serde(default = "default_title")]
  pub title: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      port: default_port(),
      page_path: default_page_path(),
      default_locale: default_locale(),
      csrf_param: default_csrf_param(),
      title: default_title(),
    }
  }
}

fn default_base_url() -> String {
  "/assets/elfinder".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_page_path() -> String {
  "/".to_string()
}

fn default_locale() -> String {
  "en-US".to_string()
}

fn default_csrf_param() -> String {
  DEFAULT_CSRF_PARAM.to_string()
}

fn default_title() -> String {
  "File manager".to_string()
}

impl ElfinderConfig {
  pub fn validate(&self) -> Result<()> {
    if self.assets.base_url.trim().is_empty() {
      bail!("assets.base_url must not be empty");
    }
    if !self.server.page_path.starts_with('/') {
      bail!("server.page_path \"{}\" must start with '/'", self.server.page_path);
    }
    if self.server.csrf_param.trim().is_empty() {
      bail!("server.csrf_param must not be empty");
    }
    Ok(())
  }

  /// Styles first, then scripts, each in file order.
  pub fn head_resources(&self) -> Vec<ResourceRef> {
    let styles = self.assets.styles.iter().cloned().map(ResourceRef::Style);
    let scripts = self.assets.scripts.iter().cloned().map(ResourceRef::Script);
    styles.chain(scripts).collect()
  }

  /// Host configuration for `serve`; `assets.dir` is resolved against `base_dir`.
  pub fn host_config(&self, base_dir: &Path) -> HostConfig {
    let mut host = HostConfig::new(self.widget.clone(), self.assets.base_url.clone());
    host.assets_dir = self.assets.dir.as_ref().map(|d| resolve_dir(base_dir, d));
    host.head_resources = self.head_resources();
    host.page_path.clone_from(&self.server.page_path);
    host.default_locale.clone_from(&self.server.default_locale);
    host.csrf_param.clone_from(&self.server.csrf_param);
    host.title.clone_from(&self.server.title);
    host
  }
}

fn resolve_dir(base_dir: &Path, dir: &str) -> PathBuf {
  let path = Path::new(dir);
  if path.is_absolute() { path.to_path_buf() } else { base_dir.join(path) }
}
