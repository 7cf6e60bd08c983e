/* src/server/engine/rust/src/settings.rs */

//! Settings normalization: defaults + caller overrides + runtime context
//! -> the options object handed to `$.fn.elfinder`.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::assets::{ResourceClass, ResourceRef};
use crate::context::RuntimeContext;
use crate::dimension::{COMPUTED_PLACEHOLDER, HeightRequest, ResolvedHeight, resolve_height};
use crate::errors::WidgetError;
use crate::escape::escape_script_json;
use crate::locale::{LocaleRequest, ResolvedLocale, resolve_locale};

/// Caller-supplied client options. Keys this crate does not interpret are
/// forwarded to the client unchanged.
pub type RawSettings = Map<String, Value>;

/// Keys owned by the runtime context; caller values for them are replaced.
const INJECTED_KEYS: &[&str] = &["url", "baseUrl", "soundPath"];

/// Widget defaults the caller's settings are merged over.
pub fn default_options() -> RawSettings {
  let defaults = json!({
    "defaultView": "icons",
    "resizable": false,
    "rememberLastDir": true,
    "uploadMaxChunkSize": 10_485_760,
    "uiOptions": {
      "toolbar": [
        ["back", "forward"],
        ["reload"],
        ["home", "up"],
        ["mkdir", "mkfile", "upload"],
        ["open", "download", "getfile"],
        ["info", "quicklook"],
        ["copy", "cut", "paste"],
        ["rm"],
        ["duplicate", "rename", "edit", "resize"],
        ["extract", "archive"],
        ["search"],
        ["view", "sort"],
        ["help"]
      ],
      "tree": { "openRootOnLoad": true, "syncTree": true },
      "cwd": { "oldSchool": false }
    },
    "commandsOptions": {
      "upload": { "ui": "button" }
    }
  });
  match defaults {
    Value::Object(map) => map,
    _ => Map::new(),
  }
}

/// Merge `overrides` into `base`. Objects merge key-by-key at every depth;
/// any other value (including arrays) replaces what was there.
pub fn deep_merge(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
  for (key, value) in overrides {
    match (base.get_mut(key), value) {
      (Some(Value::Object(existing)), Value::Object(nested)) => deep_merge(existing, nested),
      _ => {
        base.insert(key.clone(), value.clone());
      }
    }
  }
}

/// The options object embedded in the page.
///
/// Known fields are typed; everything else the caller supplied (or the
/// defaults carry) lives in `extra` and is flattened into the same object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalConfig {
  pub url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lang: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<ResolvedHeight>,
  pub base_url: String,
  pub sound_path: String,
  pub custom_data: Map<String, Value>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl FinalConfig {
  /// Compact JSON, escaped for inline `<script>` use.
  ///
  /// Valid JSON unless the height is a computed expression, which is
  /// spliced in as raw JavaScript.
  pub fn to_json(&self) -> Result<String, WidgetError> {
    let json = escape_script_json(&serde_json::to_string(self)?);
    let Some(ResolvedHeight::Computed(expr)) = self.height else {
      return Ok(json);
    };
    let placeholder = format!(r#""height":"{COMPUTED_PLACEHOLDER}""#);
    Ok(json.replacen(&placeholder, &format!(r#""height":{expr}"#), 1))
  }
}

/// Output of [`normalize`]: the options plus the resources they rely on.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
  pub config: FinalConfig,
  pub locale: Option<ResolvedLocale>,
  /// Core style, core script, then the locale script when one resolved.
  pub resources: Vec<ResourceRef>,
}

/// Resolve caller settings against the runtime context.
///
/// Fails only when the connector URL is missing; every other oddity in the
/// settings degrades silently.
pub fn normalize(raw: &RawSettings, ctx: &RuntimeContext) -> Result<Normalized, WidgetError> {
  let url = ctx.connector()?.to_string();

  let mut options = default_options();
  deep_merge(&mut options, raw);

  let locale_request = LocaleRequest::from_setting(options.remove("lang").as_ref());
  let locale = resolve_locale(&locale_request, &ctx.locale);
  let height = resolve_height(HeightRequest::from_setting(options.remove("height")), ctx.layout);

  let mut custom_data = match options.remove("customData") {
    Some(Value::Object(map)) => map,
    Some(other) => {
      tracing::debug!(custom_data = %other, "customData is not an object, replacing it");
      Map::new()
    }
    None => Map::new(),
  };
  custom_data.insert(ctx.csrf.param.clone(), Value::String(ctx.csrf.value.clone()));

  for key in INJECTED_KEYS {
    if options.remove(*key).is_some() {
      tracing::debug!(key, "setting is owned by the runtime context, ignoring caller value");
    }
  }

  let assets = &ctx.assets;
  let mut resources = vec![
    ResourceRef::Style(assets.url(ResourceClass::CoreStyle)),
    ResourceRef::Script(assets.url(ResourceClass::CoreScript)),
  ];
  if let Some(ref resolved) = locale {
    let locale_script = assets.url(ResourceClass::LocaleScript(resolved.file_suffix));
    resources.push(ResourceRef::Script(locale_script));
  }

  let config = FinalConfig {
    url,
    lang: locale.as_ref().map(|l| l.client_code.to_string()),
    height,
    base_url: assets.base_url().to_string(),
    sound_path: assets.url(ResourceClass::Sounds),
    custom_data,
    extra: options,
  };
  Ok(Normalized { config, locale, resources })
}
