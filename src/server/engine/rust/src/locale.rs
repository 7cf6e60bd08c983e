/* src/server/engine/rust/src/locale.rs */

//! Locale table and resolver for elFinder translation files.
//!
//! elFinder names its translation files with suffixes that do not follow
//! plain language tags (`jp` for Japanese, `pt_BR` for Portuguese), so every
//! request goes through a fixed lookup table instead of being used as-is.

use serde_json::Value;

/// Normalized lookup key -> translation file suffix.
///
/// Keys are lowercase with `-` as the only separator; see [`normalize_key`].
const LOCALE_TABLE: &[(&str, &str)] = &[
  ("ar", "ar"),
  ("be", "ru"),
  ("bg", "bg"),
  ("ca", "ca"),
  ("cs", "cs"),
  ("da", "da"),
  ("de", "de"),
  ("el", "el"),
  ("en", "en"),
  ("es", "es"),
  ("fa", "fa"),
  ("fo", "fo"),
  ("fr", "fr"),
  ("he", "he"),
  ("hr", "hr"),
  ("hu", "hu"),
  ("id", "id"),
  ("it", "it"),
  ("ja", "jp"),
  ("jp", "jp"),
  ("ko", "ko"),
  ("nb", "no"),
  ("nl", "nl"),
  ("no", "no"),
  ("pl", "pl"),
  ("pt", "pt_BR"),
  ("pt-br", "pt_BR"),
  ("ro", "ro"),
  ("ru", "ru"),
  ("si", "si"),
  ("sk", "sk"),
  ("sl", "sl"),
  ("sr", "sr"),
  ("sv", "sv"),
  ("tr", "tr"),
  ("ug", "ug_CN"),
  ("ug-cn", "ug_CN"),
  ("uk", "uk"),
  ("vi", "vi"),
  ("zh", "zh_CN"),
  ("zh-cn", "zh_CN"),
  ("zh-hans", "zh_CN"),
  ("zh-hant", "zh_TW"),
  ("zh-hk", "zh_TW"),
  ("zh-tw", "zh_TW"),
];

/// Read-only view of the locale table as `(lookup key, file suffix)` pairs.
pub fn locale_table() -> &'static [(&'static str, &'static str)] {
  LOCALE_TABLE
}

/// What the caller asked for under the `lang` settings key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleRequest {
  /// Key not supplied: fall back to the ambient locale.
  Ambient,
  /// `lang: false`, or a value that cannot name a locale.
  Disabled,
  /// Explicit locale identifier.
  Code(String),
}

impl LocaleRequest {
  /// Classify the raw `lang` setting. `None` means the key was absent.
  pub fn from_setting(value: Option<&Value>) -> Self {
    match value {
      None => Self::Ambient,
      Some(Value::String(s)) if !s.trim().is_empty() => Self::Code(s.clone()),
      Some(Value::Bool(false)) => Self::Disabled,
      Some(other) => {
        tracing::debug!(lang = %other, "lang setting is not a locale code, loading no locale");
        Self::Disabled
      }
    }
  }
}

/// A locale that has a bundled translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
  /// Suffix in `elfinder.{suffix}.js`.
  pub file_suffix: &'static str,
  /// Value of the client `lang` option.
  pub client_code: &'static str,
}

/// Resolve a locale request against the table.
///
/// Unknown locales resolve to `None`; this never fails.
pub fn resolve_locale(requested: &LocaleRequest, ambient: &str) -> Option<ResolvedLocale> {
  let raw = match requested {
    LocaleRequest::Disabled => return None,
    LocaleRequest::Ambient => ambient,
    LocaleRequest::Code(code) => code.as_str(),
  };
  let key = normalize_key(raw);
  if key.is_empty() {
    return None;
  }

  // Drop trailing subtags one at a time, so `zh-hant-tw` finds `zh-hant`
  // before falling back to `zh`.
  let mut candidate = key.as_str();
  let mut suffix = lookup(candidate);
  while suffix.is_none() {
    let Some((shorter, _)) = candidate.rsplit_once('-') else {
      break;
    };
    candidate = shorter;
    tracing::debug!(locale = %raw, retry = candidate, "no exact locale match, retrying shorter tag");
    suffix = lookup(candidate);
  }

  match suffix {
    Some(suffix) => Some(ResolvedLocale { file_suffix: suffix, client_code: suffix }),
    None => {
      tracing::debug!(locale = %raw, "no bundled translation for locale");
      None
    }
  }
}

fn lookup(key: &str) -> Option<&'static str> {
  LOCALE_TABLE.iter().find(|(k, _)| *k == key).map(|(_, suffix)| *suffix)
}

/// Lowercase, `_` -> `-`, with encoding (`.UTF-8`) and modifier (`@euro`)
/// sections dropped.
pub fn normalize_key(raw: &str) -> String {
  let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default();
  stripped.trim().replace('_', "-").to_ascii_lowercase()
}
