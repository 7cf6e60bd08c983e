/* src/server/adapter/axum/src/locale.rs */

/// Ambient locale for a request: explicit query value, then the preferred
/// `Accept-Language` tag, then the configured default.
pub(crate) fn ambient_locale(
  query_lang: Option<&str>,
  accept_language: Option<&str>,
  default_locale: &str,
) -> String {
  if let Some(lang) = query_lang.map(str::trim).filter(|l| !l.is_empty()) {
    return lang.to_string();
  }
  accept_language.and_then(preferred_language).unwrap_or_else(|| default_locale.to_string())
}

/// Highest-weighted concrete tag of an `Accept-Language` header.
fn preferred_language(header: &str) -> Option<String> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    if lang.is_empty() || lang == "*" || q <= 0.0 {
      continue;
    }
    entries.push((lang, q));
  }

  // Stable sort keeps header order among equal weights
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
  entries.first().map(|(lang, _)| (*lang).to_string())
}
