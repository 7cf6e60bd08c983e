/* src/server/adapter/axum/src/csrf.rs */

// Double-submit CSRF token: the same value travels in a cookie and in the
// widget's customData, and the connector compares the two.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use rand::RngCore;

const TOKEN_BYTES: usize = 16;

/// Generate 32 hex chars (16 random bytes).
pub fn generate_token() -> String {
  let mut bytes = [0u8; TOKEN_BYTES];
  rand::thread_rng().fill_bytes(&mut bytes);
  hex::encode(bytes)
}

/// Token for this request and whether it was freshly generated (and so
/// needs a `Set-Cookie`).
pub(crate) fn token_for(headers: &HeaderMap, param: &str) -> (String, bool) {
  let existing = headers
    .get_all(COOKIE)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .find_map(|header| parse_cookie_token(header, param));
  match existing {
    Some(token) => (token, false),
    None => (generate_token(), true),
  }
}

pub(crate) fn set_cookie_value(param: &str, token: &str) -> String {
  format!("{param}={token}; Path=/; SameSite=Strict")
}

fn parse_cookie_token(header: &str, name: &str) -> Option<String> {
  for pair in header.split(';') {
    if let Some((k, v)) = pair.trim().split_once('=') {
      if k.trim() == name {
        let v = v.trim();
        if is_well_formed(v) {
          return Some(v.to_string());
        }
      }
    }
  }
  None
}

fn is_well_formed(token: &str) -> bool {
  token.len() == TOKEN_BYTES * 2 && token.bytes().all(|b| b.is_ascii_hexdigit())
}
