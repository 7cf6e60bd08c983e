/* src/server/engine/rust/src/escape.rs */

use std::fmt::Write;

/// Make compact JSON safe to inline inside a `<script>` element.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, the
/// HTML-significant characters `<`, `>`, `&` and `'` become `\u003c`-style
/// escapes, so `</script>` or `<!--` can never appear in the output, and
/// non-ASCII codepoints become `\uXXXX` (surrogate pairs outside the BMP),
/// which also covers U+2028/U+2029. The result is still valid JSON.
pub fn escape_script_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        // Escaped character inside string -- push both and skip next
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' | '\'' => push_unit(&mut out, ch as u32),
      c if c as u32 > 0x7F => {
        let code = c as u32;
        if code > 0xFFFF {
          let adjusted = code - 0x1_0000;
          push_unit(&mut out, (adjusted >> 10) + 0xD800);
          push_unit(&mut out, (adjusted & 0x3FF) + 0xDC00);
        } else {
          push_unit(&mut out, code);
        }
      }
      c => out.push(c),
    }
  }
  out
}

fn push_unit(out: &mut String, unit: u32) {
  let _ = write!(out, "\\u{unit:04x}");
}

/// Escape text for an HTML attribute value or text node.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ascii_passthrough() {
    let input = r#"{"key":"hello","n":[1,2]}"#;
    assert_eq!(escape_script_json(input), input);
  }

  #[test]
  fn closing_script_tag_is_neutralized() {
    let input = r#"{"x":"</script><script>alert(1)</script>"}"#;
    let out = escape_script_json(input);
    assert!(!out.contains('<'));
    assert!(!out.contains('>'));
    assert_eq!(out, r#"{"x":"\u003c/script\u003e\u003cscript\u003ealert(1)\u003c/script\u003e"}"#);
  }

  #[test]
  fn ampersand_and_apostrophe() {
    assert_eq!(escape_script_json(r#"{"a":"b&c'd"}"#), r#"{"a":"b\u0026c\u0027d"}"#);
  }

  #[test]
  fn escaped_output_parses_back_to_original() {
    let value = serde_json::json!({"t": "<!-- & 'q' \"dq\" \u{2028} 日本 😀"});
    let escaped = escape_script_json(&value.to_string());
    let parsed: serde_json::Value = serde_json::from_str(&escaped).unwrap();
    assert_eq!(parsed, value);
  }

  #[test]
  fn line_separators_escaped() {
    let out = escape_script_json("{\"a\":\"x\u{2028}y\u{2029}\"}");
    assert_eq!(out, r#"{"a":"x\u2028y\u2029"}"#);
  }

  #[test]
  fn escapes_cjk_in_values() {
    assert_eq!(escape_script_json(r#"{"msg":"你好"}"#), r#"{"msg":"\u4f60\u597d"}"#);
  }

  #[test]
  fn surrogate_pair_for_emoji() {
    assert_eq!(escape_script_json(r#"{"e":"😀"}"#), r#"{"e":"\ud83d\ude00"}"#);
  }

  #[test]
  fn preserves_existing_escapes() {
    let input = r#"{"a":"line\nbreak","b":"say \"hi\"","c":"back\\"}"#;
    assert_eq!(escape_script_json(input), input);
  }

  #[test]
  fn keys_are_escaped_too() {
    assert_eq!(escape_script_json(r#"{"<k>":1}"#), r#"{"\u003ck\u003e":1}"#);
  }

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html(r#"<>&"'"#), "&lt;&gt;&amp;&quot;&#x27;");
    assert_eq!(escape_html("plain-id_1"), "plain-id_1");
  }
}
