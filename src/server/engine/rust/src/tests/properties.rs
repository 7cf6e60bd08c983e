/* src/server/engine/rust/src/tests/properties.rs */

use super::*;
use serde_json::{Value, json};

const AMBIENTS: &[&str] = &["en", "en-US", "be-BY", "ja", "pt_BR", "zh-TW", "xx", ""];

fn fixtures() -> Vec<RawSettings> {
  vec![
    RawSettings::new(),
    settings(json!({"lang": false})),
    settings(json!({"lang": "zh_tw", "height": "60%"})),
    settings(json!({"height": false, "customData": {"folder": "docs"}})),
    settings(json!({"uiOptions": {"toolbar": [["back"]]}, "futureOption": true})),
  ]
}

fn parse(json: &str) -> Value {
  serde_json::from_str(json).unwrap()
}

#[test]
fn missing_connector_never_renders() {
  for raw in fixtures() {
    let mut ctx = context("en");
    ctx.connector_url = None;
    let result = render(&raw, &ctx, &RenderOptions::new("test"));
    assert!(matches!(result, Err(WidgetError::MissingConnectorRoute)));
  }
}

#[test]
fn core_resources_and_csrf_always_present() {
  for raw in fixtures() {
    for ambient in AMBIENTS {
      let ctx = context(ambient);
      let n = normalize(&raw, &ctx).unwrap();
      assert_eq!(n.resources[0], ResourceRef::Style(format!("{ASSETS}/css/elfinder.min.css")));
      assert_eq!(n.resources[1], ResourceRef::Script(format!("{ASSETS}/js/elfinder.min.js")));
      let parsed = parse(&n.config.to_json().unwrap());
      let token = parsed["customData"]["_csrf"].as_str().unwrap();
      assert!(!token.is_empty());
    }
  }
}

#[test]
fn locale_field_and_script_agree() {
  for raw in fixtures() {
    for ambient in AMBIENTS {
      let n = normalize(&raw, &context(ambient)).unwrap();
      let parsed = parse(&n.config.to_json().unwrap());
      let locale_scripts = n.resources.iter().filter(|r| r.url().contains("/js/i18n/")).count();
      match n.locale {
        Some(ref locale) => {
          assert_eq!(parsed["lang"], json!(locale.client_code));
          assert_eq!(locale_scripts, 1);
          assert_eq!(n.resources.len(), 3);
        }
        None => {
          assert!(parsed.get("lang").is_none());
          assert_eq!(locale_scripts, 0);
          assert_eq!(n.resources.len(), 2);
        }
      }
    }
  }
}

#[test]
fn default_height_emitted_exactly_once() {
  for layout in [Layout::Embedded, Layout::FullWindow] {
    let ctx = context("en").with_layout(layout);
    let json = normalize(&RawSettings::new(), &ctx).unwrap().config.to_json().unwrap();
    let fixed = json.contains(r#""height":"100%""#);
    let computed = json.contains("jQuery(window).height() - 2");
    assert!(fixed ^ computed, "layout {layout:?}: {json}");
    assert_eq!(json.matches(r#""height":"#).count(), 1);
  }
}

#[test]
fn single_asset_origin_per_render() {
  let n = normalize(&settings(json!({"lang": "ru"})), &context("en")).unwrap();
  for resource in &n.resources {
    assert!(resource.url().starts_with(ASSETS));
  }
  assert!(n.config.sound_path.starts_with(&n.config.base_url));
}

#[test]
fn renders_are_deterministic_except_token() {
  for raw in fixtures() {
    let a = context("be-BY");
    let mut b = context("be-BY");
    b.csrf.value = "b3RoZXI".into();

    let mut first = parse(&normalize(&raw, &a).unwrap().config.to_json().unwrap());
    let mut second = parse(&normalize(&raw, &b).unwrap().config.to_json().unwrap());
    assert_ne!(first, second);
    first["customData"]["_csrf"] = json!(null);
    second["customData"]["_csrf"] = json!(null);
    assert_eq!(first, second);

    let again = normalize(&raw, &a).unwrap().config.to_json().unwrap();
    assert_eq!(normalize(&raw, &a).unwrap().config.to_json().unwrap(), again);
  }
}

#[test]
fn no_raw_key_dropped_except_lang_and_height() {
  let raw = settings(json!({
    "lang": "de",
    "height": 300,
    "commands": ["open", "reload"],
    "getFileCallback": "opener-bridge",
    "uiOptions": {"tree": {"syncTree": false}}
  }));
  let parsed = parse(&normalize(&raw, &context("en")).unwrap().config.to_json().unwrap());
  for key in raw.keys() {
    assert!(parsed.get(key).is_some(), "missing key {key}");
  }
  assert_eq!(parsed["commands"], json!(["open", "reload"]));
  assert_eq!(parsed["uiOptions"]["tree"]["syncTree"], json!(false));
}

#[test]
fn ambient_equivalence_through_pipeline() {
  for ambient in AMBIENTS {
    if ambient.is_empty() {
      continue;
    }
    let implicit = normalize(&RawSettings::new(), &context(ambient)).unwrap();
    let explicit = normalize(&settings(json!({"lang": ambient})), &context(ambient)).unwrap();
    assert_eq!(implicit.config, explicit.config);
    assert_eq!(implicit.resources, explicit.resources);
  }
}
