/* src/server/engine/rust/src/tests/mod.rs */

use super::*;

mod properties;

const CONNECTOR: &str = "/elfinder/connector";
const ASSETS: &str = "/assets/3f2a9c1e";

fn context(locale: &str) -> RuntimeContext {
  RuntimeContext::new(locale, CsrfToken::new("_csrf", "Zm9vYmFy"), AssetPaths::new(ASSETS))
    .with_connector(CONNECTOR)
}

fn settings(value: serde_json::Value) -> RawSettings {
  match value {
    serde_json::Value::Object(map) => map,
    _ => panic!("settings fixture must be an object"),
  }
}

/// Everything a host page would contain for a render: resources, container, script.
fn page_output(raw: &RawSettings, ctx: &RuntimeContext) -> String {
  let fragment = render(raw, ctx, &RenderOptions::new("test")).unwrap();
  format!("{}\n{}", fragment.resource_tags(), fragment.to_html())
}
