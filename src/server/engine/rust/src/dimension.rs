/* src/server/engine/rust/src/dimension.rs */

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Client-side expression sizing elFinder to the window, minus room for borders.
pub const WINDOW_HEIGHT_EXPRESSION: &str = "jQuery(window).height() - 2";

/// Default fixed height for embedded containers.
pub const FILL_CONTAINER: &str = "100%";

/// Where the widget sits on the host page. Decides the default height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
  /// Inside a host-controlled container: `"100%"`.
  #[default]
  Embedded,
  /// The widget is the whole page (file-browser popup): window height.
  FullWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeightRequest {
  Default,
  Disabled,
  Literal(Value),
}

impl HeightRequest {
  /// Classify the raw `height` setting. `None` means the key was absent.
  pub fn from_setting(value: Option<Value>) -> Self {
    match value {
      None => Self::Default,
      Some(Value::Bool(false)) => Self::Disabled,
      Some(other) => Self::Literal(other),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedHeight {
  /// Embedded as a JSON value (`"100%"`, `400`, ...).
  Fixed(Value),
  /// Raw JavaScript evaluated by the client.
  Computed(&'static str),
}

/// Stand-in serialized for a computed height, swapped for the raw
/// expression once the options JSON is escaped.
pub(crate) const COMPUTED_PLACEHOLDER: &str = "__elfinder_computed_height__";

impl Serialize for ResolvedHeight {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Fixed(value) => value.serialize(serializer),
      Self::Computed(_) => serializer.serialize_str(COMPUTED_PLACEHOLDER),
    }
  }
}

/// Resolve the height option. `None` means the field is omitted.
pub fn resolve_height(requested: HeightRequest, layout: Layout) -> Option<ResolvedHeight> {
  match requested {
    HeightRequest::Disabled => None,
    HeightRequest::Default => Some(match layout {
      Layout::Embedded => ResolvedHeight::Fixed(Value::String(FILL_CONTAINER.into())),
      Layout::FullWindow => ResolvedHeight::Computed(WINDOW_HEIGHT_EXPRESSION),
    }),
    HeightRequest::Literal(value) => {
      if !matches!(value, Value::Number(_) | Value::String(_)) {
        tracing::debug!(height = %value, "passing unrecognized height value through");
      }
      Some(ResolvedHeight::Fixed(value))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn disabled_omits_height() {
    assert_eq!(resolve_height(HeightRequest::Disabled, Layout::Embedded), None);
    assert_eq!(resolve_height(HeightRequest::Disabled, Layout::FullWindow), None);
  }

  #[test]
  fn default_embedded_fills_container() {
    assert_eq!(
      resolve_height(HeightRequest::Default, Layout::Embedded),
      Some(ResolvedHeight::Fixed(json!("100%"))),
    );
  }

  #[test]
  fn default_full_window_is_computed() {
    assert_eq!(
      resolve_height(HeightRequest::Default, Layout::FullWindow),
      Some(ResolvedHeight::Computed("jQuery(window).height() - 2")),
    );
  }

  #[test]
  fn literals_pass_through() {
    for value in [json!(400), json!("50%"), json!("30em")] {
      assert_eq!(
        resolve_height(HeightRequest::Literal(value.clone()), Layout::FullWindow),
        Some(ResolvedHeight::Fixed(value)),
      );
    }
  }

  // Values outside the number/string forms are not interpreted, only forwarded.
  #[test]
  fn unrecognized_literals_pass_through_opaquely() {
    for value in [json!(true), json!(null), json!({"min": 300})] {
      assert_eq!(
        resolve_height(HeightRequest::from_setting(Some(value.clone())), Layout::Embedded),
        Some(ResolvedHeight::Fixed(value)),
      );
    }
  }

  #[test]
  fn request_from_setting() {
    assert_eq!(HeightRequest::from_setting(None), HeightRequest::Default);
    assert_eq!(HeightRequest::from_setting(Some(json!(false))), HeightRequest::Disabled);
    assert_eq!(HeightRequest::from_setting(Some(json!(300))), HeightRequest::Literal(json!(300)));
  }
}
