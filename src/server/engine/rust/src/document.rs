/* src/server/engine/rust/src/document.rs */

use crate::assets::ResourceRef;
use crate::escape::escape_html;
use crate::render::RenderedFragment;

/// Options for a standalone page hosting only the file manager.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
  pub title: String,
  /// Value of `<html lang>`, when known.
  pub lang: Option<String>,
  /// Host dependencies (jQuery, jQuery UI) loaded before the widget's own
  /// resources.
  pub head_resources: Vec<ResourceRef>,
}

/// Wrap a fragment in a complete HTML document.
pub fn render_document(fragment: &RenderedFragment, opts: &DocumentOptions) -> String {
  let lang_attr = match opts.lang {
    Some(ref lang) => format!(r#" lang="{}""#, escape_html(lang)),
    None => String::new(),
  };

  let mut head = String::new();
  for resource in opts.head_resources.iter().chain(&fragment.resource_refs) {
    head.push('\n');
    head.push_str(&resource.to_tag());
  }

  format!(
    "<!DOCTYPE html>\n<html{lang_attr}>\n<head>\n<meta charset=\"utf-8\">\n\
     <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
     <title>{title}</title>{head}\n</head>\n<body>\n{body}\n</body>\n</html>",
    title = escape_html(&opts.title),
    body = fragment.to_html(),
  )
}
