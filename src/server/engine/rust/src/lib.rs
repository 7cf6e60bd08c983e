/* src/server/engine/rust/src/lib.rs */

pub mod assets;
pub mod context;
pub mod dimension;
pub mod document;
pub mod errors;
pub mod escape;
pub mod locale;
pub mod render;
pub mod settings;
pub mod widget;

// Public API re-exports
pub use assets::{AssetLocation, AssetPaths, ResourceClass, ResourceLocation, ResourceRef};
pub use context::{CsrfToken, DEFAULT_CSRF_PARAM, RuntimeContext};
pub use dimension::{HeightRequest, Layout, ResolvedHeight, resolve_height};
pub use document::{DocumentOptions, render_document};
pub use errors::WidgetError;
pub use escape::{escape_html, escape_script_json};
pub use locale::{LocaleRequest, ResolvedLocale, locale_table, resolve_locale};
pub use render::{NO_CONFLICT_GUARD, RenderOptions, RenderedFragment, render};
pub use settings::{FinalConfig, Normalized, RawSettings, deep_merge, default_options, normalize};
pub use widget::WidgetConfig;

#[cfg(test)]
mod tests;
