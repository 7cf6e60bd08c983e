/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header::{ACCEPT_LANGUAGE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use elfinder_engine::{
  AssetPaths, CsrfToken, DocumentOptions, Layout, RuntimeContext, render_document,
};
use serde::Deserialize;

use super::AppState;
use crate::csrf;
use crate::error::AxumError;
use crate::locale::ambient_locale;

#[derive(Debug, Default, Deserialize)]
pub(super) struct PageQuery {
  lang: Option<String>,
}

/// Runtime context for one request, plus whether the CSRF cookie must be set.
fn request_context(
  state: &AppState,
  query: &PageQuery,
  headers: &HeaderMap,
  layout: Layout,
) -> (RuntimeContext, bool) {
  let cfg = &state.config;
  let accept_language = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
  let locale = ambient_locale(query.lang.as_deref(), accept_language, &cfg.default_locale);
  let (token, fresh) = csrf::token_for(headers, &cfg.csrf_param);
  let ctx = RuntimeContext::new(
    locale,
    CsrfToken::new(cfg.csrf_param.clone(), token),
    AssetPaths::resolve(&cfg.asset_base_url),
  )
  .with_layout(layout);
  (ctx, fresh)
}

fn with_csrf_cookie(mut response: Response, ctx: &RuntimeContext, fresh: bool) -> Response {
  if !fresh {
    return response;
  }
  let cookie = csrf::set_cookie_value(&ctx.csrf.param, &ctx.csrf.value);
  match HeaderValue::from_str(&cookie) {
    Ok(value) => {
      response.headers_mut().append(SET_COOKIE, value);
    }
    Err(e) => tracing::warn!(param = %ctx.csrf.param, error = %e, "cannot set csrf cookie"),
  }
  response
}

/// Standalone page with the file manager filling the window.
pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Query(query): Query<PageQuery>,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let (ctx, fresh) = request_context(&state, &query, &headers, Layout::FullWindow);
  let fragment = state.config.widget.render(&ctx)?;
  let html = render_document(
    &fragment,
    &DocumentOptions {
      title: state.config.title.clone(),
      lang: Some(ctx.locale.clone()),
      head_resources: state.config.head_resources.clone(),
    },
  );
  Ok(with_csrf_cookie(Html(html).into_response(), &ctx, fresh))
}

/// Fragment as JSON, for hosts that assemble their own pages.
pub(super) async fn handle_fragment(
  State(state): State<Arc<AppState>>,
  Query(query): Query<PageQuery>,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let (ctx, fresh) = request_context(&state, &query, &headers, Layout::Embedded);
  let fragment = state.config.widget.render(&ctx)?;
  Ok(with_csrf_cookie(Json(fragment).into_response(), &ctx, fresh))
}
