//! Index page: distinct stored countries rendered through a Handlebars template.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use laureates_core::Country;

use crate::AppState;
use crate::api_error::ApiError;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html.hbs");
const INDEX: &str = "index";

/// Registry with every page template registered.
pub fn templates() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string(INDEX, INDEX_TEMPLATE)?;
    Ok(handlebars)
}

pub async fn serve_index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let countries = state.query_service.distinct_countries().await?;
    let page = render_index(&state.templates, &countries)?;
    Ok(Html(page))
}

fn render_index(
    handlebars: &Handlebars<'static>,
    countries: &[Country],
) -> Result<String, ApiError> {
    handlebars
        .render(INDEX, &serde_json::json!({ "countries": countries }))
        .map_err(|e| ApiError::Internal(e.into()))
}
