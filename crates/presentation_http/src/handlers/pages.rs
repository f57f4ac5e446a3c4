//! Server-rendered pages
//!
//! Enrichment failures on the form flow render the error page with status 200.

use axum::{
    Form,
    extract::State,
    response::Html,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Form body for `POST /mbta`
#[derive(Debug, Default, Deserialize)]
pub struct PlaceForm {
    /// Free-text place name
    #[serde(default)]
    pub place_name: String,
}

/// Home page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_home()?))
}

/// Place lookup form
pub async fn place_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_form()?))
}

/// Look up the submitted place and render the result or error page
#[instrument(skip_all, fields(place = %form.place_name))]
pub async fn place_result(
    State(state): State<AppState>,
    Form(form): Form<PlaceForm>,
) -> Result<Html<String>, ApiError> {
    let page = match state.enrichment.enrich(&form.place_name).await {
        Ok(result) => state.templates.render_result(&result, state.unit_symbol)?,
        Err(err) => {
            debug!(kind = %err.kind, "Rendering error page");
            state.templates.render_error(&err.message)?
        },
    };
    Ok(Html(page))
}
