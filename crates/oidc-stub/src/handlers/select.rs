//! Scenario picker page.

use axum::{extract::Query, response::Html};
use serde::Deserialize;

use crate::templates;

/// Relying-party values carried through the picker into the authorize form.
#[derive(Debug, Default, Deserialize)]
pub struct SelectQuery {
    pub state: Option<String>,
    pub nonce: Option<String>,
    #[serde(alias = "redirectUri")]
    pub redirect_uri: Option<String>,
}

/// GET / - render the scenario picker.
///
/// Thin collaborator around the code issuer: it only renders the catalog and
/// passes the chosen scenario name through unchanged.
pub async fn select_scenario(Query(query): Query<SelectQuery>) -> Html<String> {
    Html(templates::scenario_page(
        query.state.as_deref().unwrap_or_default(),
        query.nonce.as_deref().unwrap_or_default(),
        query.redirect_uri.as_deref().unwrap_or_default(),
    ))
}
