//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::{IdScheme, ShortId};
use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html` with a submission form posting to
/// `/api/shorturl` and a usage example for the active identifier scheme.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub id_scheme: &'static str,
    pub example_id: String,
    pub example_output: String,
}

impl IndexTemplate {
    pub fn for_scheme(scheme: IdScheme) -> Self {
        let example_id = match scheme {
            IdScheme::Counter => ShortId::Sequence(1),
            IdScheme::Native => ShortId::Native(uuid::Uuid::nil()),
        };

        let example_output = serde_json::json!({
            "original_url": "https://www.example.com",
            "short_url": example_id,
        })
        .to_string();

        Self {
            id_scheme: scheme.as_str(),
            example_id: example_id.to_string(),
            example_output,
        }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate::for_scheme(state.url_service.scheme())
}
