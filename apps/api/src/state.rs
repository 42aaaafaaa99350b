use std::sync::Arc;

use crate::analysis::lexicon::Lexicon;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only keyword vocabularies, built once at startup.
    pub lexicon: Arc<Lexicon>,
}
