//! Skill entry point: one inbound envelope in, one outbound envelope out.

use std::sync::Arc;

use tracing::{debug, info, warn};

use finder_core::config::{DisplayConfig, FinderConfig};
use finder_search::SchoolSearch;
use finder_storage::AttributeRepository;

use crate::catalog::MessageCatalog;
use crate::envelope::{Request, SkillRequest, SkillResponse};
use crate::event::Event;
use crate::fsm;
use crate::handlers::{self, common, Turn};
use crate::session::{SessionAttributes, SessionStore};

/// The college finder conversation.
///
/// Holds only shared, read-mostly collaborators; all per-user state travels in
/// the envelope's session attributes and the attribute repository.
pub struct Skill {
    catalog: MessageCatalog,
    search: Arc<dyn SchoolSearch>,
    repository: Arc<dyn AttributeRepository>,
    display: DisplayConfig,
}

impl Skill {
    pub fn new(
        config: &FinderConfig,
        search: Arc<dyn SchoolSearch>,
        repository: Arc<dyn AttributeRepository>,
    ) -> Self {
        Self {
            catalog: MessageCatalog::new(config.skill.default_locale.clone()),
            search,
            repository,
            display: config.display.clone(),
        }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Handle one request. Handler failures become a spoken, state-aware
    /// error reply; this never fails.
    pub async fn handle(&self, request: SkillRequest) -> SkillResponse {
        let event = Event::from_request(&request.request);
        let mut attributes = SessionAttributes::from_session(request.session_attributes());
        if matches!(event, Event::Launch) {
            attributes.initialized = false;
        }
        let locale = self.catalog.resolve_locale(request.locale()).to_string();
        let has_display = request.has_display();

        let mut session = SessionStore::new(
            attributes,
            request.user_id().map(str::to_string),
            Arc::clone(&self.repository),
        );
        if !session.attributes().initialized {
            session.load_persistent();
        }

        let state = session.attributes().state;
        let route = fsm::route(state, &event, session.attributes());
        debug!(?state, ?event, ?route, "Routing turn");

        let (intent, progress, token, end_reason) = match request.request {
            Request::IntentRequest(r) | Request::CanFulfillIntentRequest(r) => {
                (Some(r.intent), r.dialog_state, None, None)
            }
            Request::ElementSelected(r) => (None, None, Some(r.token), None),
            Request::SessionEndedRequest(r) => (None, None, None, r.reason),
            Request::LaunchRequest(_) => (None, None, None, None),
        };

        let mut turn = Turn {
            catalog: &self.catalog,
            search: self.search.as_ref(),
            images: &self.display,
            locale,
            has_display,
            intent,
            progress,
            token,
            end_reason,
            session,
        };

        let builder = match handlers::dispatch(route, &mut turn).await {
            Ok(builder) => builder,
            Err(e) => {
                warn!(error = %e, ?route, "Turn failed");
                common::contextual_error(&turn)
            }
        };
        if builder.is_ending() {
            info!("Session closing");
        }

        let attributes = turn.session.into_attributes();
        builder.build(Some(attributes.to_value()))
    }
}
