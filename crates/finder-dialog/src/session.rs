//! Session attributes and their load/persist lifecycle.
//!
//! [`SessionAttributes`] travels with every request and response through the
//! envelope's `sessionAttributes`. Only the embedded [`PersistentAttributes`]
//! are ever written to the attribute repository.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use finder_core::types::{
    BoundedList, DialogState, PersistentAttributes, SchoolRecord, ScoreType, SearchOrigin,
};
use finder_storage::AttributeRepository;

use crate::envelope::Intent;
use crate::error::DialogError;

/// Pause inserted between an intro message and the prompt that follows it.
pub const PROMPT_BREAK: &str = r#"<break time="500ms"/>"#;

// =============================================================================
// RefineSlot
// =============================================================================

/// Slots of the refine-search dialog, in the order they are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefineSlot {
    Location,
    State,
    Region,
    Home,
    Distance,
    Type,
    Size,
    Major,
    Cost,
    Scores,
    Degree,
}

impl RefineSlot {
    pub const ORDER: [RefineSlot; 11] = [
        RefineSlot::Location,
        RefineSlot::State,
        RefineSlot::Region,
        RefineSlot::Home,
        RefineSlot::Distance,
        RefineSlot::Type,
        RefineSlot::Size,
        RefineSlot::Major,
        RefineSlot::Cost,
        RefineSlot::Scores,
        RefineSlot::Degree,
    ];

    /// Slot name as declared in the interaction model.
    pub fn name(self) -> &'static str {
        match self {
            RefineSlot::Location => "LOCATION",
            RefineSlot::State => "STATE",
            RefineSlot::Region => "REGION",
            RefineSlot::Home => "HOME",
            RefineSlot::Distance => "DISTANCE",
            RefineSlot::Type => "TYPE",
            RefineSlot::Size => "SIZE",
            RefineSlot::Major => "MAJOR",
            RefineSlot::Cost => "COST",
            RefineSlot::Scores => "SCORES",
            RefineSlot::Degree => "DEGREE",
        }
    }

    /// Message key used to ask for this slot.
    pub fn prompt_key(self) -> &'static str {
        match self {
            RefineSlot::Location => "INTRODUCTION_LOCATION",
            RefineSlot::State => "INTRODUCTION_LOCATION_STATES",
            RefineSlot::Region => "INTRODUCTION_LOCATION_REGION",
            RefineSlot::Home => "HOME_ZIP_CODE",
            RefineSlot::Distance => "INTRODUCTION_LOCATION_ZIP_CODE_DISTANCE",
            RefineSlot::Type => "INTRODUCTION_SCHOOL_TYPE",
            RefineSlot::Size => "INTRODUCTION_SCHOOL_SIZE",
            RefineSlot::Major => "INTRODUCTION_MAJOR",
            RefineSlot::Cost => "INTRODUCTION_COST",
            RefineSlot::Scores => "INTRODUCTION_SCORES_SHORT",
            RefineSlot::Degree => "INTRODUCTION_DEGREE",
        }
    }

    /// Slots filled with free numbers or test names rather than catalog values.
    pub fn takes_raw_value(self) -> bool {
        matches!(
            self,
            RefineSlot::Home | RefineSlot::Distance | RefineSlot::Cost | RefineSlot::Scores
        )
    }

    /// Location mode selected by a `LOCATION` slot value.
    pub fn location_mode(value: &str) -> Option<RefineSlot> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STATE" => Some(RefineSlot::State),
            "REGION" => Some(RefineSlot::Region),
            "HOME" | "ZIP CODE" | "ZIP" => Some(RefineSlot::Home),
            _ => None,
        }
    }
}

impl fmt::Display for RefineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SessionAttributes
// =============================================================================

/// Everything the skill remembers about the current conversation.
///
/// `None` in a session field means the key is absent; handlers never rely on
/// sentinel strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionAttributes {
    #[serde(flatten)]
    pub persistent: PersistentAttributes,
    pub state: Option<DialogState>,
    pub previous_state: Option<DialogState>,
    pub previous_intent: Option<String>,
    pub intro_message: String,
    pub previous_intro_message: String,
    /// Test the user is currently giving a score for.
    pub pending_score: Option<ScoreType>,
    /// One-shot search that produced the loaded results.
    pub search_origin: Option<SearchOrigin>,
    /// Snapshot of the refine intent between dialog turns.
    pub refine_intent: Option<Intent>,
    pub current_slot: Option<RefineSlot>,
    pub location_state: Option<String>,
    pub location_region: Option<String>,
    pub state_id: Option<String>,
    pub region_id: Option<String>,
    pub school_major: Option<String>,
    pub school_major_id: Option<String>,
    pub list_item: Option<usize>,
    pub initialized: bool,
}

impl Default for SessionAttributes {
    fn default() -> Self {
        Self {
            persistent: PersistentAttributes::default(),
            state: None,
            previous_state: None,
            previous_intent: None,
            intro_message: String::new(),
            previous_intro_message: String::new(),
            pending_score: None,
            search_origin: None,
            refine_intent: None,
            current_slot: None,
            location_state: None,
            location_region: None,
            state_id: None,
            region_id: None,
            school_major: None,
            school_major_id: None,
            list_item: None,
            initialized: false,
        }
    }
}

impl SessionAttributes {
    /// Rebuild attributes from the envelope. Unreadable attributes start a
    /// fresh session rather than failing the turn.
    pub fn from_session(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(value) if !value.is_null() => {
                serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                    warn!(error = %e, "Discarding unreadable session attributes");
                    Self::default()
                })
            }
            _ => Self::default(),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize session attributes");
            serde_json::Value::Null
        })
    }

    /// Drop the session-scoped search keys. Profile, lists and cursors stay.
    pub fn clear_session(&mut self) {
        self.state = None;
        self.search_origin = None;
        self.refine_intent = None;
        self.current_slot = None;
        self.location_state = None;
        self.location_region = None;
        self.state_id = None;
        self.region_id = None;
        self.school_major = None;
        self.school_major_id = None;
        self.initialized = false;
    }

    /// Forget the profile, results and favorites.
    pub fn reset_profile(&mut self) {
        self.persistent = PersistentAttributes {
            first_run: false,
            ..PersistentAttributes::default()
        };
        self.pending_score = None;
        self.list_item = None;
        self.intro_message.clear();
        self.previous_intro_message.clear();
    }

    /// Speak the stored intro, a short pause, then `prompt`.
    ///
    /// The prompt becomes the new intro so help and "repeat" style replies can
    /// restate it.
    pub fn compose_prompt(&mut self, prompt: &str) -> String {
        let intro = std::mem::replace(&mut self.intro_message, prompt.to_string());
        if intro.trim().is_empty() {
            return prompt.trim().to_string();
        }
        let message = format!("{}{} {}", intro.trim_end(), PROMPT_BREAK, prompt);
        self.previous_intro_message = intro;
        message.trim().to_string()
    }

    pub fn in_favorites(&self) -> bool {
        self.state == Some(DialogState::Favorites)
    }

    /// The list the user is currently working through.
    pub fn active_list(&self) -> &BoundedList<SchoolRecord> {
        if self.in_favorites() {
            &self.persistent.favorites
        } else {
            &self.persistent.search_results
        }
    }

    pub fn active_page(&self) -> usize {
        if self.in_favorites() {
            self.persistent.favorites_page
        } else {
            self.persistent.search_page
        }
    }

    pub fn set_active_page(&mut self, page: usize) {
        if self.in_favorites() {
            self.persistent.favorites_page = page;
        } else {
            self.persistent.search_page = page;
        }
    }
}

// =============================================================================
// SessionStore
// =============================================================================

/// Owns one turn's attributes and knows where to persist them.
pub struct SessionStore {
    attributes: SessionAttributes,
    user_id: Option<String>,
    repository: Arc<dyn AttributeRepository>,
}

impl SessionStore {
    pub fn new(
        attributes: SessionAttributes,
        user_id: Option<String>,
        repository: Arc<dyn AttributeRepository>,
    ) -> Self {
        Self {
            attributes,
            user_id,
            repository,
        }
    }

    pub fn attributes(&self) -> &SessionAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut SessionAttributes {
        &mut self.attributes
    }

    pub fn into_attributes(self) -> SessionAttributes {
        self.attributes
    }

    /// Seed the session from durable storage.
    ///
    /// A missing record leaves first-run defaults in place; a failed read is
    /// logged and the session continues with what it has.
    pub fn load_persistent(&mut self) {
        if let Some(user_id) = self.user_id.as_deref() {
            match self.repository.load(user_id) {
                Ok(Some(stored)) => {
                    debug!(user_id = %user_id, "Loaded persistent attributes");
                    self.attributes.persistent = stored;
                }
                Ok(None) => {
                    debug!(user_id = %user_id, "No stored attributes, starting fresh");
                    self.attributes.persistent = PersistentAttributes::default();
                }
                Err(e) => {
                    warn!(user_id = %user_id, error = %e, "Failed to load persistent attributes");
                }
            }
        }
        self.attributes.initialized = true;
    }

    /// Write the persistent snapshot. The user is no longer on a first run.
    pub fn persist(&mut self) -> Result<(), DialogError> {
        self.attributes.persistent.first_run = false;
        let Some(user_id) = self.user_id.as_deref() else {
            debug!("No user id on request, skipping persist");
            return Ok(());
        };
        self.repository.save(user_id, &self.attributes.persistent)?;
        Ok(())
    }
}
