//! Voice platform request and response envelopes.
//!
//! Field names follow the platform's JSON (camelCase, with a few
//! capitalized context keys). Unknown fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entity-resolution status meaning the spoken value matched a catalog entry.
pub const ER_SUCCESS_MATCH: &str = "ER_SUCCESS_MATCH";

// =============================================================================
// Inbound
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub supported_interfaces: SupportedInterfaces,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportedInterfaces {
    #[serde(rename = "Display", default, skip_serializing_if = "Option::is_none")]
    pub display: Option<serde_json::Value>,
}

/// The request body, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(RequestInfo),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEnded),
    #[serde(rename = "Display.ElementSelected")]
    ElementSelected(ElementSelected),
    CanFulfillIntentRequest(IntentRequest),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    #[serde(default)]
    pub request_id: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en-US".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(flatten)]
    pub info: RequestInfo,
    #[serde(default)]
    pub dialog_state: Option<DialogProgress>,
    pub intent: Intent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEnded {
    #[serde(flatten)]
    pub info: RequestInfo,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSelected {
    #[serde(flatten)]
    pub info: RequestInfo,
    pub token: String,
}

/// Progress of the platform's own slot-filling dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogProgress {
    Started,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub slots: BTreeMap<String, Slot>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            confirmation_status: ConfirmationStatus::None,
            slots: BTreeMap::new(),
        }
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.get(name)
    }

    pub fn slot_mut(&mut self, name: &str) -> &mut Slot {
        self.slots
            .entry(name.to_string())
            .or_insert_with(|| Slot::empty(name))
    }

    /// Raw spoken value of a slot, if any.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.slot(name).and_then(|s| s.value.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<Resolutions>,
}

impl Slot {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
            confirmation_status: ConfirmationStatus::None,
            resolutions: None,
        }
    }

    /// Canonical value from the first resolution authority, if matched.
    pub fn resolved(&self) -> Option<&ResolvedValue> {
        let authority = self.resolutions.as_ref()?.resolutions_per_authority.first()?;
        if authority.status.code != ER_SUCCESS_MATCH {
            return None;
        }
        authority.values.first().map(|v| &v.value)
    }

    pub fn is_validated(&self) -> bool {
        self.resolved().is_some()
    }

    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolutions {
    #[serde(default)]
    pub resolutions_per_authority: Vec<Authority>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authority {
    #[serde(default)]
    pub authority: String,
    pub status: ResolutionStatus,
    #[serde(default)]
    pub values: Vec<ResolutionValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionStatus {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionValue {
    pub value: ResolvedValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedValue {
    pub name: String,
    #[serde(default)]
    pub id: String,
}

impl SkillRequest {
    pub fn info(&self) -> &RequestInfo {
        match &self.request {
            Request::LaunchRequest(info) => info,
            Request::IntentRequest(r) | Request::CanFulfillIntentRequest(r) => &r.info,
            Request::SessionEndedRequest(r) => &r.info,
            Request::ElementSelected(r) => &r.info,
        }
    }

    pub fn locale(&self) -> &str {
        &self.info().locale
    }

    /// Platform user id, from the session or the system context.
    pub fn user_id(&self) -> Option<&str> {
        let from_session = self
            .session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .map(|u| u.user_id.as_str());
        let from_context = || {
            self.system()
                .and_then(|s| s.user.as_ref())
                .map(|u| u.user_id.as_str())
        };
        from_session.or_else(from_context).filter(|id| !id.is_empty())
    }

    pub fn application_id(&self) -> Option<&str> {
        let from_session = self
            .session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .map(|a| a.application_id.as_str());
        let from_context = || {
            self.system()
                .and_then(|s| s.application.as_ref())
                .map(|a| a.application_id.as_str())
        };
        from_session.or_else(from_context)
    }

    /// Whether the requesting device can render display templates.
    pub fn has_display(&self) -> bool {
        self.system()
            .and_then(|s| s.device.as_ref())
            .is_some_and(|d| d.supported_interfaces.display.is_some())
    }

    pub fn session_attributes(&self) -> Option<&serde_json::Value> {
        self.session.as_ref().and_then(|s| s.attributes.as_ref())
    }

    fn system(&self) -> Option<&SystemContext> {
        self.context.as_ref().and_then(|c| c.system.as_ref())
    }
}

// =============================================================================
// Outbound
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<serde_json::Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_fulfill_intent: Option<CanFulfillIntent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl OutputSpeech {
    /// Wrap speech markup in a `<speak>` element.
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", text.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Response directives, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Display.RenderTemplate")]
    RenderTemplate { template: crate::display::Template },
    #[serde(rename = "Hint")]
    Hint { hint: HintText },
    #[serde(rename = "Dialog.Delegate", rename_all = "camelCase")]
    Delegate { updated_intent: Option<Intent> },
    #[serde(rename = "Dialog.ElicitSlot", rename_all = "camelCase")]
    ElicitSlot {
        slot_to_elicit: String,
        updated_intent: Option<Intent>,
    },
    #[serde(rename = "Dialog.ConfirmSlot", rename_all = "camelCase")]
    ConfirmSlot {
        slot_to_confirm: String,
        updated_intent: Option<Intent>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintText {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fulfillment {
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanFulfillIntent {
    pub can_fulfill: Fulfillment,
    #[serde(default)]
    pub slots: BTreeMap<String, CanFulfillSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanFulfillSlot {
    pub can_understand: Fulfillment,
    pub can_fulfill: Fulfillment,
}
