//! Conversation engine for the college finder voice skill.
//!
//! Turns a platform request envelope into a reply: derives an [`event::Event`],
//! routes it through the dialog state machine in [`fsm`], runs the matching
//! handler and builds the response envelope with updated session attributes.

pub mod catalog;
pub mod display;
pub mod envelope;
pub mod error;
pub mod event;
pub mod fsm;
pub mod response;
pub mod session;
pub mod skill;

mod handlers;

pub use catalog::MessageCatalog;
pub use envelope::{SkillRequest, SkillResponse};
pub use error::DialogError;
pub use event::Event;
pub use fsm::{route, Route};
pub use response::ResponseBuilder;
pub use session::{RefineSlot, SessionAttributes, SessionStore};
pub use skill::Skill;
