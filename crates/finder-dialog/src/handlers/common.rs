//! Session-level handlers: launch, help, exits, fallbacks and the contextual
//! error reply.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use finder_core::types::DialogState;

use super::{Turn, ADD_FAVORITE_INTENT, DELETE_FAVORITE_INTENT};
use crate::envelope::{CanFulfillIntent, CanFulfillSlot, Fulfillment, Slot};
use crate::error::DialogError;
use crate::response::ResponseBuilder;
use crate::session::PROMPT_BREAK;

type Reply = Result<ResponseBuilder, DialogError>;

pub(crate) fn launch(turn: &mut Turn<'_>) -> Reply {
    let persistent = &turn.attrs().persistent;
    let complete = persistent.profile.complete;
    let partial = !persistent.profile.is_empty();
    let first_run = persistent.first_run;
    let top_pick = persistent.search_results.first().cloned();

    let short = turn.text("WELCOME_SHORT")?;
    let (message, state) = if complete {
        let menu = turn.text("WELCOME_MENU")?;
        match &top_pick {
            Some(school) => {
                let pick = turn.render("WELCOME_TOP_PICK", &[("SCHOOL", &school.spoken_name())])?;
                (format!("{short}{PROMPT_BREAK}{pick} {menu}"), DialogState::Start)
            }
            None => (format!("{short}{PROMPT_BREAK}{menu}"), DialogState::Start),
        }
    } else if partial {
        let prompt = turn.text("WELCOME_BACK_INCOMPLETE_PROFILE")?;
        (format!("{short}{PROMPT_BREAK}{prompt}"), DialogState::Profile)
    } else if !first_run {
        let prompt = turn.text("WELCOME_BACK_NO_PROFILE")?;
        (format!("{short}{PROMPT_BREAK}{prompt}"), DialogState::Profile)
    } else {
        let long = turn.text("WELCOME_LONG")?;
        let prompt = turn.text("WELCOME_BACK_NO_PROFILE")?;
        (format!("{long}{PROMPT_BREAK}{prompt}"), DialogState::Profile)
    };

    let attrs = turn.attrs_mut();
    attrs.state = Some(state);
    attrs.intro_message = message.clone();

    match top_pick.filter(|_| complete && turn.has_display) {
        Some(school) => Ok(ResponseBuilder::new()
            .ask(message)
            .template(turn.school_card(&school)?)),
        None => turn.simple_display(message),
    }
}

pub(crate) fn help(turn: &mut Turn<'_>) -> Reply {
    if turn.attrs().intro_message.is_empty() {
        let menu = turn.text("WELCOME_MENU")?;
        turn.attrs_mut().intro_message = menu;
    }

    let attrs = turn.attrs();
    let state = attrs.state;
    let message = match state {
        Some(DialogState::Scores) if attrs.pending_score.is_some() => {
            turn.text("SCORE_NUMBER_HELP")?
        }
        Some(DialogState::Scores) => turn.text("SCORE_HELP")?,
        Some(DialogState::Cost) => turn.text("COST_HELP")?,
        Some(DialogState::Degree) => turn.text("DEGREE_HELP")?,
        Some(DialogState::Major) => turn.text("MAJOR_HELP")?,
        Some(DialogState::Home) => {
            format!("{} {}", turn.text("HOME_HELP")?, turn.text("HOME_ZIP_CODE")?)
        }
        Some(DialogState::ListSchools) => turn.text("LIST_SCHOOLS_HELP")?,
        Some(DialogState::Favorites) => turn.text("FAVORITES_HELP")?,
        Some(DialogState::SearchByLocation) => turn.text("LOCATION_HELP")?,
        Some(DialogState::Start) if !attrs.persistent.profile.complete => {
            let message = format!(
                "{} {}",
                turn.text("WELCOME_HELP")?,
                turn.text("WELCOME_MENU")?
            );
            turn.attrs_mut().state = Some(DialogState::Profile);
            message
        }
        None => format!(
            "{} {}",
            turn.text("WELCOME_HELP")?,
            turn.text("WELCOME_MENU")?
        ),
        Some(_) => format!("{} {}", turn.text("WELCOME_HELP")?, attrs.intro_message),
    };
    turn.simple_display(message)
}

pub(crate) fn goodbye(turn: &mut Turn<'_>) -> Reply {
    turn.attrs_mut().clear_session();
    turn.save();
    Ok(ResponseBuilder::new()
        .speak(turn.text("GOODBYE")?)
        .end_session())
}

pub(crate) fn session_ended(turn: &mut Turn<'_>) -> Reply {
    info!(reason = ?turn.end_reason, "Session ended");
    turn.attrs_mut().clear_session();
    turn.save();
    Ok(ResponseBuilder::new())
}

pub(crate) fn main_menu(turn: &mut Turn<'_>) -> Reply {
    turn.attrs_mut().state = Some(DialogState::Start);
    let menu = turn.text("WELCOME_MENU")?;
    turn.simple_display(menu)
}

/// A "no" that no more specific handler wanted.
pub(crate) fn decline(turn: &mut Turn<'_>) -> Reply {
    let state = turn.attrs().state;
    let message = match state {
        Some(DialogState::Profile) => {
            turn.attrs_mut().state = Some(DialogState::Start);
            turn.text("WELCOME_MENU")?
        }
        Some(DialogState::ListSchools) => {
            let persistent = &turn.attrs().persistent;
            let count = persistent.search_total.max(persistent.search_results.len() as u64);
            let number = persistent.search_results.len();
            turn.render("REVIEW_RESULTS", &[("COUNT", &count), ("NUMBER", &number)])?
        }
        Some(DialogState::RefineSearch) => {
            let attrs = turn.attrs_mut();
            attrs.previous_state = Some(DialogState::RefineSearch);
            attrs.state = Some(DialogState::RefineNo);
            turn.text("REFINE_SEARCH_UNACCEPTED")?
        }
        _ => turn.text("WELCOME_MENU")?,
    };
    turn.simple_display(message)
}

pub(crate) fn region_list(turn: &mut Turn<'_>) -> Reply {
    let message = format!(
        "{} {}",
        turn.text("LOCATION_HELP")?,
        turn.attrs().intro_message
    );
    turn.simple_display(message.trim().to_string())
}

pub(crate) fn reset_profile(turn: &mut Turn<'_>) -> Reply {
    let attrs = turn.attrs_mut();
    attrs.reset_profile();
    attrs.state = Some(DialogState::Profile);
    turn.save();
    info!("Profile reset");

    let next = turn.text("PROFILE_RESET_NEXT")?;
    Ok(ResponseBuilder::new()
        .speak(format!("{}{}", turn.text("PROFILE_RESET")?, next))
        .reprompt(next))
}

pub(crate) fn unhandled(turn: &mut Turn<'_>) -> Reply {
    debug!(intent = ?turn.intent_name(), state = ?turn.attrs().state, "Unhandled turn");
    if turn.attrs().state == Some(DialogState::RefineSearch) {
        turn.attrs_mut().state = None;
    }
    let message = format!(
        "{}{}",
        turn.text("ERROR_CANT")?,
        turn.text("WELCOME_MENU")?
    );
    Ok(ResponseBuilder::new().ask(message))
}

/// Answer a fulfillment probe: only searches with a recognized value qualify.
pub(crate) fn can_fulfill(turn: &mut Turn<'_>) -> Reply {
    let intent = turn
        .intent
        .as_ref()
        .ok_or_else(|| DialogError::InvalidRequest("fulfillment probe without intent".into()))?;

    let candidates: &[&str] = match intent.name.as_str() {
        "SearchByNameIntent" => &["SCHOOL_NAME"],
        "SearchByLocationIntent" => &["STATE", "REGION"],
        "SearchByMajorIntent" => &["MAJOR"],
        _ => &[],
    };
    let matched = candidates
        .iter()
        .find(|name| intent.slot(name).is_some_and(Slot::is_validated));

    let answer = |fulfillment: Fulfillment| CanFulfillSlot {
        can_understand: fulfillment,
        can_fulfill: fulfillment,
    };
    let result = match matched {
        Some(name) => CanFulfillIntent {
            can_fulfill: Fulfillment::Yes,
            slots: BTreeMap::from([(name.to_string(), answer(Fulfillment::Yes))]),
        },
        None => CanFulfillIntent {
            can_fulfill: Fulfillment::No,
            slots: ["SCHOOL_NAME", "STATE", "REGION"]
                .into_iter()
                .map(|name| (name.to_string(), answer(Fulfillment::No)))
                .collect(),
        },
    };
    debug!(intent = %intent.name, can_fulfill = ?result.can_fulfill, "Fulfillment probe");
    Ok(ResponseBuilder::new().can_fulfill(result))
}

/// The reply for a turn whose handler failed, chosen by where the user is.
pub(crate) fn contextual_error(turn: &Turn<'_>) -> ResponseBuilder {
    let message = error_message(turn)
        .or_else(|_| turn.text("GENERIC_ERROR"))
        .unwrap_or_else(|e| {
            warn!(error = %e, "No error message available");
            String::new()
        });
    ResponseBuilder::new().ask(message)
}

fn error_message(turn: &Turn<'_>) -> Result<String, DialogError> {
    let attrs = turn.attrs();
    match attrs.state {
        Some(DialogState::Scores) => match attrs.pending_score {
            Some(kind) => {
                let (low, high) = kind.range();
                turn.render(
                    "SCORE_NUMBER_ERROR",
                    &[("SCORE", &kind.label()), ("RANGELOW", &low), ("RANGEHIGH", &high)],
                )
            }
            None => turn.text("SCORE_ERROR"),
        },
        Some(DialogState::Cost) => turn.text("COST_ERROR"),
        Some(DialogState::Degree) => turn.text("DEGREE_ERROR"),
        Some(DialogState::Major) => turn.text("MAJOR_ERROR"),
        Some(DialogState::Home) => turn.text("HOME_ERROR"),
        Some(DialogState::RefineSearch) => turn.text("SEARCH_ERROR"),
        Some(DialogState::ListSchools) => turn.text("LIST_SCHOOLS_HELP"),
        Some(DialogState::MoreInformation) => turn.text("MORE_INFORMATION_ERROR"),
        Some(DialogState::Profile) => turn.text("PROFILE_ERROR"),
        Some(DialogState::Favorites) => match attrs.previous_intent.as_deref() {
            Some(DELETE_FAVORITE_INTENT) => turn.text("FAVORITES_DELETE_ERROR"),
            Some(ADD_FAVORITE_INTENT) => turn.text("FAVORITES_ADD_ERROR"),
            _ => turn.text("FAVORITES_ERROR"),
        },
        _ => turn.text("ERROR_NOT_UNDERSTOOD"),
    }
}
