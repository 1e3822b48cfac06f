//! One-shot searches by school name, location and major.

use tracing::{debug, info};

use finder_core::geo;
use finder_core::types::{DialogState, SearchOrigin, NO_PREFERENCE};
use finder_search::{LocationFilter, SearchOutcome, SearchQuery};

use super::{common, more_info, Turn, SEARCH_BY_NAME_INTENT};
use crate::error::DialogError;
use crate::response::ResponseBuilder;

type Reply = Result<ResponseBuilder, DialogError>;

const EXIT_WORDS: [&str; 3] = ["stop", "exit", "cancel"];

/// "Yes" or "start over" while a one-shot search is waiting for its value.
pub(crate) fn start_over(turn: &mut Turn<'_>) -> Reply {
    let key = match turn.attrs().state {
        Some(DialogState::SearchByLocation) => "SEARCH_BY_LOCATION_PROMPT",
        Some(DialogState::SearchByMajor) => "SEARCH_BY_MAJOR_PROMPT",
        _ => "SEARCH_BY_NAME_PROMPT",
    };
    let prompt = turn.text(key)?;
    turn.simple_display(prompt)
}

pub(crate) async fn by_name(turn: &mut Turn<'_>) -> Reply {
    let Some(name) = turn
        .slot_value("SCHOOL_NAME")
        .or_else(|| turn.slot_value("SEARCHQUERY"))
    else {
        turn.attrs_mut().state = Some(DialogState::SearchByName);
        let prompt = turn.text("SEARCH_BY_NAME_PROMPT")?;
        return turn.simple_display(prompt);
    };

    // A school already in the active list is answered without searching.
    let resolved_id = turn
        .resolved("SCHOOL_NAME")
        .and_then(|resolved| resolved.id.parse::<u64>().ok());
    let list = turn.attrs().active_list();
    let position = resolved_id
        .and_then(|id| list.position(|school| school.id == id))
        .or_else(|| {
            let wanted = name.to_lowercase();
            list.position(|school| school.name.to_lowercase() == wanted)
        });
    if let Some(index) = position {
        let school = list.get(index).cloned();
        if let Some(school) = school {
            debug!(school_id = school.id, "Matched school in loaded list");
            turn.attrs_mut().list_item = Some(index);
            return more_info(turn, school);
        }
    }

    if EXIT_WORDS.contains(&name.to_lowercase().as_str()) {
        return common::goodbye(turn);
    }

    let intro = turn.render("SEARCH_BY_NAME_SCHOOL_NAME", &[("SCHOOL_NAME", &name)])?;
    turn.attrs_mut().intro_message = intro;

    match turn.run_search(&SearchQuery::by_name(name.clone())).await {
        Err(_) => {
            turn.attrs_mut().state = Some(DialogState::Start);
            let failed = turn.render("SEARCH_BY_NAME_SEARCH_ERROR", &[("SCHOOL_NAME", &name)])?;
            let message = format!("{} {}", turn.compose(&failed), turn.text("WELCOME_MENU")?);
            Ok(ResponseBuilder::new().ask(message))
        }
        Ok(outcome) if outcome.is_empty() => {
            turn.attrs_mut().state = Some(DialogState::SearchByName);
            let message = turn.text("SEARCH_BY_NO_RESULTS")?;
            turn.simple_display(message)
        }
        Ok(outcome) => {
            let Some(school) = outcome.results.into_iter().next() else {
                return Err(DialogError::InvalidRequest("empty search outcome".into()));
            };
            info!(school_id = school.id, "School found by name");
            let attrs = turn.attrs_mut();
            attrs.previous_intent = Some(SEARCH_BY_NAME_INTENT.to_string());
            attrs.search_origin = Some(SearchOrigin::Name);
            if attrs.state == Some(DialogState::Favorites) {
                attrs.state = Some(DialogState::Start);
            }
            more_info(turn, school)
        }
    }
}

pub(crate) async fn by_location(turn: &mut Turn<'_>) -> Reply {
    let state_slot = turn.slot_value("STATE");
    let region_slot = turn.slot_value("REGION");
    if state_slot.is_none() && region_slot.is_none() {
        turn.attrs_mut().state = Some(DialogState::SearchByLocation);
        let prompt = turn.text("SEARCH_BY_LOCATION_PROMPT")?;
        return turn.simple_display(prompt);
    }

    let attrs = turn.attrs_mut();
    attrs.location_state = None;
    attrs.location_region = None;
    attrs.state_id = None;
    attrs.region_id = None;

    let (location, filter) = if let Some(spoken) = state_slot {
        let resolved = turn.resolved("STATE");
        let name = resolved.as_ref().map_or(spoken.clone(), |r| r.name.clone());
        let abbreviation = resolved
            .map(|r| r.id)
            .filter(|id| !id.is_empty())
            .or_else(|| geo::state_abbreviation(&name).map(str::to_string));
        let Some(abbreviation) = abbreviation else {
            return no_results(turn, DialogState::SearchByLocation);
        };
        let attrs = turn.attrs_mut();
        attrs.location_state = Some(name.clone());
        attrs.state_id = Some(abbreviation.clone());
        (name, LocationFilter::State(abbreviation))
    } else {
        let spoken = region_slot.unwrap_or_default();
        let Some(region_id) = turn.resolved("REGION").map(|r| r.id).filter(|id| !id.is_empty())
        else {
            return no_results(turn, DialogState::SearchByLocation);
        };
        let attrs = turn.attrs_mut();
        attrs.location_region = Some(spoken.clone());
        attrs.region_id = Some(region_id.clone());
        (format!("the {spoken}"), LocationFilter::Region(region_id))
    };

    let intro = turn.render("SEARCH_BY_LOCATION", &[("LOCATION", &location)])?;
    turn.attrs_mut().intro_message = intro;

    match turn.run_search(&SearchQuery::by_location(filter)).await {
        Err(_) => {
            let failed =
                turn.render("SEARCH_BY_LOCATION_SEARCH_ERROR", &[("LOCATION", &location)])?;
            search_failed(turn, &failed)
        }
        Ok(outcome) if outcome.is_empty() => no_results(turn, DialogState::SearchByLocation),
        Ok(outcome) => {
            let found = turn.render(
                "SEARCH_BY_LOCATION_REFINE",
                &[("COUNT", &outcome.total), ("LOCATION", &location)],
            )?;
            found_results(turn, outcome, SearchOrigin::Location, found)
        }
    }
}

pub(crate) async fn by_major(turn: &mut Turn<'_>) -> Reply {
    let resolved = turn
        .resolved("MAJOR")
        .filter(|r| !r.id.is_empty() && r.id != NO_PREFERENCE);
    let Some(major) = resolved else {
        turn.attrs_mut().state = Some(DialogState::SearchByMajor);
        let prompt = turn.text("SEARCH_BY_MAJOR_PROMPT")?;
        return turn.simple_display(prompt);
    };

    let attrs = turn.attrs_mut();
    attrs.school_major = Some(major.name.clone());
    attrs.school_major_id = Some(major.id.clone());
    let intro = turn.render("SEARCH_BY_MAJOR", &[("MAJOR", &major.name)])?;
    turn.attrs_mut().intro_message = intro;

    match turn.run_search(&SearchQuery::by_major(major.id.clone())).await {
        Err(_) => {
            let failed = turn.render("SEARCH_BY_MAJOR_SEARCH_ERROR", &[("MAJOR", &major.name)])?;
            search_failed(turn, &failed)
        }
        Ok(outcome) if outcome.is_empty() => no_results(turn, DialogState::SearchByMajor),
        Ok(outcome) => {
            let found = turn.render(
                "SEARCH_BY_MAJOR_REFINE",
                &[("COUNT", &outcome.total), ("MAJOR", &major.name)],
            )?;
            found_results(turn, outcome, SearchOrigin::Major, found)
        }
    }
}

fn search_failed(turn: &mut Turn<'_>, failed: &str) -> Reply {
    turn.attrs_mut().state = Some(DialogState::Start);
    let message = format!("{} {}", turn.compose(failed), turn.text("WELCOME_MENU")?);
    turn.simple_display(message)
}

fn no_results(turn: &mut Turn<'_>, state: DialogState) -> Reply {
    turn.attrs_mut().state = Some(state);
    let message = turn.text("SEARCH_BY_NO_RESULTS")?;
    turn.simple_display(message)
}

/// Store a one-shot outcome and offer to refine or list it.
fn found_results(
    turn: &mut Turn<'_>,
    outcome: SearchOutcome,
    origin: SearchOrigin,
    found: String,
) -> Reply {
    info!(total = outcome.total, origin = ?origin, "One-shot search found schools");
    turn.store_results(outcome);
    let stored = turn.attrs().persistent.search_results.len();

    let next = if stored < 2 {
        turn.text("SEARCH_FEW_RESULTS")?
    } else {
        turn.render("SEARCH_MORE_ONE", &[("NUMBER", &stored)])?
    };
    let message = format!("{found}{next}");

    let attrs = turn.attrs_mut();
    attrs.search_origin = Some(origin);
    attrs.state = Some(DialogState::ListSchools);
    attrs.intro_message = message.clone();
    turn.simple_display(message)
}
