//! Paging through results and favorites, picking a school, and editing the
//! favorites list.

use tracing::{debug, info};

use finder_core::types::{BoundedList, DialogState, SchoolRecord, SearchOrigin, PER_PAGE};

use super::{more_info, Turn, ADD_FAVORITE_INTENT, DELETE_FAVORITE_INTENT};
use crate::error::DialogError;
use crate::response::ResponseBuilder;

type Reply = Result<ResponseBuilder, DialogError>;

/// Message keys that differ between the results list and favorites.
struct ListKeys {
    empty: &'static str,
    end: &'static str,
    prompt: &'static str,
    title: &'static str,
}

const RESULT_KEYS: ListKeys = ListKeys {
    empty: "LIST_SCHOOLS_NO_ITEMS_PROMPT",
    end: "LIST_SCHOOLS_END_OF_LIST",
    prompt: "LIST_SCHOOLS_PROMPT",
    title: "RESULTS_TITLE",
};

const FAVORITE_KEYS: ListKeys = ListKeys {
    empty: "FAVORITES_EMPTY",
    end: "FAVORITES_NO_MORE_ITEMS",
    prompt: "FAVORITES_CURRENT_ITEM_PROMPT",
    title: "FAVORITES_TITLE",
};

fn keys_for(turn: &Turn<'_>) -> &'static ListKeys {
    if turn.attrs().in_favorites() {
        &FAVORITE_KEYS
    } else {
        &RESULT_KEYS
    }
}

/// Spoken items of one page, e.g. `4. Gonzaga University. `, and whether the
/// page reaches the end of the list.
fn page_items(list: &BoundedList<SchoolRecord>, page: usize) -> (String, bool) {
    let start = page * PER_PAGE;
    let end = (start + PER_PAGE).min(list.len());
    let items = list
        .iter()
        .enumerate()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(|(i, school)| format!("{}. {}. ", i + 1, school.spoken_name()))
        .collect();
    (items, end >= list.len())
}

/// Speak the current page of the active list.
fn speak_page(turn: &mut Turn<'_>) -> Reply {
    let keys = keys_for(turn);
    let page = turn.attrs().active_page();
    let len = turn.attrs().active_list().len();
    if page * PER_PAGE >= len {
        let end = turn.text(keys.end)?;
        return Ok(ResponseBuilder::new().ask(end));
    }

    let (items, at_end) = page_items(turn.attrs().active_list(), page);
    let closing = turn.text(if at_end { keys.end } else { keys.prompt })?;
    let body = format!("{items} {closing}");
    let message = if page == 0 {
        turn.compose(&body)
    } else {
        body
    };

    let mut builder = ResponseBuilder::new().ask(message);
    if turn.has_display {
        builder = builder.template(turn.list_card(keys.title, turn.attrs().active_list())?);
    }
    Ok(builder)
}

/// Start reading results or favorites from the top.
pub(crate) fn list(turn: &mut Turn<'_>, favorites: bool) -> Reply {
    let intent = turn.intent_name();
    let attrs = turn.attrs_mut();
    attrs.previous_intent = intent;
    if favorites {
        attrs.state = Some(DialogState::Favorites);
        attrs.persistent.favorites_page = 0;
    } else {
        attrs.state = Some(DialogState::ListSchools);
        attrs.persistent.search_page = 0;
    }

    let keys = keys_for(turn);
    let count = turn.attrs().active_list().len();
    if count == 0 {
        return Ok(ResponseBuilder::new().ask(turn.text(keys.empty)?));
    }
    let intro = match (favorites, count) {
        (true, 1) => turn.render("FAVORITES_OVERVIEW_ONE", &[("COUNT", &count)])?,
        (true, _) => turn.render("FAVORITES_OVERVIEW", &[("COUNT", &count)])?,
        (false, 1) => turn.text("LIST_SCHOOLS_INTRO_ONE")?,
        (false, _) => turn.text("LIST_SCHOOLS_INTRO")?,
    };
    turn.attrs_mut().intro_message = intro;
    speak_page(turn)
}

pub(crate) fn next_page(turn: &mut Turn<'_>) -> Reply {
    let attrs = turn.attrs_mut();
    // One page past the last one is the end-of-list position.
    let limit = attrs.active_list().len().saturating_sub(1) / PER_PAGE + 1;
    let page = (attrs.active_page() + 1).min(limit);
    attrs.set_active_page(page);
    speak_page(turn)
}

pub(crate) fn previous_page(turn: &mut Turn<'_>) -> Reply {
    let attrs = turn.attrs_mut();
    match attrs.state {
        Some(DialogState::MoreInformation) => {
            let back_to = attrs
                .previous_state
                .filter(|state| state.is_list())
                .unwrap_or(DialogState::ListSchools);
            attrs.state = Some(back_to);
            attrs.intro_message.clear();
        }
        _ => {
            let page = attrs.active_page();
            attrs.set_active_page(page.saturating_sub(1));
        }
    }

    let attrs = turn.attrs();
    let no_results_list = !attrs.in_favorites()
        && (attrs.persistent.search_results.is_empty()
            || attrs.search_origin == Some(SearchOrigin::Name));
    if no_results_list {
        let attrs = turn.attrs_mut();
        attrs.previous_state = attrs.state;
        attrs.state = Some(DialogState::Start);
        let menu = turn.text("WELCOME_MENU")?;
        return Ok(ResponseBuilder::new().ask(menu));
    }
    if turn.attrs().active_list().is_empty() {
        return Ok(ResponseBuilder::new().ask(turn.text(keys_for(turn).empty)?));
    }
    speak_page(turn)
}

/// "Yes" to hearing the list again.
pub(crate) fn restart(turn: &mut Turn<'_>) -> Reply {
    let attrs = turn.attrs_mut();
    attrs.set_active_page(0);
    attrs.intro_message.clear();
    attrs.previous_intro_message.clear();
    speak_page(turn)
}

pub(crate) fn select_number(turn: &mut Turn<'_>) -> Reply {
    let number = turn
        .slot_value("NUMBER")
        .and_then(|value| value.parse::<usize>().ok());
    select(turn, number.and_then(|n| n.checked_sub(1)))
}

pub(crate) fn select_touch(turn: &mut Turn<'_>) -> Reply {
    let token = turn
        .token
        .clone()
        .ok_or_else(|| DialogError::InvalidRequest("element selected without token".into()))?;
    let index = token
        .parse::<usize>()
        .map_err(|_| DialogError::InvalidRequest(format!("bad list token: {token}")))?;
    select(turn, Some(index))
}

fn select(turn: &mut Turn<'_>, index: Option<usize>) -> Reply {
    let keys = keys_for(turn);
    let list = turn.attrs().active_list();
    if list.is_empty() {
        return Ok(ResponseBuilder::new().ask(turn.text(keys.empty)?));
    }
    let Some((index, school)) = index.and_then(|i| list.get(i).cloned().map(|s| (i, s))) else {
        debug!(index = ?index, len = list.len(), "List selection out of range");
        let message = format!(
            "{}{}",
            turn.text("ERROR_INVALID_VALUE")?,
            turn.text(keys.prompt)?
        );
        return Ok(ResponseBuilder::new().ask(message));
    };

    let attrs = turn.attrs_mut();
    attrs.list_item = Some(index);
    if attrs.in_favorites() {
        attrs.persistent.current_favorite_id = Some(school.id);
    }
    more_info(turn, school)
}

pub(crate) fn add_favorite(turn: &mut Turn<'_>) -> Reply {
    let attrs = turn.attrs_mut();
    attrs.previous_intent = Some(ADD_FAVORITE_INTENT.to_string());

    let persistent = &attrs.persistent;
    let school = persistent.current_school_id.and_then(|id| {
        persistent
            .current_school
            .clone()
            .filter(|school| school.id == id)
            .or_else(|| persistent.search_results.find_by_id(id).cloned())
    });
    let Some(school) = school else {
        return Ok(ResponseBuilder::new().ask(turn.text("FAVORITES_NOT_FOUND")?));
    };

    if let Some(existing) = turn.attrs().persistent.favorites.find_by_id(school.id) {
        let message = turn.render(
            "FAVORITES_DUPLICATE",
            &[("SCHOOL", &existing.spoken_name())],
        )?;
        return Ok(ResponseBuilder::new().ask(message));
    }

    let name = school.spoken_name();
    let school_id = school.id;
    if let Some(evicted) = turn
        .attrs_mut()
        .persistent
        .favorites
        .push_front_evicting(school)
    {
        debug!(evicted_id = evicted.id, "Favorites full, dropped oldest");
    }
    turn.save();
    info!(school_id, "Added favorite");

    let message = turn.render("FAVORITES_ADDED", &[("SCHOOL", &name)])?;
    Ok(ResponseBuilder::new().ask(message))
}

pub(crate) fn delete_favorite(turn: &mut Turn<'_>) -> Reply {
    if turn.attrs().persistent.favorites.is_empty() {
        return Ok(ResponseBuilder::new().ask(turn.text("FAVORITES_EMPTY")?));
    }
    turn.attrs_mut().previous_intent = Some(DELETE_FAVORITE_INTENT.to_string());

    let number = turn.slot_value("NUMBER");
    let spoken = turn.slot_value("SCHOOL");
    let resolved_id = turn
        .resolved("SCHOOL")
        .and_then(|resolved| resolved.id.parse::<u64>().ok());

    let persistent = &turn.attrs().persistent;
    let favorites = &persistent.favorites;
    let index = if let Some(number) = number {
        number
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|i| *i < favorites.len())
    } else if let Some(spoken) = spoken {
        let wanted = spoken.to_lowercase();
        resolved_id
            .and_then(|id| favorites.position(|school| school.id == id))
            .or_else(|| favorites.position(|school| school.name.to_lowercase() == wanted))
    } else {
        [persistent.current_school_id, persistent.current_favorite_id]
            .into_iter()
            .flatten()
            .find_map(|id| favorites.position(|school| school.id == id))
    };
    let Some(index) = index else {
        return Ok(ResponseBuilder::new().ask(turn.text("FAVORITES_NOT_FOUND")?));
    };

    let attrs = turn.attrs_mut();
    let Some(removed) = attrs.persistent.favorites.remove_at(index) else {
        return Ok(ResponseBuilder::new().ask(turn.text("FAVORITES_NOT_FOUND")?));
    };
    if attrs.persistent.current_favorite_id == Some(removed.id) {
        attrs.persistent.current_favorite_id = None;
    }
    let remaining = attrs.persistent.favorites.len();
    let last_page = remaining.saturating_sub(1) / PER_PAGE;
    if attrs.persistent.favorites_page > last_page {
        attrs.persistent.favorites_page = last_page;
    }
    info!(school_id = removed.id, "Removed favorite");

    let confirm = turn.render(
        "FAVORITES_REMOVE_CONFIRM",
        &[("SCHOOL_NAME", &removed.spoken_name())],
    )?;
    turn.attrs_mut().intro_message = confirm;

    let follow_up = if turn.attrs().state == Some(DialogState::ListSchools) {
        turn.text("FAVORITES_FROM_SEARCH")?
    } else if remaining == 0 {
        turn.text("FAVORITES_EMPTY")?
    } else {
        let overview_key = if remaining == 1 {
            "FAVORITES_OVERVIEW_ONE"
        } else {
            "FAVORITES_OVERVIEW"
        };
        let overview = turn.render(overview_key, &[("COUNT", &remaining)])?;
        let persistent = &turn.attrs().persistent;
        let (items, _) = page_items(&persistent.favorites, persistent.favorites_page);
        format!("{overview} {items}")
    };
    let message = turn.compose(&follow_up);
    turn.save();
    Ok(ResponseBuilder::new().ask(message))
}
