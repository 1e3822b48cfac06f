//! The multi-turn refine dialog.
//!
//! The platform owns slot elicitation; these handlers pre-fill what is
//! already known, settle one unconfirmed slot per turn, and run the combined
//! search once the platform reports the dialog complete.

use tracing::{debug, info};

use finder_core::geo;
use finder_core::types::{DialogState, Profile, SearchOrigin, ZipCode, NO_PREFERENCE};
use finder_search::{
    LocationFilter, MajorFilter, Ownership, SchoolSize, ScoreFloor, SearchQuery, SortOrder,
};

use super::Turn;
use crate::envelope::{ConfirmationStatus, DialogProgress, Directive, Intent, Slot};
use crate::error::DialogError;
use crate::response::ResponseBuilder;
use crate::session::{RefineSlot, SessionAttributes};

type Reply = Result<ResponseBuilder, DialogError>;

/// Minimum share of degrees a school must award in the chosen major.
const REFINE_MAJOR_SHARE: f32 = 0.1;

pub(crate) fn fill(turn: &mut Turn<'_>) -> Reply {
    if turn.attrs().state == Some(DialogState::RefineNo) {
        return reopen_declined(turn);
    }

    let mut intent = turn
        .intent
        .clone()
        .ok_or_else(|| DialogError::InvalidRequest("refine search without intent".into()))?;
    turn.attrs_mut().state = Some(DialogState::RefineSearch);
    prefill_from_profile(&mut intent, &turn.attrs().persistent.profile);
    apply_denials(&mut intent);

    let origin = turn.attrs().search_origin;
    match origin {
        Some(origin) if turn.progress == Some(DialogProgress::Started) => {
            prefill_from_search(turn, intent, origin)
        }
        _ => resolve_next_slot(turn, intent),
    }
}

pub(crate) async fn complete(turn: &mut Turn<'_>) -> Reply {
    let intent = turn
        .intent
        .clone()
        .or_else(|| turn.attrs().refine_intent.clone())
        .ok_or_else(|| DialogError::InvalidRequest("refine completed without intent".into()))?;
    let query = build_query(&intent, turn.attrs());

    let outcome = match turn.run_search(&query).await {
        Ok(outcome) => outcome,
        Err(_) => {
            turn.attrs_mut().state = Some(DialogState::Start);
            let message = turn.text("REVIEW_ERROR")?;
            let message = turn.compose(&message);
            return Ok(ResponseBuilder::new().ask(message));
        }
    };
    if outcome.is_empty() {
        turn.attrs_mut().state = Some(DialogState::Start);
        let message = turn.text("REVIEW_NO_RESULTS")?;
        return turn.simple_display(message);
    }

    info!(total = outcome.total, "Refined search found schools");
    turn.store_results(outcome);
    let persistent = &turn.attrs().persistent;
    let stored = persistent.search_results.len();
    let message = if stored > 1 {
        turn.render(
            "REVIEW_RESULTS",
            &[("COUNT", &persistent.search_total), ("NUMBER", &stored)],
        )?
    } else {
        turn.text("REVIEW_RESULTS_ONE")?
    };

    let attrs = turn.attrs_mut();
    attrs.state = Some(DialogState::Start);
    attrs.search_origin = Some(SearchOrigin::Refine);
    attrs.refine_intent = None;
    attrs.current_slot = None;
    attrs.intro_message.clear();
    let message = turn.compose(&message);
    turn.save();
    Ok(ResponseBuilder::new().ask(message))
}

/// The user said "no" mid-dialog: give the open slot no preference and carry on.
fn reopen_declined(turn: &mut Turn<'_>) -> Reply {
    let mut intent = turn
        .attrs()
        .refine_intent
        .clone()
        .or_else(|| turn.intent.clone())
        .ok_or_else(|| DialogError::InvalidRequest("nothing to refine".into()))?;

    let slot = turn.attrs().current_slot.unwrap_or(RefineSlot::Location);
    debug!(%slot, "Declined refine slot");
    if slot == RefineSlot::Location {
        zero_out_location(&mut intent, None);
        turn.attrs_mut().current_slot = Some(RefineSlot::Major);
    } else {
        set_value(&mut intent, slot, NO_PREFERENCE, true);
    }
    delegate(turn, intent)
}

/// Seed location or major from the one-shot search that preceded the dialog.
fn prefill_from_search(turn: &mut Turn<'_>, mut intent: Intent, origin: SearchOrigin) -> Reply {
    let attrs = turn.attrs();
    let location = match (&attrs.location_region, &attrs.location_state) {
        (Some(region), _) => Some((RefineSlot::Region, region.clone())),
        (None, Some(state)) => Some((RefineSlot::State, state.clone())),
        (None, None) => None,
    };
    let school_major = attrs.school_major.clone();

    match (origin, location, school_major) {
        (SearchOrigin::Location, Some((mode, value)), _) => {
            zero_out_location(&mut intent, Some(mode));
            set_value(&mut intent, mode, value, true);
            let profile_major = turn.attrs().persistent.profile.major_value().cloned();
            let attrs = turn.attrs_mut();
            attrs.search_origin = None;
            match profile_major {
                Some(major) => {
                    set_value(&mut intent, RefineSlot::Major, major.category.clone(), false);
                    attrs.school_major_id = Some(major.id);
                    let prompt = turn.render(
                        "INTRODUCTION_MAJOR_PROFILE",
                        &[("MAJOR", &major.category)],
                    )?;
                    confirm_slot(turn, intent, RefineSlot::Major, prompt)
                }
                None => {
                    attrs.current_slot = Some(RefineSlot::Major);
                    delegate(turn, intent)
                }
            }
        }
        (SearchOrigin::Major, _, Some(major)) => {
            set_value(&mut intent, RefineSlot::Major, major, true);
            let attrs = turn.attrs_mut();
            attrs.search_origin = None;
            attrs.current_slot = Some(RefineSlot::Major);
            delegate(turn, intent)
        }
        _ => {
            turn.attrs_mut().current_slot = Some(RefineSlot::Location);
            delegate(turn, intent)
        }
    }
}

/// Settle the first slot, in dialog order, that nobody has confirmed yet.
fn resolve_next_slot(turn: &mut Turn<'_>, mut intent: Intent) -> Reply {
    let next = RefineSlot::ORDER.into_iter().find_map(|slot| {
        intent
            .slot(slot.name())
            .filter(|s| s.confirmation_status == ConfirmationStatus::None)
            .map(|s| (slot, s.clone()))
    });
    let Some((slot, current)) = next else {
        return delegate(turn, intent);
    };

    let spoken = current
        .value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    let accepted = if slot.takes_raw_value() {
        spoken.clone().filter(|value| accepts_raw(slot, value))
    } else {
        current.resolved().map(|resolved| resolved.name.clone())
    };

    match (accepted, spoken) {
        (Some(value), _) => {
            debug!(%slot, %value, "Refine slot accepted");
            set_value(&mut intent, slot, value.clone(), true);
            accept_slot(turn, intent, slot, &current, value)
        }
        (None, Some(spoken)) => {
            debug!(%slot, %spoken, "Refine slot value not recognized");
            let prompt = format!(
                "{}{}",
                turn.render("REFINE_SEARCH_NO_MATCH", &[("VALUE", &spoken)])?,
                turn.text(slot.prompt_key())?
            );
            elicit_slot(turn, intent, slot, prompt)
        }
        (None, None) => delegate(turn, intent),
    }
}

fn accept_slot(
    turn: &mut Turn<'_>,
    mut intent: Intent,
    slot: RefineSlot,
    current: &Slot,
    value: String,
) -> Reply {
    match slot {
        RefineSlot::Location => {
            let mode = RefineSlot::location_mode(&value);
            let stored_home = slot_value(&intent, RefineSlot::Home).is_some();
            zero_out_location(&mut intent, mode);
            if mode == Some(RefineSlot::Home) && stored_home {
                let prompt = turn.text("INTRODUCTION_HOME_CONFIRM")?;
                return confirm_slot(turn, intent, slot, prompt);
            }
            delegate(turn, intent)
        }
        RefineSlot::Major => {
            turn.attrs_mut().school_major_id = current
                .resolved()
                .map(|resolved| resolved.id.clone())
                .filter(|id| !id.is_empty());
            delegate(turn, intent)
        }
        RefineSlot::Cost => {
            let prompt = turn.render("INTRODUCTION_COST_CONFIRM", &[("COST", &value)])?;
            confirm_slot(turn, intent, slot, prompt)
        }
        RefineSlot::Scores => {
            let prompt = turn.render("INTRODUCTION_SCORE_CONFIRM", &[("SCORE", &value)])?;
            confirm_slot(turn, intent, slot, prompt)
        }
        _ => delegate(turn, intent),
    }
}

fn accepts_raw(slot: RefineSlot, value: &str) -> bool {
    match slot {
        RefineSlot::Home => value.parse::<ZipCode>().is_ok(),
        RefineSlot::Distance | RefineSlot::Cost => parse_amount(value).is_some(),
        RefineSlot::Scores => {
            value.eq_ignore_ascii_case("SAT") || value.eq_ignore_ascii_case("ACT")
        }
        _ => false,
    }
}

fn parse_amount(value: &str) -> Option<u32> {
    value.replace(['$', ','], "").trim().parse().ok()
}

// =============================================================================
// Directives
// =============================================================================

fn delegate(turn: &mut Turn<'_>, intent: Intent) -> Reply {
    let attrs = turn.attrs_mut();
    attrs.refine_intent = Some(intent.clone());
    attrs.state = Some(DialogState::RefineSearch);
    Ok(ResponseBuilder::new().delegate(intent))
}

fn confirm_slot(turn: &mut Turn<'_>, intent: Intent, slot: RefineSlot, prompt: String) -> Reply {
    remember(turn, &intent, slot);
    Ok(ResponseBuilder::new()
        .ask(prompt)
        .directive(Directive::ConfirmSlot {
            slot_to_confirm: slot.name().to_string(),
            updated_intent: Some(intent),
        }))
}

fn elicit_slot(turn: &mut Turn<'_>, intent: Intent, slot: RefineSlot, prompt: String) -> Reply {
    remember(turn, &intent, slot);
    Ok(ResponseBuilder::new()
        .ask(prompt)
        .directive(Directive::ElicitSlot {
            slot_to_elicit: slot.name().to_string(),
            updated_intent: Some(intent),
        }))
}

fn remember(turn: &mut Turn<'_>, intent: &Intent, slot: RefineSlot) {
    let attrs = turn.attrs_mut();
    attrs.current_slot = Some(slot);
    attrs.refine_intent = Some(intent.clone());
    attrs.state = Some(DialogState::RefineSearch);
}

// =============================================================================
// Slot bookkeeping
// =============================================================================

fn set_value(intent: &mut Intent, slot: RefineSlot, value: impl Into<String>, confirm: bool) {
    let slot = intent.slot_mut(slot.name());
    slot.value = Some(value.into());
    if confirm {
        slot.confirmation_status = ConfirmationStatus::Confirmed;
    }
}

/// A slot value that carries a preference, ignoring blanks and `0`.
fn slot_value(intent: &Intent, slot: RefineSlot) -> Option<&str> {
    intent
        .value(slot.name())
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != NO_PREFERENCE)
}

fn resolved_id(intent: &Intent, slot: RefineSlot) -> Option<String> {
    intent
        .slot(slot.name())
        .and_then(Slot::resolved)
        .map(|resolved| resolved.id.clone())
        .filter(|id| !id.is_empty())
}

fn is_unanswered(intent: &Intent, slot: RefineSlot) -> bool {
    !intent.slot(slot.name()).is_some_and(Slot::has_value)
}

/// Copy saved profile answers into slots the user has not filled yet.
fn prefill_from_profile(intent: &mut Intent, profile: &Profile) {
    if is_unanswered(intent, RefineSlot::Cost) {
        match profile.cost_ceiling() {
            Some(cost) => set_value(intent, RefineSlot::Cost, cost.to_string(), false),
            None => set_value(intent, RefineSlot::Cost, NO_PREFERENCE, true),
        }
    }
    if is_unanswered(intent, RefineSlot::Degree) {
        let degree = profile
            .degree_value()
            .map_or_else(|| NO_PREFERENCE.to_string(), |d| d.to_string());
        set_value(intent, RefineSlot::Degree, degree, true);
    }
    if is_unanswered(intent, RefineSlot::Home) {
        if let Some(zip) = profile.home_value() {
            set_value(intent, RefineSlot::Home, zip.as_str(), false);
        }
    }
    if is_unanswered(intent, RefineSlot::Scores) {
        match profile.authoritative_score() {
            Some((kind, _)) => set_value(intent, RefineSlot::Scores, kind.label(), false),
            None => set_value(intent, RefineSlot::Scores, NO_PREFERENCE, true),
        }
    }
}

/// A denied confirmation means "no preference" for that slot.
fn apply_denials(intent: &mut Intent) {
    let denied: Vec<RefineSlot> = RefineSlot::ORDER
        .into_iter()
        .filter(|slot| {
            intent
                .slot(slot.name())
                .is_some_and(|s| s.confirmation_status == ConfirmationStatus::Denied)
        })
        .collect();
    for slot in denied {
        if slot == RefineSlot::Location {
            zero_out_location(intent, None);
        } else {
            set_value(intent, slot, NO_PREFERENCE, true);
        }
    }
}

/// Confirm the location mode and mark the other location slots as skipped.
/// `None` skips location entirely.
fn zero_out_location(intent: &mut Intent, mode: Option<RefineSlot>) {
    let (location, skipped): (&str, &[RefineSlot]) = match mode {
        Some(RefineSlot::State) => (
            "STATE",
            &[RefineSlot::Region, RefineSlot::Home, RefineSlot::Distance],
        ),
        Some(RefineSlot::Region) => (
            "REGION",
            &[RefineSlot::State, RefineSlot::Home, RefineSlot::Distance],
        ),
        Some(RefineSlot::Home) => ("HOME", &[RefineSlot::State, RefineSlot::Region]),
        _ => (
            NO_PREFERENCE,
            &[
                RefineSlot::State,
                RefineSlot::Region,
                RefineSlot::Home,
                RefineSlot::Distance,
            ],
        ),
    };
    for slot in skipped {
        set_value(intent, *slot, NO_PREFERENCE, true);
    }
    set_value(intent, RefineSlot::Location, location, true);
}

// =============================================================================
// Query
// =============================================================================

/// Translate the completed refine intent into search criteria.
pub(crate) fn build_query(intent: &Intent, attrs: &SessionAttributes) -> SearchQuery {
    let profile = &attrs.persistent.profile;
    let upper = |slot: RefineSlot| slot_value(intent, slot).map(str::to_ascii_uppercase);

    let location = match slot_value(intent, RefineSlot::Location).and_then(RefineSlot::location_mode)
    {
        Some(RefineSlot::Home) => {
            let zip = slot_value(intent, RefineSlot::Home)
                .and_then(|value| value.parse::<ZipCode>().ok())
                .or_else(|| profile.home_value().cloned());
            let distance = slot_value(intent, RefineSlot::Distance).and_then(parse_amount);
            zip.zip(distance)
                .map(|(zip, distance_miles)| LocationFilter::Zip { zip, distance_miles })
        }
        Some(RefineSlot::State) => resolved_id(intent, RefineSlot::State)
            .or_else(|| {
                slot_value(intent, RefineSlot::State)
                    .and_then(geo::state_abbreviation)
                    .map(str::to_string)
            })
            .or_else(|| attrs.state_id.clone())
            .map(LocationFilter::State),
        Some(RefineSlot::Region) => resolved_id(intent, RefineSlot::Region)
            .or_else(|| attrs.region_id.clone())
            .map(LocationFilter::Region),
        _ => None,
    };

    let ownership = match upper(RefineSlot::Type).as_deref() {
        Some("PUBLIC") => Some(Ownership::Public),
        Some("PRIVATE") => Some(Ownership::Private),
        _ => None,
    };
    let size = match upper(RefineSlot::Size).as_deref() {
        Some("SMALL") => Some(SchoolSize::Small),
        Some("MEDIUM") => Some(SchoolSize::Medium),
        Some("LARGE") => Some(SchoolSize::Large),
        _ => None,
    };
    let score = match upper(RefineSlot::Scores).as_deref() {
        Some("SAT") => profile.sat.as_ref().and_then(|p| p.value().copied()).map(ScoreFloor::Sat),
        Some("ACT") => profile.act.as_ref().and_then(|p| p.value().copied()).map(ScoreFloor::Act),
        _ => None,
    };
    let major = slot_value(intent, RefineSlot::Major)
        .and(attrs.school_major_id.clone())
        .filter(|id| !id.is_empty() && id != NO_PREFERENCE)
        .map(|id| MajorFilter {
            id,
            min_share: REFINE_MAJOR_SHARE,
        });

    SearchQuery {
        name: None,
        location,
        ownership,
        size,
        degree: slot_value(intent, RefineSlot::Degree).and_then(|value| value.parse().ok()),
        max_cost: slot_value(intent, RefineSlot::Cost)
            .and_then(parse_amount)
            .filter(|cost| *cost > 0),
        score,
        major,
        require_tuition: true,
        sort: SortOrder::Size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::types::{Degree, Major, Preference};

    fn intent_with(values: &[(&str, &str)]) -> Intent {
        let mut intent = Intent::new("RefineSearchIntent");
        for slot in RefineSlot::ORDER {
            intent.slot_mut(slot.name());
        }
        for (name, value) in values {
            intent.slot_mut(name).value = Some(value.to_string());
        }
        intent
    }

    fn status(intent: &Intent, slot: RefineSlot) -> ConfirmationStatus {
        intent.slot(slot.name()).map(|s| s.confirmation_status).unwrap_or_default()
    }

    #[test]
    fn test_zero_out_region_skips_other_modes() {
        let mut intent = intent_with(&[("REGION", "Pacific Northwest")]);
        zero_out_location(&mut intent, Some(RefineSlot::Region));

        assert_eq!(intent.value("LOCATION"), Some("REGION"));
        assert_eq!(intent.value("REGION"), Some("Pacific Northwest"));
        for skipped in [RefineSlot::State, RefineSlot::Home, RefineSlot::Distance] {
            assert_eq!(intent.value(skipped.name()), Some(NO_PREFERENCE));
            assert_eq!(status(&intent, skipped), ConfirmationStatus::Confirmed);
        }
        assert_eq!(status(&intent, RefineSlot::Location), ConfirmationStatus::Confirmed);
        assert_eq!(status(&intent, RefineSlot::Region), ConfirmationStatus::None);
    }

    #[test]
    fn test_zero_out_home_keeps_distance_open() {
        let mut intent = intent_with(&[("HOME", "98101")]);
        zero_out_location(&mut intent, Some(RefineSlot::Home));

        assert_eq!(intent.value("LOCATION"), Some("HOME"));
        assert_eq!(intent.value("HOME"), Some("98101"));
        assert_eq!(status(&intent, RefineSlot::Distance), ConfirmationStatus::None);
    }

    #[test]
    fn test_zero_out_without_mode_skips_location() {
        let mut intent = intent_with(&[]);
        zero_out_location(&mut intent, None);

        for slot in [
            RefineSlot::Location,
            RefineSlot::State,
            RefineSlot::Region,
            RefineSlot::Home,
            RefineSlot::Distance,
        ] {
            assert_eq!(intent.value(slot.name()), Some(NO_PREFERENCE));
        }
    }

    #[test]
    fn test_prefill_from_profile() {
        let profile = Profile {
            sat: Some(Preference::Value(1200)),
            cost: Some(Preference::Value(30000)),
            degree: Some(Preference::Value(Degree::Bachelor)),
            home: Some(Preference::Value("98101".parse().unwrap())),
            ..Default::default()
        };
        let mut intent = intent_with(&[]);
        prefill_from_profile(&mut intent, &profile);

        assert_eq!(intent.value("COST"), Some("30000"));
        assert_eq!(status(&intent, RefineSlot::Cost), ConfirmationStatus::None);
        assert_eq!(intent.value("DEGREE"), Some("bachelor's"));
        assert_eq!(status(&intent, RefineSlot::Degree), ConfirmationStatus::Confirmed);
        assert_eq!(intent.value("HOME"), Some("98101"));
        assert_eq!(intent.value("SCORES"), Some("SAT"));
    }

    #[test]
    fn test_prefill_keeps_answered_slots() {
        let profile = Profile {
            cost: Some(Preference::Value(30000)),
            ..Default::default()
        };
        let mut intent = intent_with(&[("COST", NO_PREFERENCE)]);
        intent.slot_mut("COST").confirmation_status = ConfirmationStatus::Confirmed;
        prefill_from_profile(&mut intent, &profile);

        assert_eq!(intent.value("COST"), Some(NO_PREFERENCE));
        assert_eq!(intent.value("SCORES"), Some(NO_PREFERENCE));
        assert_eq!(intent.value("DEGREE"), Some(NO_PREFERENCE));
    }

    #[test]
    fn test_denied_slot_becomes_no_preference() {
        let mut intent = intent_with(&[("COST", "30000"), ("LOCATION", "HOME")]);
        intent.slot_mut("COST").confirmation_status = ConfirmationStatus::Denied;
        intent.slot_mut("LOCATION").confirmation_status = ConfirmationStatus::Denied;
        apply_denials(&mut intent);

        assert_eq!(intent.value("COST"), Some(NO_PREFERENCE));
        assert_eq!(status(&intent, RefineSlot::Cost), ConfirmationStatus::Confirmed);
        assert_eq!(intent.value("LOCATION"), Some(NO_PREFERENCE));
        assert_eq!(intent.value("HOME"), Some(NO_PREFERENCE));
    }

    #[test]
    fn test_accepts_raw_values() {
        assert!(accepts_raw(RefineSlot::Home, "02134"));
        assert!(!accepts_raw(RefineSlot::Home, "2134"));
        assert!(accepts_raw(RefineSlot::Cost, "$25,000"));
        assert!(!accepts_raw(RefineSlot::Distance, "far"));
        assert!(accepts_raw(RefineSlot::Scores, "act"));
        assert!(!accepts_raw(RefineSlot::Scores, "GRE"));
    }

    #[test]
    fn test_build_query_by_state_name() {
        let intent = intent_with(&[("LOCATION", "STATE"), ("STATE", "Washington")]);
        let query = build_query(&intent, &SessionAttributes::default());

        assert_eq!(query.location, Some(LocationFilter::State("WA".to_string())));
        assert!(query.require_tuition);
        assert_eq!(query.sort, SortOrder::Size);
    }

    #[test]
    fn test_build_query_by_region_falls_back_to_stored_id() {
        let intent = intent_with(&[("LOCATION", "REGION"), ("REGION", "Far West")]);
        let attrs = SessionAttributes {
            region_id: Some("8".to_string()),
            ..Default::default()
        };
        let query = build_query(&intent, &attrs);
        assert_eq!(query.location, Some(LocationFilter::Region("8".to_string())));
    }

    #[test]
    fn test_build_query_by_home_zip() {
        let intent = intent_with(&[("LOCATION", "HOME"), ("HOME", "98101"), ("DISTANCE", "50")]);
        let query = build_query(&intent, &SessionAttributes::default());

        assert_eq!(
            query.location,
            Some(LocationFilter::Zip {
                zip: "98101".parse().unwrap(),
                distance_miles: 50,
            })
        );
    }

    #[test]
    fn test_build_query_all_filters() {
        let intent = intent_with(&[
            ("LOCATION", NO_PREFERENCE),
            ("TYPE", "Private"),
            ("SIZE", "large"),
            ("COST", "25000"),
            ("DEGREE", "Bachelors"),
            ("SCORES", "SAT"),
            ("MAJOR", "Engineering"),
        ]);
        let mut attrs = SessionAttributes {
            school_major_id: Some("engineering".to_string()),
            ..Default::default()
        };
        attrs.persistent.profile.sat = Some(Preference::Value(1300));
        attrs.persistent.profile.major = Some(Preference::Value(Major {
            id: "engineering".to_string(),
            category: "Engineering".to_string(),
        }));

        let query = build_query(&intent, &attrs);
        assert_eq!(query.location, None);
        assert_eq!(query.ownership, Some(Ownership::Private));
        assert_eq!(query.size, Some(SchoolSize::Large));
        assert_eq!(query.max_cost, Some(25000));
        assert_eq!(query.degree, Some(Degree::Bachelor));
        assert_eq!(query.score, Some(ScoreFloor::Sat(1300)));
        assert_eq!(
            query.major,
            Some(MajorFilter {
                id: "engineering".to_string(),
                min_share: REFINE_MAJOR_SHARE,
            })
        );
    }

    #[test]
    fn test_build_query_ignores_no_preference() {
        let intent = intent_with(&[
            ("COST", NO_PREFERENCE),
            ("MAJOR", NO_PREFERENCE),
            ("SCORES", NO_PREFERENCE),
        ]);
        let attrs = SessionAttributes {
            school_major_id: Some("engineering".to_string()),
            ..Default::default()
        };
        let query = build_query(&intent, &attrs);

        assert_eq!(query.max_cost, None);
        assert_eq!(query.major, None);
        assert_eq!(query.score, None);
    }
}
