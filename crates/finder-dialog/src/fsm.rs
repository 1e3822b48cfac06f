//! Turn routing.
//!
//! Every turn resolves to exactly one [`Route`] from the current dialog state
//! and the inbound [`Event`]. Arms are checked top to bottom, so a route only
//! fires when no earlier arm claimed the turn:
//!
//! 1. Stop/cancel, help, fulfillment probes
//! 2. Profile collection (`PROFILE`, `SCORES` .. `HOME`)
//! 3. One-shot searches by name, location or major
//! 4. Result and favorites lists, details, favorites edits
//! 5. The refine dialog
//! 6. Generic no/previous/launch fallbacks, then unhandled

use finder_core::types::DialogState;

use crate::event::Event;
use crate::session::SessionAttributes;

/// The handler that serves a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    // Session
    Launch,
    Help,
    Goodbye,
    SessionEnded,
    CanFulfill,
    MainMenu,
    Decline,
    RegionList,
    ResetProfile,
    Unhandled,
    // Profile
    ProfileStart,
    ProfileItemYes,
    ProfileReview,
    ProfileChange,
    ScoreType,
    DegreeAnswer,
    MajorAnswer,
    ProfileNumber,
    ProfileSkip,
    // One-shot search
    SearchStartOver,
    SearchByName,
    SearchByLocation,
    SearchByMajor,
    // Lists
    SelectNumber,
    SelectTouch,
    PageNext,
    PagePrevious,
    PageRestart,
    ListResults,
    ListFavorites,
    AddFavorite,
    DeleteFavorite,
    // Refine dialog
    RefineFill,
    RefineComplete,
}

/// Pick the handler for `event` in `state`.
pub fn route(state: Option<DialogState>, event: &Event, attrs: &SessionAttributes) -> Route {
    use DialogState as S;

    let in_list = state.is_some_and(DialogState::is_list);
    let in_profile_step = state.is_some_and(DialogState::is_profile_step);
    let in_search_by = state.is_some_and(DialogState::is_search_by);
    let refining = state == Some(S::RefineSearch);

    match event {
        Event::Stop | Event::Cancel => Route::Goodbye,
        Event::Help => Route::Help,
        Event::CanFulfill => Route::CanFulfill,

        Event::Yes if state == Some(S::Profile) => Route::ProfileStart,
        Event::TestScores if state == Some(S::Scores) => Route::ScoreType,
        Event::Degree => Route::DegreeAnswer,
        Event::SearchByMajor if state == Some(S::Major) => Route::MajorAnswer,
        Event::Yes if matches!(state, Some(S::Major | S::Home)) => Route::ProfileItemYes,
        Event::ListProfile => Route::ProfileReview,
        Event::ChangeProfile => Route::ProfileChange,
        Event::Number
            if matches!(state, Some(S::Cost | S::Home))
                || (state == Some(S::Scores) && attrs.pending_score.is_some()) =>
        {
            Route::ProfileNumber
        }
        Event::No | Event::Next if in_profile_step => Route::ProfileSkip,

        Event::Yes | Event::StartOver if in_search_by => Route::SearchStartOver,
        Event::SearchByMajor if !refining => Route::SearchByMajor,
        Event::SearchByLocation if !refining => Route::SearchByLocation,
        Event::SearchByName if !refining => Route::SearchByName,
        Event::RegionList => Route::RegionList,

        Event::Number if in_list || state == Some(S::MoreInformation) => Route::SelectNumber,
        Event::ElementSelected if in_list => Route::SelectTouch,
        Event::Next | Event::More | Event::MoreInformation if in_list => Route::PageNext,
        Event::Previous if in_list || state == Some(S::MoreInformation) => Route::PagePrevious,
        Event::Yes if in_list => Route::PageRestart,
        Event::ListSchools => Route::ListResults,
        Event::ListFavorites => Route::ListFavorites,
        Event::AddFavorite => Route::AddFavorite,
        Event::DeleteFavorite => Route::DeleteFavorite,

        Event::RefineSearch { completed: false } => Route::RefineFill,
        Event::RefineSearch { completed: true } => Route::RefineComplete,

        Event::No => Route::Decline,
        Event::Launch | Event::StartOver => Route::Launch,
        Event::Previous => Route::MainMenu,
        Event::SessionEnded => Route::SessionEnded,
        Event::ResetProfile => Route::ResetProfile,

        Event::Yes
        | Event::Next
        | Event::More
        | Event::Number
        | Event::TestScores
        | Event::SearchByName
        | Event::SearchByLocation
        | Event::SearchByMajor
        | Event::ElementSelected
        | Event::MoreInformation
        | Event::Unknown(_) => Route::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::types::ScoreType;
    use DialogState as S;

    fn at(state: Option<DialogState>, event: Event) -> Route {
        route(state, &event, &SessionAttributes::default())
    }

    // =====================================================================
    // Global intents
    // =====================================================================

    #[test]
    fn test_stop_and_cancel_win_everywhere() {
        for state in DialogState::ALL.into_iter().map(Some).chain([None]) {
            assert_eq!(at(state, Event::Stop), Route::Goodbye);
            assert_eq!(at(state, Event::Cancel), Route::Goodbye);
            assert_eq!(at(state, Event::Help), Route::Help);
        }
    }

    #[test]
    fn test_launch_and_start_over() {
        assert_eq!(at(None, Event::Launch), Route::Launch);
        assert_eq!(at(Some(S::ListSchools), Event::Launch), Route::Launch);
        assert_eq!(at(Some(S::Start), Event::StartOver), Route::Launch);
    }

    #[test]
    fn test_start_over_in_search_by_restarts_search() {
        assert_eq!(at(Some(S::SearchByName), Event::StartOver), Route::SearchStartOver);
        assert_eq!(at(Some(S::SearchByLocation), Event::Yes), Route::SearchStartOver);
    }

    // =====================================================================
    // Profile
    // =====================================================================

    #[test]
    fn test_profile_yes_starts_collection() {
        assert_eq!(at(Some(S::Profile), Event::Yes), Route::ProfileStart);
        assert_eq!(at(Some(S::Major), Event::Yes), Route::ProfileItemYes);
        assert_eq!(at(Some(S::Home), Event::Yes), Route::ProfileItemYes);
    }

    #[test]
    fn test_score_number_requires_pending_type() {
        assert_eq!(at(Some(S::Scores), Event::Number), Route::Unhandled);

        let attrs = SessionAttributes {
            pending_score: Some(ScoreType::Act),
            ..Default::default()
        };
        assert_eq!(
            route(Some(S::Scores), &Event::Number, &attrs),
            Route::ProfileNumber
        );
        assert_eq!(at(Some(S::Cost), Event::Number), Route::ProfileNumber);
        assert_eq!(at(Some(S::Home), Event::Number), Route::ProfileNumber);
    }

    #[test]
    fn test_no_in_profile_step_skips_field() {
        for state in [S::Scores, S::Cost, S::Degree, S::Major, S::Home] {
            assert_eq!(at(Some(state), Event::No), Route::ProfileSkip);
            assert_eq!(at(Some(state), Event::Next), Route::ProfileSkip);
        }
    }

    #[test]
    fn test_major_answer_only_in_major_state() {
        assert_eq!(at(Some(S::Major), Event::SearchByMajor), Route::MajorAnswer);
        assert_eq!(at(Some(S::Start), Event::SearchByMajor), Route::SearchByMajor);
    }

    #[test]
    fn test_degree_answer_anywhere() {
        assert_eq!(at(Some(S::Degree), Event::Degree), Route::DegreeAnswer);
        assert_eq!(at(None, Event::Degree), Route::DegreeAnswer);
    }

    // =====================================================================
    // Searches
    // =====================================================================

    #[test]
    fn test_one_shot_searches_blocked_while_refining() {
        assert_eq!(at(Some(S::Start), Event::SearchByLocation), Route::SearchByLocation);
        assert_eq!(at(Some(S::RefineSearch), Event::SearchByLocation), Route::Unhandled);
        assert_eq!(at(Some(S::RefineSearch), Event::SearchByName), Route::Unhandled);
    }

    #[test]
    fn test_refine_fill_and_complete() {
        assert_eq!(
            at(Some(S::ListSchools), Event::RefineSearch { completed: false }),
            Route::RefineFill
        );
        assert_eq!(
            at(Some(S::RefineSearch), Event::RefineSearch { completed: true }),
            Route::RefineComplete
        );
    }

    #[test]
    fn test_no_while_refining_declines() {
        assert_eq!(at(Some(S::RefineSearch), Event::No), Route::Decline);
        assert_eq!(at(Some(S::Profile), Event::No), Route::Decline);
    }

    // =====================================================================
    // Lists
    // =====================================================================

    #[test]
    fn test_list_navigation() {
        for state in [S::ListSchools, S::Favorites] {
            assert_eq!(at(Some(state), Event::Number), Route::SelectNumber);
            assert_eq!(at(Some(state), Event::ElementSelected), Route::SelectTouch);
            assert_eq!(at(Some(state), Event::Next), Route::PageNext);
            assert_eq!(at(Some(state), Event::More), Route::PageNext);
            assert_eq!(at(Some(state), Event::MoreInformation), Route::PageNext);
            assert_eq!(at(Some(state), Event::Previous), Route::PagePrevious);
            assert_eq!(at(Some(state), Event::Yes), Route::PageRestart);
        }
    }

    #[test]
    fn test_more_information_navigation() {
        assert_eq!(at(Some(S::MoreInformation), Event::Number), Route::SelectNumber);
        assert_eq!(at(Some(S::MoreInformation), Event::Previous), Route::PagePrevious);
        assert_eq!(at(Some(S::MoreInformation), Event::Next), Route::Unhandled);
    }

    #[test]
    fn test_previous_outside_lists_goes_to_menu() {
        assert_eq!(at(Some(S::Start), Event::Previous), Route::MainMenu);
        assert_eq!(at(None, Event::Previous), Route::MainMenu);
    }

    #[test]
    fn test_list_and_favorite_intents_anywhere() {
        assert_eq!(at(None, Event::ListSchools), Route::ListResults);
        assert_eq!(at(Some(S::MoreInformation), Event::ListFavorites), Route::ListFavorites);
        assert_eq!(at(Some(S::MoreInformation), Event::AddFavorite), Route::AddFavorite);
        assert_eq!(at(Some(S::Favorites), Event::DeleteFavorite), Route::DeleteFavorite);
    }

    // =====================================================================
    // Fallbacks
    // =====================================================================

    #[test]
    fn test_touch_outside_list_is_unhandled() {
        assert_eq!(at(Some(S::Start), Event::ElementSelected), Route::Unhandled);
    }

    #[test]
    fn test_unknown_intent_is_unhandled() {
        assert_eq!(at(Some(S::Start), Event::Unknown("Foo".into())), Route::Unhandled);
        assert_eq!(at(Some(S::Start), Event::Yes), Route::Unhandled);
    }

    #[test]
    fn test_session_lifecycle() {
        assert_eq!(at(Some(S::Favorites), Event::SessionEnded), Route::SessionEnded);
        assert_eq!(at(None, Event::CanFulfill), Route::CanFulfill);
        assert_eq!(at(Some(S::Start), Event::ResetProfile), Route::ResetProfile);
    }
}
