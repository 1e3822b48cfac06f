//! Typed view of what the user just did.

use crate::envelope::{DialogProgress, Request};

/// One inbound turn, reduced to what routing cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Launch,
    SessionEnded,
    /// A touch on a display list item.
    ElementSelected,
    /// Platform probe asking whether an intent could be served.
    CanFulfill,
    Yes,
    No,
    Next,
    More,
    Previous,
    StartOver,
    Help,
    Stop,
    Cancel,
    Number,
    TestScores,
    Degree,
    SearchByName,
    SearchByLocation,
    SearchByMajor,
    RegionList,
    ListSchools,
    ListFavorites,
    ListProfile,
    ChangeProfile,
    ResetProfile,
    AddFavorite,
    DeleteFavorite,
    MoreInformation,
    RefineSearch { completed: bool },
    Unknown(String),
}

impl Event {
    pub fn from_request(request: &Request) -> Self {
        match request {
            Request::LaunchRequest(_) => Event::Launch,
            Request::SessionEndedRequest(_) => Event::SessionEnded,
            Request::ElementSelected(_) => Event::ElementSelected,
            Request::CanFulfillIntentRequest(_) => Event::CanFulfill,
            Request::IntentRequest(r) => Self::from_intent(&r.intent.name, r.dialog_state),
        }
    }

    /// Map an intent name to its event. Built-in intents carry the
    /// `AMAZON.` prefix.
    pub fn from_intent(name: &str, progress: Option<DialogProgress>) -> Self {
        match name {
            "AMAZON.YesIntent" => Event::Yes,
            "AMAZON.NoIntent" => Event::No,
            "AMAZON.NextIntent" => Event::Next,
            "AMAZON.MoreIntent" => Event::More,
            "AMAZON.PreviousIntent" => Event::Previous,
            "AMAZON.StartOverIntent" => Event::StartOver,
            "AMAZON.HelpIntent" => Event::Help,
            "AMAZON.StopIntent" => Event::Stop,
            "AMAZON.CancelIntent" => Event::Cancel,
            "NumberIntent" => Event::Number,
            "TestScoresIntent" => Event::TestScores,
            "DegreeIntent" => Event::Degree,
            "SearchByNameIntent" => Event::SearchByName,
            "SearchByLocationIntent" => Event::SearchByLocation,
            "SearchByMajorIntent" => Event::SearchByMajor,
            "RegionListIntent" => Event::RegionList,
            "ListSchoolsIntent" => Event::ListSchools,
            "ListFavoritesIntent" => Event::ListFavorites,
            "ListProfileIntent" => Event::ListProfile,
            "ChangeProfileIntent" => Event::ChangeProfile,
            "ResetProfileIntent" => Event::ResetProfile,
            "AddToFavoritesIntent" => Event::AddFavorite,
            "DeleteFromFavoritesIntent" => Event::DeleteFavorite,
            "MoreInformationIntent" => Event::MoreInformation,
            "RefineSearchIntent" => Event::RefineSearch {
                completed: progress == Some(DialogProgress::Completed),
            },
            other => Event::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_intents() {
        assert_eq!(Event::from_intent("AMAZON.YesIntent", None), Event::Yes);
        assert_eq!(Event::from_intent("AMAZON.StopIntent", None), Event::Stop);
        assert_eq!(
            Event::from_intent("AMAZON.StartOverIntent", None),
            Event::StartOver
        );
    }

    #[test]
    fn test_refine_completion_follows_dialog_state() {
        assert_eq!(
            Event::from_intent("RefineSearchIntent", Some(DialogProgress::Completed)),
            Event::RefineSearch { completed: true }
        );
        assert_eq!(
            Event::from_intent("RefineSearchIntent", Some(DialogProgress::InProgress)),
            Event::RefineSearch { completed: false }
        );
        assert_eq!(
            Event::from_intent("RefineSearchIntent", None),
            Event::RefineSearch { completed: false }
        );
    }

    #[test]
    fn test_unknown_intent_keeps_name() {
        assert_eq!(
            Event::from_intent("OrderPizzaIntent", None),
            Event::Unknown("OrderPizzaIntent".to_string())
        );
    }
}
