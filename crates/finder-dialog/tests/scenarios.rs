//! Multi-turn conversations driven through [`Skill::handle`].
//!
//! Each test runs against an in-memory attribute store and a scripted search
//! backend, carrying session attributes from one reply into the next request
//! the way the voice platform does.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use finder_core::config::FinderConfig;
use finder_core::types::{
    BoundedList, DialogState, PersistentAttributes, Preference, SchoolRecord, ScoreType, SearchOrigin,
    ZipCode,
};
use finder_dialog::envelope::{Directive, Fulfillment};
use finder_dialog::{SessionAttributes, Skill, SkillRequest, SkillResponse};
use finder_search::{LocationFilter, Ownership, SchoolSearch, SearchError, SearchOutcome, SearchQuery};
use finder_storage::{AttributeRepository, Database, UserRepository};

// =============================================================================
// Helpers
// =============================================================================

const USER: &str = "amzn1.ask.account.test-user";
const LOCALE: &str = "en-US";

/// Search backend that replays one outcome and records every query.
struct ScriptedSearch {
    outcome: Option<SearchOutcome>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl ScriptedSearch {
    fn returning(outcome: SearchOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            outcome: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    fn last_query(&self) -> SearchQuery {
        self.queries.lock().unwrap().last().cloned().expect("no search was run")
    }
}

#[async_trait]
impl SchoolSearch for ScriptedSearch {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        self.queries.lock().unwrap().push(query.clone());
        self.outcome
            .clone()
            .ok_or_else(|| SearchError::Network("connection refused".to_string()))
    }
}

fn school(id: u64) -> SchoolRecord {
    SchoolRecord {
        id,
        name: format!("School {id}"),
        city: Some("Seattle".to_string()),
        state: Some("WA".to_string()),
        tuition_in_state: Some(11745.0),
        tuition_out_of_state: Some(39114.0),
        admission_rate: Some(0.52),
        size: Some(30000),
        completion_rate: Some(0.8399),
        median_earnings: Some(66100.0),
    }
}

fn outcome(count: u64, total: u64) -> SearchOutcome {
    SearchOutcome {
        results: (1..=count).map(school).collect(),
        total,
    }
}

fn slot(name: &str, value: &str) -> Value {
    json!({ "name": name, "value": value, "confirmationStatus": "NONE" })
}

fn resolved_slot(name: &str, value: &str, resolved: &str, id: &str) -> Value {
    json!({
        "name": name,
        "value": value,
        "confirmationStatus": "NONE",
        "resolutions": {
            "resolutionsPerAuthority": [{
                "authority": "amzn1.er-authority.echo-sdk.test",
                "status": { "code": "ER_SUCCESS_MATCH" },
                "values": [{ "value": { "name": resolved, "id": id } }]
            }]
        }
    })
}

fn empty_refine_slots() -> serde_json::Map<String, Value> {
    [
        "LOCATION", "STATE", "REGION", "HOME", "DISTANCE", "TYPE", "SIZE", "MAJOR", "COST",
        "SCORES", "DEGREE",
    ]
    .into_iter()
    .map(|name| (name.to_string(), json!({ "name": name, "confirmationStatus": "NONE" })))
    .collect()
}

/// One user talking to one skill instance.
struct Conversation {
    skill: Skill,
    search: Arc<ScriptedSearch>,
    repository: Arc<UserRepository>,
    attributes: Option<Value>,
}

impl Conversation {
    fn new(search: ScriptedSearch) -> Self {
        let repository = Arc::new(UserRepository::new(Arc::new(Database::in_memory().unwrap())));
        Self::with_repository(search, repository)
    }

    fn with_repository(search: ScriptedSearch, repository: Arc<UserRepository>) -> Self {
        let search = Arc::new(search);
        let skill = Skill::new(
            &FinderConfig::default(),
            Arc::clone(&search) as Arc<dyn SchoolSearch>,
            Arc::clone(&repository) as Arc<dyn AttributeRepository>,
        );
        Self {
            skill,
            search,
            repository,
            attributes: None,
        }
    }

    async fn send(&mut self, request: Value) -> SkillResponse {
        let envelope = json!({
            "version": "1.0",
            "session": {
                "new": self.attributes.is_none(),
                "sessionId": "amzn1.echo-api.session.test",
                "application": { "applicationId": "amzn1.ask.skill.test" },
                "user": { "userId": USER },
                "attributes": self.attributes.clone().unwrap_or(Value::Null)
            },
            "context": { "System": { "device": { "supportedInterfaces": {} } } },
            "request": request
        });
        let request: SkillRequest = serde_json::from_value(envelope).unwrap();
        let response = self.skill.handle(request).await;
        self.attributes = response.session_attributes.clone();
        response
    }

    async fn launch(&mut self) -> SkillResponse {
        self.send(json!({ "type": "LaunchRequest", "requestId": "req-launch", "locale": LOCALE }))
            .await
    }

    async fn intent(&mut self, name: &str, slots: Vec<Value>) -> SkillResponse {
        let slots: serde_json::Map<String, Value> = slots
            .into_iter()
            .map(|slot| (slot["name"].as_str().unwrap().to_string(), slot))
            .collect();
        self.send(json!({
            "type": "IntentRequest",
            "requestId": "req-intent",
            "locale": LOCALE,
            "intent": { "name": name, "confirmationStatus": "NONE", "slots": slots }
        }))
        .await
    }

    async fn refine(&mut self, progress: &str, slots: serde_json::Map<String, Value>) -> SkillResponse {
        self.send(json!({
            "type": "IntentRequest",
            "requestId": "req-refine",
            "locale": LOCALE,
            "dialogState": progress,
            "intent": { "name": "RefineSearchIntent", "confirmationStatus": "NONE", "slots": slots }
        }))
        .await
    }

    async fn touch(&mut self, token: &str) -> SkillResponse {
        self.send(json!({
            "type": "Display.ElementSelected",
            "requestId": "req-touch",
            "locale": LOCALE,
            "token": token
        }))
        .await
    }

    fn attrs(&self) -> SessionAttributes {
        SessionAttributes::from_session(self.attributes.as_ref())
    }

    fn text(&self, key: &str) -> String {
        self.skill.catalog().text(LOCALE, key).unwrap().trim().to_string()
    }

    fn stored(&self) -> PersistentAttributes {
        self.repository.load(USER).unwrap().expect("attributes were never persisted")
    }
}

fn speech(response: &SkillResponse) -> &str {
    response
        .response
        .output_speech
        .as_ref()
        .map(|speech| speech.ssml.as_str())
        .unwrap_or_default()
}

fn delegated_intent(response: &SkillResponse) -> &finder_dialog::envelope::Intent {
    response
        .response
        .directives
        .iter()
        .find_map(|directive| match directive {
            Directive::Delegate { updated_intent } => updated_intent.as_ref(),
            _ => None,
        })
        .expect("response has no delegate directive")
}

// =============================================================================
// Launch and profile
// =============================================================================

#[tokio::test]
async fn test_first_launch_offers_profile() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    let response = chat.launch().await;

    assert!(speech(&response).contains(&chat.text("WELCOME_LONG")));
    assert_eq!(response.response.should_end_session, Some(false));
    assert_eq!(chat.attrs().state, Some(DialogState::Profile));
    assert!(chat.attrs().initialized);
}

#[tokio::test]
async fn test_profile_collection_validates_scores() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    chat.launch().await;

    chat.intent("AMAZON.YesIntent", vec![]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Scores));

    chat.intent("TestScoresIntent", vec![resolved_slot("SCORES", "sat", "SAT", "SAT")])
        .await;
    let response = chat.intent("NumberIntent", vec![slot("NUMBER", "1700")]).await;
    assert!(speech(&response).contains("1600"));
    assert_eq!(chat.attrs().state, Some(DialogState::Scores));
    assert_eq!(chat.attrs().persistent.profile.sat, None);

    chat.intent("NumberIntent", vec![slot("NUMBER", "1300")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Cost));
    assert_eq!(chat.attrs().persistent.profile.sat, Some(Preference::Value(1300)));

    chat.intent("NumberIntent", vec![slot("NUMBER", "30000")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Degree));

    chat.intent("DegreeIntent", vec![slot("DEGREE", "bachelors")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Major));

    chat.intent("AMAZON.NoIntent", vec![]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Home));

    let response = chat.intent("NumberIntent", vec![slot("NUMBER", "98101")]).await;
    assert!(speech(&response).contains(&chat.text("PROFILE_COMPLETE")));
    assert_eq!(chat.attrs().state, Some(DialogState::Start));

    let stored = chat.stored();
    assert!(stored.profile.complete);
    assert!(!stored.first_run);
    assert_eq!(stored.profile.cost, Some(Preference::Value(30000)));
    assert_eq!(stored.profile.major, Some(Preference::NoPreference));
    assert_eq!(chat.search.calls(), 0);
}

#[tokio::test]
async fn test_act_score_outside_range_is_reasked() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    chat.launch().await;
    chat.intent("AMAZON.YesIntent", vec![]).await;
    chat.intent("TestScoresIntent", vec![resolved_slot("SCORES", "act", "ACT", "ACT")])
        .await;

    for invalid in ["37", "0"] {
        let response = chat.intent("NumberIntent", vec![slot("NUMBER", invalid)]).await;
        assert!(speech(&response).contains("between 1 and 36"));
        let attrs = chat.attrs();
        assert_eq!(attrs.state, Some(DialogState::Scores));
        assert_eq!(attrs.pending_score, Some(ScoreType::Act));
        assert_eq!(attrs.persistent.profile.act, None);
    }

    chat.intent("NumberIntent", vec![slot("NUMBER", "36")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Cost));
    assert_eq!(chat.attrs().persistent.profile.act, Some(Preference::Value(36)));
}

#[tokio::test]
async fn test_invalid_cost_is_reasked() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    chat.launch().await;
    chat.intent("AMAZON.YesIntent", vec![]).await;
    chat.intent("TestScoresIntent", vec![resolved_slot("SCORES", "sat", "SAT", "SAT")])
        .await;
    chat.intent("NumberIntent", vec![slot("NUMBER", "1300")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Cost));

    let response = chat.intent("NumberIntent", vec![slot("NUMBER", "-500")]).await;
    assert!(speech(&response).contains("-500 is not a valid amount"));
    assert_eq!(chat.attrs().state, Some(DialogState::Cost));
    assert_eq!(chat.attrs().persistent.profile.cost, None);

    chat.intent("NumberIntent", vec![slot("NUMBER", "25000")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Degree));
    assert_eq!(chat.attrs().persistent.profile.cost, Some(Preference::Value(25000)));
}

#[tokio::test]
async fn test_invalid_zip_code_is_reasked() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    chat.launch().await;
    chat.intent("AMAZON.YesIntent", vec![]).await;
    chat.intent("TestScoresIntent", vec![resolved_slot("SCORES", "sat", "SAT", "SAT")])
        .await;
    chat.intent("NumberIntent", vec![slot("NUMBER", "1300")]).await;
    chat.intent("NumberIntent", vec![slot("NUMBER", "30000")]).await;
    chat.intent("DegreeIntent", vec![slot("DEGREE", "bachelors")]).await;
    chat.intent("AMAZON.NoIntent", vec![]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Home));

    for invalid in ["9810", "981012"] {
        let response = chat.intent("NumberIntent", vec![slot("NUMBER", invalid)]).await;
        assert!(speech(&response).contains(&chat.text("HOME_ZIP_CODE_ERROR")));
        assert_eq!(chat.attrs().state, Some(DialogState::Home));
        assert_eq!(chat.attrs().persistent.profile.home, None);
    }

    let response = chat.intent("NumberIntent", vec![slot("NUMBER", "02134")]).await;
    assert!(speech(&response).contains(r#"<say-as interpret-as="digits">02134</say-as>"#));
    assert_eq!(chat.attrs().state, Some(DialogState::Start));
    let zip: ZipCode = "02134".parse().unwrap();
    assert_eq!(chat.stored().profile.home, Some(Preference::Value(zip)));
}

#[tokio::test]
async fn test_stop_ends_session_and_persists() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    chat.launch().await;
    let response = chat.intent("AMAZON.StopIntent", vec![]).await;

    assert!(speech(&response).contains(&chat.text("GOODBYE")));
    assert_eq!(response.response.should_end_session, Some(true));
    assert!(!chat.stored().first_run);
    assert_eq!(chat.attrs().state, None);
}

#[tokio::test]
async fn test_unknown_intent_is_unhandled() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    chat.launch().await;
    let response = chat.intent("PizzaIntent", vec![]).await;

    assert!(speech(&response).contains(&chat.text("ERROR_CANT")));
    assert_eq!(response.response.should_end_session, Some(false));
}

// =============================================================================
// One-shot search and paging
// =============================================================================

#[tokio::test]
async fn test_location_search_keeps_first_twelve() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(20, 150)));
    chat.launch().await;
    let response = chat
        .intent(
            "SearchByLocationIntent",
            vec![resolved_slot("STATE", "washington", "Washington", "WA")],
        )
        .await;

    assert_eq!(
        chat.search.last_query().location,
        Some(LocationFilter::State("WA".to_string()))
    );
    assert!(speech(&response).contains("150"));
    let attrs = chat.attrs();
    assert_eq!(attrs.state, Some(DialogState::ListSchools));
    assert_eq!(attrs.search_origin, Some(SearchOrigin::Location));
    assert_eq!(attrs.persistent.search_results.len(), 12);
    assert_eq!(attrs.persistent.search_total, 150);
    assert_eq!(attrs.location_state.as_deref(), Some("Washington"));
}

#[tokio::test]
async fn test_paging_through_results() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(20, 150)));
    chat.launch().await;
    chat.intent(
        "SearchByLocationIntent",
        vec![resolved_slot("STATE", "washington", "Washington", "WA")],
    )
    .await;

    let response = chat.intent("ListSchoolsIntent", vec![]).await;
    let spoken = speech(&response);
    assert!(spoken.contains("1. School 1."));
    assert!(spoken.contains("3. School 3."));
    assert!(!spoken.contains("4. School 4."));
    assert!(spoken.contains(&chat.text("LIST_SCHOOLS_PROMPT")));

    let response = chat.intent("AMAZON.NextIntent", vec![]).await;
    assert!(speech(&response).contains("4. School 4."));
    assert_eq!(chat.attrs().persistent.search_page, 1);

    let response = chat.intent("AMAZON.PreviousIntent", vec![]).await;
    assert!(speech(&response).contains("1. School 1."));
    assert_eq!(chat.attrs().persistent.search_page, 0);

    for _ in 0..3 {
        chat.intent("AMAZON.NextIntent", vec![]).await;
    }
    let response = chat.intent("AMAZON.NextIntent", vec![]).await;
    assert!(speech(&response).contains(&chat.text("LIST_SCHOOLS_END_OF_LIST")));
    assert_eq!(chat.attrs().persistent.search_page, 4);

    for _ in 0..3 {
        let response = chat.intent("AMAZON.NextIntent", vec![]).await;
        assert!(speech(&response).contains(&chat.text("LIST_SCHOOLS_END_OF_LIST")));
    }
    assert_eq!(chat.attrs().persistent.search_page, 4);

    let response = chat.intent("AMAZON.PreviousIntent", vec![]).await;
    assert!(speech(&response).contains("10. School 10."));
    assert_eq!(chat.attrs().persistent.search_page, 3);
}

#[tokio::test]
async fn test_invalid_list_number_reasks() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(5, 5)));
    chat.launch().await;
    chat.intent(
        "SearchByLocationIntent",
        vec![resolved_slot("STATE", "washington", "Washington", "WA")],
    )
    .await;
    chat.intent("ListSchoolsIntent", vec![]).await;

    let response = chat.intent("NumberIntent", vec![slot("NUMBER", "9")]).await;
    assert!(speech(&response).contains(&chat.text("ERROR_INVALID_VALUE")));
    assert_eq!(chat.attrs().state, Some(DialogState::ListSchools));
}

#[tokio::test]
async fn test_failed_turn_speaks_state_error() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(5, 5)));
    chat.launch().await;
    chat.intent(
        "SearchByLocationIntent",
        vec![resolved_slot("STATE", "washington", "Washington", "WA")],
    )
    .await;
    chat.intent("ListSchoolsIntent", vec![]).await;

    let response = chat.touch("not-a-number").await;
    assert!(speech(&response).contains(&chat.text("LIST_SCHOOLS_HELP")));
    assert_eq!(chat.attrs().state, Some(DialogState::ListSchools));
    assert_eq!(response.response.should_end_session, Some(false));

    chat.intent("ListFavoritesIntent", vec![]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::Favorites));
    let response = chat.touch("not-a-number").await;
    assert!(speech(&response).contains(&chat.text("FAVORITES_ERROR")));
    assert_eq!(chat.attrs().state, Some(DialogState::Favorites));
}

#[tokio::test]
async fn test_failed_search_is_spoken() {
    let mut chat = Conversation::new(ScriptedSearch::failing());
    chat.launch().await;
    let response = chat
        .intent("SearchByNameIntent", vec![slot("SCHOOL_NAME", "Gonzaga")])
        .await;

    assert!(speech(&response).contains("The search for Gonzaga failed"));
    assert_eq!(chat.attrs().state, Some(DialogState::Start));
    assert_eq!(chat.search.calls(), 1);
}

#[tokio::test]
async fn test_name_search_shows_details() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(1, 1)));
    chat.launch().await;
    let response = chat
        .intent("SearchByNameIntent", vec![slot("SCHOOL_NAME", "School 1")])
        .await;

    assert!(speech(&response).contains("School 1"));
    let attrs = chat.attrs();
    assert_eq!(attrs.state, Some(DialogState::MoreInformation));
    assert_eq!(attrs.search_origin, Some(SearchOrigin::Name));
    assert_eq!(attrs.persistent.current_school_id, Some(1));
    assert_eq!(chat.search.last_query().name.as_deref(), Some("School 1"));
}

// =============================================================================
// Favorites
// =============================================================================

#[tokio::test]
async fn test_delete_from_empty_favorites_does_not_search() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(3, 3)));
    chat.launch().await;
    let response = chat
        .intent("DeleteFromFavoritesIntent", vec![slot("SCHOOL", "Gonzaga")])
        .await;

    assert!(speech(&response).contains(&chat.text("FAVORITES_EMPTY")));
    assert_eq!(chat.search.calls(), 0);
}

#[tokio::test]
async fn test_add_list_and_delete_favorite() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(5, 5)));
    chat.launch().await;
    chat.intent(
        "SearchByLocationIntent",
        vec![resolved_slot("STATE", "washington", "Washington", "WA")],
    )
    .await;
    chat.intent("ListSchoolsIntent", vec![]).await;
    chat.intent("NumberIntent", vec![slot("NUMBER", "2")]).await;
    assert_eq!(chat.attrs().state, Some(DialogState::MoreInformation));

    let response = chat.intent("AddToFavoritesIntent", vec![]).await;
    assert!(speech(&response).contains("Added School 2 to your list"));
    assert_eq!(chat.stored().favorites.len(), 1);

    let response = chat.intent("AddToFavoritesIntent", vec![]).await;
    assert!(speech(&response).contains("School 2 is already in your list"));
    assert_eq!(chat.attrs().persistent.favorites.len(), 1);

    let response = chat.intent("ListFavoritesIntent", vec![]).await;
    assert!(speech(&response).contains("1. School 2."));
    assert_eq!(chat.attrs().state, Some(DialogState::Favorites));

    let response = chat
        .intent("DeleteFromFavoritesIntent", vec![slot("NUMBER", "1")])
        .await;
    assert!(speech(&response).contains(&chat.text("FAVORITES_EMPTY")));
    assert!(chat.attrs().persistent.favorites.is_empty());
    assert!(chat.stored().favorites.is_empty());
}

#[tokio::test]
async fn test_full_favorites_evict_oldest() {
    let repository = Arc::new(UserRepository::new(Arc::new(Database::in_memory().unwrap())));
    let seeded = PersistentAttributes {
        first_run: false,
        favorites: BoundedList::truncated_from((101..=112).map(school)),
        ..Default::default()
    };
    repository.save(USER, &seeded).unwrap();

    let mut chat = Conversation::with_repository(
        ScriptedSearch::returning(outcome(3, 3)),
        Arc::clone(&repository),
    );
    chat.launch().await;
    chat.intent(
        "SearchByLocationIntent",
        vec![resolved_slot("STATE", "washington", "Washington", "WA")],
    )
    .await;
    chat.intent("ListSchoolsIntent", vec![]).await;
    chat.intent("NumberIntent", vec![slot("NUMBER", "1")]).await;
    chat.intent("AddToFavoritesIntent", vec![]).await;

    let favorites = chat.stored().favorites;
    assert_eq!(favorites.len(), 12);
    assert_eq!(favorites.first().map(|s| s.id), Some(1));
    assert!(favorites.contains_id(111));
    assert!(!favorites.contains_id(112));
}

// =============================================================================
// Refine dialog
// =============================================================================

#[tokio::test]
async fn test_refine_dialog_runs_combined_search() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(5, 5)));
    chat.launch().await;

    let response = chat.refine("STARTED", empty_refine_slots()).await;
    let intent = delegated_intent(&response);
    assert_eq!(intent.value("COST"), Some("0"));
    assert_eq!(intent.value("SCORES"), Some("0"));
    assert_eq!(chat.attrs().state, Some(DialogState::RefineSearch));

    let mut slots = empty_refine_slots();
    slots.insert(
        "LOCATION".to_string(),
        resolved_slot("LOCATION", "state", "State", "STATE"),
    );
    let response = chat.refine("IN_PROGRESS", slots).await;
    let intent = delegated_intent(&response);
    assert_eq!(intent.value("LOCATION"), Some("STATE"));
    assert_eq!(intent.value("REGION"), Some("0"));
    assert_eq!(intent.value("HOME"), Some("0"));

    let mut slots = empty_refine_slots();
    slots.insert("LOCATION".to_string(), slot("LOCATION", "STATE"));
    slots.insert(
        "STATE".to_string(),
        resolved_slot("STATE", "washington", "Washington", "WA"),
    );
    slots.insert("TYPE".to_string(), resolved_slot("TYPE", "public", "Public", "PUBLIC"));
    let response = chat.refine("COMPLETED", slots).await;

    let query = chat.search.last_query();
    assert_eq!(query.location, Some(LocationFilter::State("WA".to_string())));
    assert_eq!(query.ownership, Some(Ownership::Public));
    assert!(speech(&response).contains("You can hear the first 5 schools"));

    let attrs = chat.attrs();
    assert_eq!(attrs.state, Some(DialogState::Start));
    assert_eq!(attrs.search_origin, Some(SearchOrigin::Refine));
    assert_eq!(attrs.refine_intent, None);
    assert_eq!(attrs.persistent.search_results.len(), 5);
}

#[tokio::test]
async fn test_refine_no_skips_open_slot() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(5, 5)));
    chat.launch().await;
    chat.refine("STARTED", empty_refine_slots()).await;

    let response = chat.intent("AMAZON.NoIntent", vec![]).await;
    assert!(speech(&response).contains(&chat.text("REFINE_SEARCH_UNACCEPTED")));
    assert_eq!(chat.attrs().state, Some(DialogState::RefineNo));

    let response = chat.refine("IN_PROGRESS", empty_refine_slots()).await;
    let intent = delegated_intent(&response);
    assert_eq!(intent.value("LOCATION"), Some("0"));
    assert_eq!(intent.value("STATE"), Some("0"));
    assert_eq!(chat.attrs().state, Some(DialogState::RefineSearch));
    assert_eq!(chat.search.calls(), 0);
}

#[tokio::test]
async fn test_refine_after_location_search_prefills_location() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(5, 5)));
    chat.launch().await;
    chat.intent(
        "SearchByLocationIntent",
        vec![resolved_slot("STATE", "washington", "Washington", "WA")],
    )
    .await;

    let response = chat.refine("STARTED", empty_refine_slots()).await;
    let intent = delegated_intent(&response);
    assert_eq!(intent.value("LOCATION"), Some("STATE"));
    assert_eq!(intent.value("STATE"), Some("Washington"));
    assert_eq!(chat.attrs().search_origin, None);
}

// =============================================================================
// Capability probe
// =============================================================================

#[tokio::test]
async fn test_can_fulfill_recognized_school() {
    let mut chat = Conversation::new(ScriptedSearch::returning(outcome(0, 0)));
    let response = chat
        .send(json!({
            "type": "CanFulfillIntentRequest",
            "requestId": "req-probe",
            "locale": LOCALE,
            "intent": {
                "name": "SearchByNameIntent",
                "slots": {
                    "SCHOOL_NAME": resolved_slot("SCHOOL_NAME", "gonzaga", "Gonzaga University", "235316")
                }
            }
        }))
        .await;

    let answer = response.response.can_fulfill_intent.expect("no fulfillment answer");
    assert_eq!(answer.can_fulfill, Fulfillment::Yes);
    assert_eq!(answer.slots["SCHOOL_NAME"].can_understand, Fulfillment::Yes);
    assert_eq!(chat.search.calls(), 0);
}
