//! Fluent construction of outbound [`SkillResponse`] envelopes.

use crate::display::Template;
use crate::envelope::{
    CanFulfillIntent, Directive, HintText, Intent, OutputSpeech, Reprompt, ResponseBody,
    SkillResponse,
};

const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    speech: Option<String>,
    reprompt: Option<String>,
    directives: Vec<Directive>,
    should_end: Option<bool>,
    can_fulfill: Option<CanFulfillIntent>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    /// Speak `text` and repeat it if the user stays silent.
    pub fn ask(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.speak(text.clone()).reprompt(text)
    }

    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn template(self, template: Template) -> Self {
        self.directive(Directive::RenderTemplate { template })
    }

    pub fn hint(self, text: impl Into<String>) -> Self {
        self.directive(Directive::Hint {
            hint: HintText {
                kind: "PlainText".to_string(),
                text: text.into(),
            },
        })
    }

    pub fn delegate(self, intent: Intent) -> Self {
        self.directive(Directive::Delegate {
            updated_intent: Some(intent),
        })
    }

    pub fn end_session(mut self) -> Self {
        self.should_end = Some(true);
        self
    }

    pub fn can_fulfill(mut self, can_fulfill: CanFulfillIntent) -> Self {
        self.can_fulfill = Some(can_fulfill);
        self
    }

    pub fn is_ending(&self) -> bool {
        self.should_end == Some(true)
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Finish the envelope. A reprompt keeps the session open unless the
    /// handler ended it explicitly.
    pub fn build(self, session_attributes: Option<serde_json::Value>) -> SkillResponse {
        let should_end_session = self
            .should_end
            .or_else(|| self.reprompt.as_ref().map(|_| false));
        SkillResponse {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response: ResponseBody {
                output_speech: self.speech.as_deref().map(OutputSpeech::ssml),
                reprompt: self.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                directives: self.directives,
                should_end_session,
                can_fulfill_intent: self.can_fulfill,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Fulfillment;
    use std::collections::BTreeMap;

    #[test]
    fn test_ask_keeps_session_open() {
        let response = ResponseBuilder::new().ask("Which would you like?").build(None);
        let body = response.response;
        assert_eq!(
            body.output_speech.unwrap().ssml,
            "<speak>Which would you like?</speak>"
        );
        assert!(body.reprompt.is_some());
        assert_eq!(body.should_end_session, Some(false));
    }

    #[test]
    fn test_end_session() {
        let response = ResponseBuilder::new()
            .speak("Thank you for using College Finder.")
            .end_session()
            .build(None);
        assert_eq!(response.response.should_end_session, Some(true));
        assert!(response.response.reprompt.is_none());
    }

    #[test]
    fn test_empty_response_serializes_minimal_body() {
        let response = ResponseBuilder::new().build(None);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["response"], serde_json::json!({}));
        assert!(json.get("sessionAttributes").is_none());
    }

    #[test]
    fn test_directives_keep_order() {
        let builder = ResponseBuilder::new()
            .hint("change profile")
            .delegate(Intent::new("RefineSearchIntent"));
        assert!(matches!(builder.directives()[0], Directive::Hint { .. }));
        assert!(matches!(builder.directives()[1], Directive::Delegate { .. }));
    }

    #[test]
    fn test_can_fulfill_attached() {
        let response = ResponseBuilder::new()
            .can_fulfill(CanFulfillIntent {
                can_fulfill: Fulfillment::No,
                slots: BTreeMap::new(),
            })
            .build(None);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["response"]["canFulfillIntent"]["canFulfill"], "NO");
    }
}
