//! Profile collection: scores, cost, degree, major and home zip code, asked
//! in a fixed order and saved after every answer.

use tracing::debug;

use finder_core::types::{
    Degree, DialogState, Major, Preference, ProfileField, ScoreType, ZipCode, NO_PREFERENCE,
};

use super::Turn;
use crate::display;
use crate::error::DialogError;
use crate::response::ResponseBuilder;

type Reply = Result<ResponseBuilder, DialogError>;

fn prompt_key(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Scores => "INTRODUCTION_SCORES",
        ProfileField::Cost => "INTRODUCTION_COST",
        ProfileField::Degree => "INTRODUCTION_DEGREE",
        ProfileField::Major => "PROFILE_MAJOR",
        ProfileField::Home => "INTRODUCTION_HOME",
    }
}

/// Ask for the next unanswered field, or close out the profile.
pub(crate) fn move_on(turn: &mut Turn<'_>) -> Reply {
    let attrs = turn.attrs_mut();
    attrs.previous_state = attrs.state;
    let next = attrs.persistent.profile.next_missing();

    let prompt = match next {
        Some(field) => {
            turn.attrs_mut().state = Some(field.state());
            turn.text(prompt_key(field))?
        }
        None => {
            let attrs = turn.attrs_mut();
            attrs.state = Some(DialogState::Start);
            attrs.persistent.profile.complete = true;
            format!(
                "{} {}",
                turn.text("PROFILE_COMPLETE")?,
                turn.text("WELCOME_MENU")?
            )
        }
    };
    debug!(next = ?next, "Profile step");

    let message = turn.compose(&prompt);
    turn.save();
    Ok(ResponseBuilder::new().ask(message))
}

pub(crate) fn start(turn: &mut Turn<'_>) -> Reply {
    turn.attrs_mut().intro_message.clear();
    move_on(turn)
}

/// "Yes" to "do you know your major" or "store your zip code".
pub(crate) fn item_yes(turn: &mut Turn<'_>) -> Reply {
    let key = match turn.attrs().state {
        Some(DialogState::Major) => "MAJOR",
        _ => "HOME_ZIP_CODE",
    };
    let question = turn.text(key)?;
    turn.attrs_mut().intro_message = question.clone();
    Ok(ResponseBuilder::new().ask(question))
}

pub(crate) fn review(turn: &mut Turn<'_>) -> Reply {
    turn.attrs_mut().state = Some(DialogState::Profile);
    let profile = turn.attrs().persistent.profile.clone();
    if profile.is_empty() {
        let message = turn.text("WELCOME_BACK_NO_PROFILE")?;
        return turn.simple_display(message);
    }

    let mut summary = turn.text("SUMMARY_PROFILE")?;
    summary.push_str(&match profile.authoritative_score() {
        Some((kind, score)) => {
            turn.render("SUMMARY_SCORE", &[("SCORE", &kind.label()), ("NUMBER", &score)])?
        }
        None => turn.text("SUMMARY_SCORE_NO")?,
    });
    summary.push_str(&match profile.cost_ceiling() {
        Some(cost) => turn.render("SUMMARY_COST", &[("CURRENCY", &cost)])?,
        None => turn.text("SUMMARY_COST_NO")?,
    });
    summary.push_str(&match profile.degree_value() {
        Some(degree) => turn.render("SUMMARY_DEGREE", &[("DEGREE", &degree)])?,
        None => turn.text("SUMMARY_DEGREE_NO")?,
    });
    summary.push_str(&match profile.major_value() {
        Some(major) => turn.render("SUMMARY_MAJOR", &[("MAJOR", &major.category)])?,
        None => turn.text("SUMMARY_MAJOR_NO")?,
    });
    summary.push_str(&match profile.home_value() {
        Some(zip) => turn.render("SUMMARY_HOME", &[("ZIP_CODE", &zip)])?,
        None => turn.text("SUMMARY_HOME_NO")?,
    });

    turn.attrs_mut().intro_message = summary;
    let prompt = turn.text("SUMMARY_PROMPT")?;
    let message = turn.compose(&prompt);
    let mut builder = ResponseBuilder::new().ask(message);

    if turn.has_display {
        let none = turn.text("NO_PREFERENCE_TEXT")?;
        let or_none = |value: Option<String>| value.unwrap_or_else(|| none.clone());
        let body = format!(
            "Score: {} <br/>Cost: {} USD <br/>Degree: {} <br/>Major: {} <br/>Zip Code: {}",
            or_none(profile.authoritative_score().map(|(_, score)| score.to_string())),
            or_none(profile.cost_ceiling().map(|cost| display::format_thousands(cost.into()))),
            or_none(profile.degree_value().map(|degree| degree.to_string())),
            or_none(profile.major_value().map(|major| major.category.clone())),
            or_none(profile.home_value().map(|zip| zip.to_string())),
        );
        let title = turn.text("PROFILE_TITLE")?;
        builder = builder
            .template(display::profile_template(turn.images, &title, &body))
            .hint(turn.text("PROFILE_HINT")?);
    }
    Ok(builder)
}

/// Jump straight to one profile field.
pub(crate) fn change(turn: &mut Turn<'_>) -> Reply {
    let requested = turn
        .resolved("PROFILE")
        .map(|resolved| resolved.name)
        .or_else(|| turn.slot_value("PROFILE"));
    let Some(requested) = requested else {
        turn.attrs_mut().state = Some(DialogState::Profile);
        return Ok(ResponseBuilder::new().ask(turn.text("PROFILE_UPDATE")?));
    };
    let Ok(field) = requested.parse::<ProfileField>() else {
        debug!(requested = %requested, "Unknown profile field");
        let message = turn.text("PROFILE_ITEM_NOT_FOUND")?;
        turn.attrs_mut().intro_message = message.clone();
        return Ok(ResponseBuilder::new().ask(message));
    };

    let profile = turn.attrs().persistent.profile.clone();
    let (current, prompt) = match field {
        ProfileField::Scores => {
            let current = match profile.authoritative_score() {
                Some((kind, score)) => {
                    turn.render("SCORE_CHANGE", &[("SCORE", &kind.label()), ("NUMBER", &score)])?
                }
                None => String::new(),
            };
            turn.attrs_mut().pending_score = None;
            (current, "INTRODUCTION_SCORES_SHORT")
        }
        ProfileField::Cost => {
            let current = match profile.cost_ceiling() {
                Some(cost) => turn.render("COST_CHANGE", &[("CURRENCY", &cost)])?,
                None => String::new(),
            };
            (current, "INTRODUCTION_COST")
        }
        ProfileField::Degree => {
            let current = match profile.degree_value() {
                Some(degree) => turn.render("DEGREE_CHANGE", &[("DEGREE", &degree)])?,
                None => String::new(),
            };
            (current, "INTRODUCTION_DEGREE")
        }
        ProfileField::Major => {
            let current = match profile.major_value() {
                Some(major) => turn.render("MAJOR_CHANGE", &[("MAJOR", &major.category)])?,
                None => String::new(),
            };
            (current, "MAJOR")
        }
        ProfileField::Home => {
            let current = match profile.home_value() {
                Some(zip) => turn.render("HOME_CHANGE", &[("ZIP_CODE", &zip)])?,
                None => String::new(),
            };
            (current, "HOME_ZIP_CODE")
        }
    };

    let prompt = turn.text(prompt)?;
    let attrs = turn.attrs_mut();
    attrs.state = Some(field.state());
    attrs.intro_message = current;
    let message = turn.compose(&prompt);
    Ok(ResponseBuilder::new().ask(message))
}

/// Which test the user wants to give a score for.
pub(crate) fn score_type(turn: &mut Turn<'_>) -> Reply {
    let spoken = turn
        .resolved("SCORES")
        .map(|resolved| resolved.name)
        .or_else(|| turn.slot_value("SCORES"))
        .and_then(|value| value.parse::<ScoreType>().ok());
    let selection = spoken.or(turn.attrs().pending_score);

    let key = match selection {
        Some(ScoreType::Sat | ScoreType::Both) => "INTRODUCTION_SAT",
        Some(ScoreType::Act) => "INTRODUCTION_ACT",
        None => "SCORE_HELP",
    };
    turn.attrs_mut().pending_score = selection;
    Ok(ResponseBuilder::new().ask(turn.text(key)?))
}

pub(crate) fn degree(turn: &mut Turn<'_>) -> Reply {
    let answer = turn
        .resolved("DEGREE")
        .map(|resolved| resolved.name)
        .or_else(|| turn.slot_value("DEGREE"))
        .and_then(|value| value.parse::<Degree>().ok());
    let Some(degree) = answer else {
        return Ok(ResponseBuilder::new()
            .speak(turn.text("DEGREE_HELP")?)
            .reprompt(turn.text("INTRODUCTION_DEGREE")?));
    };

    let confirm = turn.render("DEGREE_CONFIRM", &[("DEGREE", &degree)])?;
    let attrs = turn.attrs_mut();
    attrs.persistent.profile.degree = Some(Preference::Value(degree));
    attrs.intro_message = confirm;
    move_on(turn)
}

pub(crate) fn major(turn: &mut Turn<'_>) -> Reply {
    let Some(spoken) = turn.slot_value("MAJOR") else {
        return Ok(ResponseBuilder::new().ask(turn.text("MAJOR")?));
    };
    let Some(resolved) = turn.resolved("MAJOR").filter(|r| r.id != NO_PREFERENCE) else {
        return Ok(ResponseBuilder::new().ask(turn.text("MAJOR_ERROR")?));
    };

    let confirm = turn.render(
        "MAJOR_CONFIRM",
        &[("MAJOR", &spoken), ("FIELD", &resolved.name)],
    )?;
    let attrs = turn.attrs_mut();
    attrs.persistent.profile.major = Some(Preference::Value(Major {
        id: resolved.id,
        category: resolved.name,
    }));
    attrs.intro_message = confirm;
    move_on(turn)
}

/// A number spoken while collecting scores, cost or zip code.
pub(crate) fn number(turn: &mut Turn<'_>) -> Reply {
    let raw = turn.slot_value("NUMBER").unwrap_or_default();
    let state = turn.attrs().state;

    let confirm = match state {
        Some(DialogState::Scores) => {
            let Some(kind) = turn.attrs().pending_score else {
                return Ok(ResponseBuilder::new().ask(turn.text("SCORE_HELP")?));
            };
            let Some(score) = raw.parse::<u16>().ok().filter(|s| kind.accepts(*s)) else {
                return invalid_number(turn, &raw);
            };
            let attrs = turn.attrs_mut();
            match kind {
                ScoreType::Sat => attrs.persistent.profile.sat = Some(Preference::Value(score)),
                ScoreType::Act => attrs.persistent.profile.act = Some(Preference::Value(score)),
                ScoreType::Both => {
                    attrs.persistent.profile.sat = Some(Preference::Value(score));
                    attrs.pending_score = Some(ScoreType::Act);
                    return Ok(ResponseBuilder::new().ask(turn.text("INTRODUCTION_ACT")?));
                }
            }
            attrs.pending_score = None;
            turn.render("SCORE_CONFIRM", &[("SCORE", &kind.label()), ("NUMBER", &score)])?
        }
        Some(DialogState::Cost) => {
            let Ok(cost) = raw.parse::<u32>() else {
                return invalid_number(turn, &raw);
            };
            turn.attrs_mut().persistent.profile.cost = Some(Preference::Value(cost));
            turn.render("COST_CONFIRM", &[("CURRENCY", &cost)])?
        }
        Some(DialogState::Home) => {
            let Ok(zip) = raw.parse::<ZipCode>() else {
                return invalid_number(turn, &raw);
            };
            let confirm = turn.render("HOME_ZIP_CODE_CONFIRM", &[("ZIP_CODE", &zip)])?;
            turn.attrs_mut().persistent.profile.home = Some(Preference::Value(zip));
            confirm
        }
        other => {
            return Err(DialogError::InvalidRequest(format!(
                "number outside a profile step: {other:?}"
            )))
        }
    };

    turn.attrs_mut().intro_message = confirm;
    move_on(turn)
}

/// Re-ask the current question without advancing.
fn invalid_number(turn: &mut Turn<'_>, raw: &str) -> Reply {
    debug!(value = %raw, state = ?turn.attrs().state, "Rejected profile number");
    let message = match turn.attrs().state {
        Some(DialogState::Scores) => {
            let kind = turn.attrs().pending_score.unwrap_or(ScoreType::Sat);
            let (low, high) = kind.range();
            turn.render(
                "SCORE_NUMBER_ERROR",
                &[("SCORE", &kind.label()), ("RANGELOW", &low), ("RANGEHIGH", &high)],
            )?
        }
        Some(DialogState::Cost) => turn.render("COST_NUMBER_ERROR", &[("NUMBER", &raw)])?,
        _ => turn.text("HOME_ZIP_CODE_ERROR")?,
    };
    turn.attrs_mut().intro_message = message.clone();
    Ok(ResponseBuilder::new().ask(message))
}

/// "No" or "next" during a profile step: record no preference and move on.
pub(crate) fn skip(turn: &mut Turn<'_>) -> Reply {
    let state = turn.attrs().state;
    let key = match state {
        Some(DialogState::Scores) => {
            let attrs = turn.attrs_mut();
            let profile = &mut attrs.persistent.profile;
            let key = match attrs.pending_score {
                Some(ScoreType::Both) => {
                    profile.sat = Some(Preference::NoPreference);
                    attrs.pending_score = Some(ScoreType::Act);
                    return Ok(ResponseBuilder::new().ask(turn.text("INTRODUCTION_ACT")?));
                }
                Some(ScoreType::Sat) => {
                    profile.sat = Some(Preference::NoPreference);
                    profile.act.get_or_insert(Preference::NoPreference);
                    "NO_SAT_SCORE"
                }
                Some(ScoreType::Act) => {
                    profile.act = Some(Preference::NoPreference);
                    profile.sat.get_or_insert(Preference::NoPreference);
                    "NO_ACT_SCORE"
                }
                None => {
                    profile.sat = Some(Preference::NoPreference);
                    profile.act = Some(Preference::NoPreference);
                    "NO_SCORE"
                }
            };
            attrs.pending_score = None;
            key
        }
        Some(DialogState::Cost) => {
            turn.attrs_mut().persistent.profile.cost = Some(Preference::NoPreference);
            "INTRODUCTION_NO_PREFERENCE"
        }
        Some(DialogState::Degree) => {
            turn.attrs_mut().persistent.profile.degree = Some(Preference::NoPreference);
            "INTRODUCTION_NO_PREFERENCE"
        }
        Some(DialogState::Major) => {
            turn.attrs_mut().persistent.profile.major = Some(Preference::NoPreference);
            "MAJOR_NONE"
        }
        Some(DialogState::Home) => {
            turn.attrs_mut().persistent.profile.home = Some(Preference::NoPreference);
            "HOME_NONE"
        }
        other => {
            return Err(DialogError::InvalidRequest(format!(
                "skip outside a profile step: {other:?}"
            )))
        }
    };

    let intro = turn.text(key)?;
    turn.attrs_mut().intro_message = intro;
    move_on(turn)
}
