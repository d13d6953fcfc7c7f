use log::{debug, info};

use crate::quiz::climate::{classify, ClimateField, ClimateForm};
use crate::quiz::scoring::{score_answers, ScoreError};
use crate::quiz::zones::{lookup, ZoneRecord};
use crate::quiz::{AnswerTag, Question, QUESTIONS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("this input is not expected right now")]
    UnexpectedInput,
    #[error("no option labelled {0:?} for the current question")]
    UnknownOption(String),
    #[error("quiz has no question number {0}")]
    NoSuchQuestion(usize),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// What the user should see next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Question {
        number: usize,
        question: &'static Question,
    },
    Field(ClimateField),
    Result(&'static ZoneRecord),
}

/// One run through the quiz or the basic form. A new run starts from a fresh
/// session; a finished one stays on its result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum QuizSession {
    /// The current question is the one after the last answer.
    Answering { answers: Vec<AnswerTag> },
    BasicInput {
        form: ClimateForm,
        field: ClimateField,
    },
    ResultShown {
        zone: AnswerTag,
    },
}

impl QuizSession {
    pub fn quiz() -> Self {
        QuizSession::Answering {
            answers: Vec::with_capacity(QUESTIONS.len()),
        }
    }

    pub fn basic() -> Self {
        QuizSession::BasicInput {
            form: ClimateForm::default(),
            field: ClimateField::ALL[0],
        }
    }

    /// Fails only for a stored session whose answers run past the question bank.
    pub fn prompt(&self) -> Result<Step, SessionError> {
        let step = match self {
            QuizSession::Answering { answers } => Step::Question {
                number: answers.len() + 1,
                question: current_question(answers)?,
            },
            QuizSession::BasicInput { field, .. } => Step::Field(*field),
            QuizSession::ResultShown { zone } => Step::Result(lookup(*zone)),
        };
        Ok(step)
    }

    pub fn result(&self) -> Option<&'static ZoneRecord> {
        match self {
            QuizSession::ResultShown { zone } => Some(lookup(*zone)),
            _ => None,
        }
    }

    /// Records an answer to the current question. The last answer scores the
    /// whole quiz.
    pub fn answer(&mut self, tag: AnswerTag) -> Result<Step, SessionError> {
        let QuizSession::Answering { answers } = self else {
            return Err(SessionError::UnexpectedInput);
        };

        answers.push(tag);
        debug!("answer {} of {}: {}", answers.len(), QUESTIONS.len(), tag);

        if answers.len() < QUESTIONS.len() {
            return self.prompt();
        }

        let zone = score_answers(answers)?;
        info!("quiz scored as {}", zone);
        *self = QuizSession::ResultShown { zone };
        self.prompt()
    }

    pub fn answer_by_label(&mut self, label: &str) -> Result<Step, SessionError> {
        let QuizSession::Answering { answers } = self else {
            return Err(SessionError::UnexpectedInput);
        };
        let tag = current_question(answers)?
            .option_by_label(label)
            .map(|o| o.tag)
            .ok_or_else(|| SessionError::UnknownOption(label.to_string()))?;
        self.answer(tag)
    }

    /// Stores the text for the current basic mode field. Entering the last field
    /// submits the form.
    pub fn enter(&mut self, text: &str) -> Result<Step, SessionError> {
        let QuizSession::BasicInput { form, field } = self else {
            return Err(SessionError::UnexpectedInput);
        };

        form.set(*field, text.trim());
        debug!("{:?} = {:?}", field, text);

        if let Some(next) = field.next() {
            *field = next;
            return self.prompt();
        }

        let measurement = form.parse();
        let zone = classify(&measurement);
        info!("climate {:?} classified as {}", measurement, zone);
        *self = QuizSession::ResultShown { zone };
        self.prompt()
    }

    /// Leaves the current basic mode field blank, which reads as missing.
    pub fn skip(&mut self) -> Result<Step, SessionError> {
        self.enter("")
    }
}

fn current_question(answers: &[AnswerTag]) -> Result<&'static Question, SessionError> {
    QUESTIONS
        .get(answers.len())
        .ok_or(SessionError::NoSuchQuestion(answers.len() + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnswerTag::*;

    #[test]
    fn quiz_walks_through_every_question() {
        let mut session = QuizSession::quiz();
        assert_eq!(
            session.prompt().unwrap(),
            Step::Question {
                number: 1,
                question: &QUESTIONS[0]
            }
        );

        for (i, tag) in [Hot, Warm, Hot, Cold].into_iter().enumerate() {
            match session.answer(tag).unwrap() {
                Step::Question { number, question } => {
                    assert_eq!(number, i + 2);
                    assert_eq!(question, &QUESTIONS[i + 1]);
                }
                other => panic!("expected a question, got {:?}", other),
            }
            assert!(session.result().is_none());
        }

        let step = session.answer(Mild).unwrap();
        assert_eq!(step, Step::Result(lookup(Hot)));
        assert_eq!(session, QuizSession::ResultShown { zone: Hot });
    }

    #[test]
    fn finished_quiz_rejects_more_answers() {
        let mut session = QuizSession::quiz();
        for tag in [Cold, Mild, Cold, Mild, Warm] {
            session.answer(tag).unwrap();
        }
        assert_eq!(session.result(), Some(lookup(Cold)));

        assert_eq!(session.answer(Hot), Err(SessionError::UnexpectedInput));
        assert_eq!(session.enter("70"), Err(SessionError::UnexpectedInput));
        assert_eq!(session.result(), Some(lookup(Cold)));
    }

    #[test]
    fn answers_by_option_label() {
        let mut session = QuizSession::quiz();
        session
            .answer_by_label("Ocean breeze, fresh fruit, barefoot walk.")
            .unwrap();
        let err = session.answer_by_label("Ocean breeze").unwrap_err();
        assert_eq!(err, SessionError::UnknownOption("Ocean breeze".into()));

        for label in ["70–100°F", "Thick tropical soup", "Nope"] {
            session.answer_by_label(label).unwrap();
        }
        assert_eq!(
            session.answer_by_label("I adapt").unwrap(),
            Step::Result(lookup(Hot))
        );
    }

    #[test]
    fn basic_mode_collects_fields_in_order() {
        let mut session = QuizSession::basic();
        assert_eq!(session.prompt().unwrap(), Step::Field(ClimateField::Temperature));

        assert_eq!(session.enter("85").unwrap(), Step::Field(ClimateField::Humidity));
        assert_eq!(session.enter("40").unwrap(), Step::Field(ClimateField::SunnyDays));
        assert_eq!(session.enter("300").unwrap(), Step::Field(ClimateField::Rainfall));
        assert_eq!(session.enter("10").unwrap(), Step::Field(ClimateField::Snowfall));
        assert_eq!(session.enter("0").unwrap(), Step::Result(lookup(Warm)));
        assert_eq!(session.enter("0"), Err(SessionError::UnexpectedInput));
    }

    #[test]
    fn skipping_every_field_lands_on_hot() {
        let mut session = QuizSession::basic();
        for _ in ClimateField::ALL {
            session.skip().unwrap();
        }
        assert_eq!(session.result(), Some(lookup(Hot)));
    }

    #[test]
    fn skipped_temperature_still_lets_snowfall_decide() {
        let mut session = QuizSession::basic();
        session.skip().unwrap();
        for text in ["50", "200", "30"] {
            session.enter(text).unwrap();
        }
        assert_eq!(session.enter("50").unwrap(), Step::Result(lookup(Cold)));
    }

    #[test]
    fn skip_is_only_for_basic_mode() {
        let mut session = QuizSession::quiz();
        assert_eq!(session.skip(), Err(SessionError::UnexpectedInput));
    }

    #[test]
    fn stored_session_past_the_last_question_does_not_panic() {
        let mut session: QuizSession =
            serde_json::from_str(r#"{"Answering":{"answers":["cold","cold","mild","hot","warm"]}}"#)
                .unwrap();
        assert_eq!(session.prompt(), Err(SessionError::NoSuchQuestion(6)));
        assert_eq!(
            session.answer_by_label("I love them"),
            Err(SessionError::NoSuchQuestion(6))
        );
    }

    #[test]
    fn basic_mode_does_not_take_quiz_answers() {
        let mut session = QuizSession::basic();
        assert_eq!(session.answer(Cold), Err(SessionError::UnexpectedInput));
        assert_eq!(session, QuizSession::basic());
    }

    #[test]
    fn session_survives_json_round_trip() {
        let mut session = QuizSession::basic();
        session.enter("65").unwrap();
        let json = serde_json::to_string(&session).unwrap();
        let restored: QuizSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
