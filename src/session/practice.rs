use thiserror::Error;
use tracing::debug;

use crate::list::{Languages, PhraseList, PhraseMap};
use crate::session::random::Randomizer;
use crate::session::result::PracticeReport;

/// One in three questions flips the direction of everything still unasked.
const FLIP_LOW: u32 = 1;
const FLIP_HIGH: u32 = 3;
const FLIP_VALUE: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PracticeOptions {
    pub count: usize,
    pub randomize_direction: bool,
    pub start_with_foreign: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot ask {requested} phrases from a list of {available}")]
    CountOutOfRange { requested: usize, available: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Asking,
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    /// 1-based position within the session.
    pub number: usize,
    pub phrase: String,
    /// Labels as displayed while this question is asked; the answer is
    /// expected in `languages.foreign`.
    pub languages: Languages,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { given: String, expected: String },
}

pub struct PracticeSession {
    options: PracticeOptions,
    canonical: PhraseMap,
    original: Languages,
    displayed: Languages,
    working: PhraseMap,
    pending: Option<(String, String)>,
    problems: PhraseMap,
    score: usize,
    asked: usize,
}

impl PracticeSession {
    /// Samples `options.count` phrases from `list` without replacement, in
    /// shuffled order.
    pub fn setup(
        list: &PhraseList,
        options: PracticeOptions,
        rng: &mut dyn Randomizer,
    ) -> Result<Self, SessionError> {
        let available = list.len();
        if options.count < 1 || options.count > available {
            return Err(SessionError::CountOutOfRange {
                requested: options.count,
                available,
            });
        }

        let mut keys: Vec<String> = list.phrases().keys().map(str::to_string).collect();
        rng.shuffle(&mut keys);

        let phrases = list.phrases();
        let mut working: PhraseMap = keys
            .iter()
            .take(options.count)
            .filter_map(|k| phrases.get(k).map(|v| (k.as_str(), v)))
            .collect();

        let original = list.languages.clone();
        let mut displayed = original.clone();
        if options.start_with_foreign {
            working = working.inverted();
            displayed = displayed.swapped();
        }

        debug!(
            list = %list.name,
            count = options.count,
            randomize = options.randomize_direction,
            start_with_foreign = options.start_with_foreign,
            "practice session set up"
        );

        Ok(Self {
            options,
            canonical: phrases.clone(),
            original,
            displayed,
            working,
            pending: None,
            problems: PhraseMap::new(),
            score: 0,
            asked: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        if self.working.is_empty() && self.pending.is_none() {
            SessionState::Done
        } else {
            SessionState::Asking
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions taken from the working set so far.
    pub fn asked(&self) -> usize {
        self.asked
    }

    pub fn requested(&self) -> usize {
        self.options.count
    }

    pub fn remaining(&self) -> usize {
        self.working.len()
    }

    pub fn displayed_languages(&self) -> &Languages {
        &self.displayed
    }

    /// Running percentage against questions asked so far, `None` before the
    /// first question.
    pub fn running_percentage(&self) -> Option<usize> {
        if self.asked == 0 {
            None
        } else {
            Some(self.score * 100 / self.asked)
        }
    }

    /// Takes the next phrase off the working set. An unanswered question is
    /// returned again unchanged.
    pub fn next_question(&mut self, rng: &mut dyn Randomizer) -> Option<Question> {
        if let Some((phrase, _)) = &self.pending {
            return Some(Question {
                number: self.asked,
                phrase: phrase.clone(),
                languages: self.displayed.clone(),
            });
        }
        if self.working.is_empty() {
            return None;
        }

        if self.options.randomize_direction
            && rng.uniform_int(FLIP_LOW, FLIP_HIGH) == FLIP_VALUE
        {
            self.working = self.working.inverted();
            self.displayed = self.displayed.swapped();
        }

        let (phrase, expected) = self.working.pop_front()?;
        self.asked += 1;
        self.pending = Some((phrase.clone(), expected));
        Some(Question {
            number: self.asked,
            phrase,
            languages: self.displayed.clone(),
        })
    }

    /// Scores the pending question. The answer is trimmed and compared
    /// exactly, case included.
    pub fn answer(&mut self, given: &str) -> Option<AnswerOutcome> {
        let (phrase, expected) = self.pending.take()?;
        let given = given.trim();
        if given == expected {
            self.score += 1;
            Some(AnswerOutcome::Correct)
        } else {
            self.problems.insert(phrase, expected.clone());
            Some(AnswerOutcome::Incorrect {
                given: given.to_string(),
                expected,
            })
        }
    }

    /// Missed pairs in the orientation they were asked.
    pub fn problems(&self) -> &PhraseMap {
        &self.problems
    }

    pub fn finish(self, rng: &mut dyn Randomizer) -> PracticeReport {
        debug!(
            score = self.score,
            requested = self.options.count,
            missed = self.problems.len(),
            "practice session finished"
        );
        PracticeReport::build(
            self.original,
            self.score,
            self.options.count,
            &self.problems,
            &self.canonical,
            rng,
        )
    }
}
