use crate::list::{Languages, PhraseMap};
use crate::session::random::Randomizer;

pub const COMPLIMENTS: &[&str] = &[
    "Amazing",
    "Awesome",
    "Breathtaking",
    "Impressive",
    "Spectacular",
    "Good",
    "Great",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeReport {
    /// The list's own labels, restored after any direction swaps.
    pub languages: Languages,
    pub score: usize,
    pub requested: usize,
    /// Missed pairs, each reading canonical domestic → foreign.
    pub review: Vec<(String, String)>,
    /// Set only when nothing was missed.
    pub compliment: Option<&'static str>,
}

impl PracticeReport {
    pub fn build(
        languages: Languages,
        score: usize,
        requested: usize,
        problems: &PhraseMap,
        canonical: &PhraseMap,
        rng: &mut dyn Randomizer,
    ) -> Self {
        let review: Vec<(String, String)> = problems
            .iter()
            .map(|(asked, answer)| {
                if canonical.contains_key(asked) {
                    (asked.to_string(), answer.to_string())
                } else {
                    (answer.to_string(), asked.to_string())
                }
            })
            .collect();

        let compliment = if review.is_empty() {
            let last = (COMPLIMENTS.len() - 1) as u32;
            COMPLIMENTS
                .get(rng.uniform_int(0, last) as usize)
                .copied()
        } else {
            None
        };

        Self {
            languages,
            score,
            requested,
            review,
            compliment,
        }
    }

    /// Truncated, never rounded.
    pub fn percentage(&self) -> usize {
        if self.requested == 0 {
            return 0;
        }
        self.score * 100 / self.requested
    }
}
