pub mod practice;
pub mod random;
pub mod result;

pub use practice::{
    AnswerOutcome, PracticeOptions, PracticeSession, Question, SessionError, SessionState,
};
pub use random::{Randomizer, SeededRandomizer};
pub use result::PracticeReport;
