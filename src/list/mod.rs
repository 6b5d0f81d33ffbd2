pub mod codec;
pub mod phrase_list;
pub mod phrase_map;

pub use phrase_list::{Languages, PhraseList};
pub use phrase_map::PhraseMap;
