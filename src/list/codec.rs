//! Line-oriented text format for phrase lists.
//!
//! ```text
//! English:French
//! hello:bonjour
//! thanks:merci
//! ```
//!
//! Blank lines and lines starting with `#` are ignored when reading and are
//! never written back.

use thiserror::Error;

use crate::list::phrase_list::{Languages, PhraseList};
use crate::list::phrase_map::PhraseMap;

pub const SEPARATOR: char = ':';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// `line` counts only the lines that were not skipped, starting at 1.
    #[error("malformed line {line}: expected exactly one ':'")]
    MalformedLine { line: usize },
}

impl DecodeError {
    pub fn line(&self) -> usize {
        match self {
            DecodeError::MalformedLine { line } => *line,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Decoded {
    pub languages: Languages,
    pub phrases: PhraseMap,
}

fn split_pair(line: &str, logical: usize) -> Result<(&str, &str), DecodeError> {
    let mut fields = line.split(SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        _ => Err(DecodeError::MalformedLine { line: logical }),
    }
}

pub fn decode<I, S>(lines: I) -> Result<Decoded, DecodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut languages = None;
    let mut phrases = PhraseMap::new();
    let mut logical = 0;

    for raw in lines {
        let line = raw.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        logical += 1;
        let (left, right) = split_pair(line, logical)?;
        if languages.is_none() {
            languages = Some(Languages::new(left, right));
        } else {
            phrases.insert(left, right);
        }
    }

    // A resource with no header yet (created, languages never written)
    // reads as an unlabelled empty list.
    Ok(Decoded {
        languages: languages.unwrap_or_default(),
        phrases,
    })
}

pub fn encode(list: &PhraseList) -> String {
    let mut out = format!(
        "{}{SEPARATOR}{}",
        list.languages.domestic, list.languages.foreign
    );
    for (domestic, foreign) in list.phrases().iter() {
        out.push('\n');
        out.push_str(domestic);
        out.push(SEPARATOR);
        out.push_str(foreign);
    }
    out
}
