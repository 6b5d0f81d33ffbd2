use crate::list::phrase_map::PhraseMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Languages {
    pub domestic: String,
    pub foreign: String,
}

impl Languages {
    pub fn new(domestic: impl Into<String>, foreign: impl Into<String>) -> Self {
        Self {
            domestic: domestic.into(),
            foreign: foreign.into(),
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            domestic: self.foreign.clone(),
            foreign: self.domestic.clone(),
        }
    }
}

/// A named list of domestic → foreign phrase pairs.
///
/// `dirty` tracks whether the list differs from what was last persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseList {
    pub name: String,
    pub languages: Languages,
    phrases: PhraseMap,
    dirty: bool,
}

impl PhraseList {
    pub fn new(name: impl Into<String>, languages: Languages) -> Self {
        Self {
            name: name.into(),
            languages,
            phrases: PhraseMap::new(),
            dirty: false,
        }
    }

    /// Builds a clean list from already persisted content.
    pub fn from_parts(name: impl Into<String>, languages: Languages, phrases: PhraseMap) -> Self {
        Self {
            name: name.into(),
            languages,
            phrases,
            dirty: false,
        }
    }

    pub fn phrases(&self) -> &PhraseMap {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Upserts a pair. Always marks the list dirty, even if nothing changed.
    pub fn add(&mut self, domestic: &str, foreign: &str) {
        self.phrases.insert(domestic, foreign);
        self.dirty = true;
    }

    pub fn remove(&mut self, domestic: &str) -> bool {
        let found = self.phrases.remove(domestic).is_some();
        if found {
            self.dirty = true;
        }
        found
    }

    /// Replaces the domestic key of an entry. The entry is deleted and
    /// reinserted, so it ends up last unless `new_domestic` already exists.
    pub fn rename(&mut self, domestic: &str, new_domestic: &str, foreign: &str) -> bool {
        if self.phrases.remove(domestic).is_none() {
            return false;
        }
        self.add(new_domestic, foreign);
        true
    }

    pub fn set_foreign(&mut self, domestic: &str, new_foreign: &str) -> bool {
        let found = self.phrases.set(domestic, new_foreign);
        if found {
            self.dirty = true;
        }
        found
    }

    /// Returns a copy with every pair inverted and the language labels
    /// swapped. The receiver is left untouched.
    pub fn swap_languages(&self) -> PhraseList {
        PhraseList {
            name: self.name.clone(),
            languages: self.languages.swapped(),
            phrases: self.phrases.inverted(),
            dirty: self.dirty,
        }
    }
}
