use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::list::codec::{self, DecodeError};
use crate::list::{Languages, PhraseList};

/// One text file per phrase list, all in a single directory.
pub struct ListStore {
    base_dir: PathBuf,
    extension: String,
}

impl ListStore {
    /// Opens the collection directory, creating it on first run.
    pub fn new(base_dir: impl Into<PathBuf>, extension: &str) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            extension: extension.trim_start_matches('.').to_string(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.{}", self.extension))
    }

    fn check_name(name: &str) -> Result<()> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            bail!("invalid phrase list name: {name:?}");
        }
        Ok(())
    }

    /// Stored list names, without extension, sorted.
    pub fn list_names(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.base_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().and_then(|x| x.to_str()) == Some(self.extension.as_str()))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        names
    }

    pub fn exists(&self, name: &str) -> bool {
        Self::check_name(name).is_ok() && self.file_path(name).is_file()
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        Self::check_name(name)?;
        fs::remove_file(self.file_path(name))?;
        info!(list = name, "phrase list removed");
        Ok(())
    }

    /// All lines of a stored list; empty when it cannot be read.
    pub fn read_lines(&self, name: &str) -> Vec<String> {
        if Self::check_name(name).is_err() {
            return Vec::new();
        }
        match fs::read_to_string(self.file_path(name)) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(e) => {
                warn!(list = name, error = %e, "could not read phrase list");
                Vec::new()
            }
        }
    }

    /// Replaces the whole resource. Content goes to a temp file first, so a
    /// failed write leaves the previous file as it was.
    pub fn write_all(&self, name: &str, text: &str) -> Result<()> {
        Self::check_name(name)?;
        let path = self.file_path(name);
        let tmp_path = path.with_extension(format!("{}.tmp", self.extension));

        let written = (|| -> Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)?;
            Ok(())
        })();
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            warn!(list = name, error = %e, "could not write phrase list");
            return Err(e);
        }
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<PhraseList, DecodeError> {
        let decoded = codec::decode(self.read_lines(name)).inspect_err(|e| {
            warn!(list = name, line = e.line(), "could not parse phrase list");
        })?;
        info!(list = name, phrases = decoded.phrases.len(), "phrase list loaded");
        Ok(PhraseList::from_parts(name, decoded.languages, decoded.phrases))
    }

    /// Writes the list and clears its dirty flag. On failure the list stays
    /// dirty.
    pub fn save(&self, list: &mut PhraseList) -> Result<()> {
        self.write_all(&list.name, &codec::encode(list))?;
        list.mark_saved();
        info!(list = %list.name, phrases = list.len(), "phrase list saved");
        Ok(())
    }

    /// Writes a fresh list holding only the header line.
    pub fn create(&self, name: &str, languages: Languages) -> Result<PhraseList> {
        let list = PhraseList::new(name, languages);
        self.write_all(name, &codec::encode(&list))?;
        info!(list = name, "phrase list created");
        Ok(list)
    }
}
