use std::path::{Path, PathBuf};

use enumset::EnumSet;
use strum::{EnumCount, IntoEnumIterator};

use crate::{document::DocumentId, property::Property, stage::Stage};

// A shader project: a named work folder plus at most one document per
// pipeline stage. Loading and saving the project file happens elsewhere;
// this type only tracks the in-memory state and its saved flag.
pub struct Project {
    name: String,
    work_folder: PathBuf,
    bindings: [Option<DocumentId>; Stage::COUNT],
    saved: Property<bool>,
}

impl Project {
    pub fn new(name: impl Into<String>, work_folder: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            work_folder: work_folder.into(),
            bindings: [None; Stage::COUNT],
            saved: Property::new(true),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn work_folder(&self) -> &Path {
        &self.work_folder
    }

    pub fn has_document(&self, stage: Stage) -> bool {
        self.bindings[stage as usize].is_some()
    }

    pub fn document(&self, stage: Stage) -> Option<DocumentId> {
        self.bindings[stage as usize]
    }

    // A document belongs to at most one stage; binding it somewhere new
    // steals it from wherever it was. Any actual change marks the project
    // unsaved.
    pub fn set_document(&mut self, stage: Stage, document: DocumentId) {
        if self.bindings[stage as usize] == Some(document) {
            return;
        }
        for other in Stage::iter() {
            if other != stage && self.bindings[other as usize] == Some(document) {
                self.bindings[other as usize] = None;
            }
        }
        self.bindings[stage as usize] = Some(document);
        self.saved.set(false);
    }

    pub fn bound_stages(&self) -> EnumSet<Stage> {
        Stage::iter()
            .filter(|&stage| self.has_document(stage))
            .collect()
    }

    pub fn is_saved(&self) -> bool {
        *self.saved.get()
    }

    pub fn set_saved(&mut self, saved: bool) {
        self.saved.set(saved);
    }

    pub fn saved_property_mut(&mut self) -> &mut Property<bool> {
        &mut self.saved
    }
}
