use std::path::{Path, PathBuf};

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct DocumentId;
}

// An open or addressable file in the editor. Scratch documents have no
// backing file yet and cannot be bound to a shader stage.
pub struct Document {
    title: String,
    path: Option<PathBuf>,
}

impl Document {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            title,
            path: Some(path),
        }
    }

    pub fn scratch(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

// Owner of all documents. Everything else holds `DocumentId`s, which may go
// stale once a document is closed; lookups return `None` in that case.
#[derive(Default)]
pub struct DocumentRegistry {
    documents: SlotMap<DocumentId, Document>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns the already-open document for `path` instead of duplicating it.
    pub fn open_file(&mut self, path: impl Into<PathBuf>) -> DocumentId {
        let path = path.into();
        match self.find_by_path(&path) {
            Some(id) => id,
            None => self.documents.insert(Document::from_path(path)),
        }
    }

    pub fn insert_scratch(&mut self, title: impl Into<String>) -> DocumentId {
        self.documents.insert(Document::scratch(title))
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(id)
    }

    pub fn close(&mut self, id: DocumentId) -> Option<Document> {
        self.documents.remove(id)
    }

    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.documents
            .iter()
            .find(|(_, document)| document.path() == Some(path))
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocumentId, &Document)> {
        self.documents.iter()
    }
}
