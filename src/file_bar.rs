use crate::document::DocumentId;

// The row of open-file tabs at the top of the editor. Order is insertion
// order; at most one tab per document.
#[derive(Default)]
pub struct FileBar {
    tabs: Vec<DocumentId>,
    active: Option<DocumentId>,
}

impl FileBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_tab(&self, document: DocumentId) -> bool {
        self.tabs.contains(&document)
    }

    pub fn add_tab(&mut self, document: DocumentId) {
        if !self.has_tab(document) {
            self.tabs.push(document);
        }
    }

    pub fn select(&mut self, document: DocumentId) {
        if self.has_tab(document) {
            self.active = Some(document);
        } else {
            log::warn!("cannot select a tab that is not open");
        }
    }

    // Select the document's tab, opening one first if needed.
    pub fn focus_or_open(&mut self, document: DocumentId) {
        self.add_tab(document);
        self.active = Some(document);
    }

    pub fn active(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn close_tab(&mut self, document: DocumentId) {
        self.tabs.retain(|&tab| tab != document);
        if self.active == Some(document) {
            self.active = self.tabs.last().copied();
        }
    }

    pub fn tabs(&self) -> &[DocumentId] {
        &self.tabs
    }
}
