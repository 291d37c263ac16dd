use std::{cell::RefCell, io, path::PathBuf, rc::Rc};

use enumset::EnumSet;
use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

use crate::{
    dialogs::{PromptChoice, StageFileDialog, StagePrompt},
    document::{DocumentId, DocumentRegistry},
    file_bar::FileBar,
    project::Project,
    property::ListenerId,
    stage::Stage,
};

#[derive(Debug, Error)]
pub enum BindError {
    #[error("no project is open")]
    NoActiveProject,
    #[error("no file-backed document is selected")]
    NoActiveDocument,
    #[error("`{}` does not match the {stage} stage extension `.{}`", .path.display(), .stage.extension())]
    ExtensionMismatch { stage: Stage, path: PathBuf },
    #[error("no file was selected")]
    NoSelection,
    #[error("could not create the shader file: {0}")]
    FileCreation(#[from] io::Error),
    #[error("the document is no longer open")]
    MissingDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    NoProject,
    Unbound,
    Bound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub saved: bool,
}

// What the bar shows right now. Derived from live state on every call,
// never kept around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSnapshot {
    project: Option<ProjectInfo>,
    stages: [StageStatus; Stage::COUNT],
}

impl BarSnapshot {
    pub fn project(&self) -> Option<&ProjectInfo> {
        self.project.as_ref()
    }

    pub fn stage(&self, stage: Stage) -> StageStatus {
        self.stages[stage as usize]
    }

    pub fn bound_stages(&self) -> EnumSet<Stage> {
        Stage::iter()
            .filter(|&stage| self.stage(stage) == StageStatus::Bound)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    OpenExisting(DocumentId),
    PromptRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened(DocumentId),
    Bound(DocumentId),
    Cancelled,
}

// Change notifications for the shell; drain with `poll_events` and re-render
// from a fresh snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEvent {
    ProjectChanged,
    BindingChanged(Stage),
    SavedChanged(bool),
}

// State behind the shader bar at the bottom of the window: which document
// each pipeline stage of the active project is bound to, and the rules for
// opening, creating and assigning those documents.
pub struct ShaderBar {
    project: Option<Project>,
    saved_listener: Option<ListenerId>,
    events: Rc<RefCell<Vec<BarEvent>>>,
}

impl Default for ShaderBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderBar {
    pub fn new() -> Self {
        Self {
            project: None,
            saved_listener: None,
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn project_mut(&mut self) -> Option<&mut Project> {
        self.project.as_mut()
    }

    // Swap the active project and hand the previous one back. The saved-flag
    // listener moves with the swap, so there is always at most one, and a
    // returned project carries none.
    pub fn set_project(&mut self, project: Option<Project>) -> Option<Project> {
        let mut previous = std::mem::replace(&mut self.project, project);

        if let Some(id) = self.saved_listener.take() {
            if let Some(previous) = previous.as_mut() {
                previous.saved_property_mut().unsubscribe(id);
            }
        }

        if let Some(project) = self.project.as_mut() {
            let events = Rc::clone(&self.events);
            self.saved_listener = Some(project.saved_property_mut().subscribe(move |&saved| {
                events.borrow_mut().push(BarEvent::SavedChanged(saved));
            }));
            log::info!("active project is now {}", project.name());
        } else {
            log::info!("project closed");
        }

        self.events.borrow_mut().push(BarEvent::ProjectChanged);
        previous
    }

    pub fn snapshot(&self) -> BarSnapshot {
        let Some(project) = &self.project else {
            return BarSnapshot {
                project: None,
                stages: [StageStatus::NoProject; Stage::COUNT],
            };
        };

        let mut stages = [StageStatus::Unbound; Stage::COUNT];
        for stage in Stage::iter() {
            if project.has_document(stage) {
                stages[stage as usize] = StageStatus::Bound;
            }
        }

        BarSnapshot {
            project: Some(ProjectInfo {
                name: project.name().to_owned(),
                saved: project.is_saved(),
            }),
            stages,
        }
    }

    // Decide what a click on a stage label should do. Pure; mutates nothing.
    pub fn stage_action(&self, stage: Stage) -> Result<StageAction, BindError> {
        let project = self.project.as_ref().ok_or(BindError::NoActiveProject)?;

        Ok(match project.document(stage) {
            Some(document) => StageAction::OpenExisting(document),
            None => StageAction::PromptRequired,
        })
    }

    // Bind a file the creation dialog just produced. The file already exists
    // on disk with the stage's extension; this never touches the filesystem.
    pub fn bind_new_file(
        &mut self,
        documents: &mut DocumentRegistry,
        stage: Stage,
        path: impl Into<PathBuf>,
    ) -> Result<DocumentId, BindError> {
        let project = self.project.as_mut().ok_or(BindError::NoActiveProject)?;

        let path = path.into();
        let document = documents.open_file(&path);
        project.set_document(stage, document);
        log::info!("bound new file {} to the {stage} stage", path.display());

        self.events.borrow_mut().push(BarEvent::BindingChanged(stage));
        Ok(document)
    }

    // Bind an existing file the user picked. The dialog filter should only
    // offer matching files, but that is a convenience, not a guarantee, so
    // the extension is checked again here.
    pub fn bind_opened_file(
        &mut self,
        documents: &mut DocumentRegistry,
        stage: Stage,
        path: impl Into<PathBuf>,
    ) -> Result<DocumentId, BindError> {
        let project = self.project.as_mut().ok_or(BindError::NoActiveProject)?;

        let path = path.into();
        if !stage.matches_path(&path) {
            log::warn!(
                "not binding {} to the {stage} stage: wrong extension",
                path.display()
            );
            return Err(BindError::ExtensionMismatch { stage, path });
        }

        let document = documents.open_file(&path);
        project.set_document(stage, document);
        log::info!("bound {} to the {stage} stage", path.display());

        self.events.borrow_mut().push(BarEvent::BindingChanged(stage));
        Ok(document)
    }

    // Bind whichever document is active in the file bar, but only when its
    // extension matches the stage exactly.
    pub fn bind_active_document(
        &mut self,
        documents: &DocumentRegistry,
        stage: Stage,
        active: Option<DocumentId>,
    ) -> Result<DocumentId, BindError> {
        let project = self.project.as_mut().ok_or(BindError::NoActiveProject)?;

        let document = active.ok_or(BindError::NoActiveDocument)?;
        let entry = documents.get(document).ok_or(BindError::MissingDocument)?;
        let path = entry.path().ok_or(BindError::NoActiveDocument)?;

        if !stage.matches_path(path) {
            log::warn!(
                "not binding {} to the {stage} stage: wrong extension",
                path.display()
            );
            return Err(BindError::ExtensionMismatch {
                stage,
                path: path.to_path_buf(),
            });
        }

        project.set_document(stage, document);
        log::info!("bound the active document to the {stage} stage");

        self.events.borrow_mut().push(BarEvent::BindingChanged(stage));
        Ok(document)
    }

    // The full click flow for a stage label: select the bound document, or
    // walk the user through binding one. Every cancelled or failed path
    // leaves the project exactly as it was.
    pub fn handle_stage_click<D>(
        &mut self,
        documents: &mut DocumentRegistry,
        file_bar: &mut FileBar,
        dialogs: &mut D,
        stage: Stage,
    ) -> Result<ClickOutcome, BindError>
    where
        D: StagePrompt + StageFileDialog,
    {
        match self.stage_action(stage)? {
            StageAction::OpenExisting(document) => {
                if !documents.contains(document) {
                    return Err(BindError::MissingDocument);
                }
                file_bar.focus_or_open(document);
                Ok(ClickOutcome::Opened(document))
            }
            StageAction::PromptRequired => {
                let work_folder = match &self.project {
                    Some(project) => project.work_folder().to_path_buf(),
                    None => return Err(BindError::NoActiveProject),
                };

                match dialogs.choose_action(stage) {
                    PromptChoice::Cancel => Ok(ClickOutcome::Cancelled),
                    PromptChoice::NewFile => {
                        let path = dialogs
                            .create_shader_file(&work_folder, stage)?
                            .ok_or(BindError::NoSelection)?;
                        let document = self.bind_new_file(documents, stage, path)?;
                        file_bar.focus_or_open(document);
                        Ok(ClickOutcome::Bound(document))
                    }
                    PromptChoice::OpenFile => {
                        let path = dialogs
                            .open_shader_file(&work_folder, stage)
                            .ok_or(BindError::NoSelection)?;
                        let document = self.bind_opened_file(documents, stage, path)?;
                        file_bar.focus_or_open(document);
                        Ok(ClickOutcome::Bound(document))
                    }
                    PromptChoice::UseCurrentFile => {
                        let document =
                            self.bind_active_document(documents, stage, file_bar.active())?;
                        Ok(ClickOutcome::Bound(document))
                    }
                }
            }
        }
    }

    pub fn poll_events(&mut self) -> Vec<BarEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}
