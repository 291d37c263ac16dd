use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::stage::Stage;

// What the user picked in the four-choice prompt shown for an unbound stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    NewFile,
    OpenFile,
    UseCurrentFile,
    Cancel,
}

// Presents the four-choice prompt for a stage and blocks until the user
// decides. The egui shell drives this through `ui::prompt_window` instead.
pub trait StagePrompt {
    fn choose_action(&mut self, stage: Stage) -> PromptChoice;
}

// Native create/open dialogs, filtered to the stage's extension and rooted
// at the project's work folder. `create_shader_file` also produces the file
// on disk, truncating any file already at the chosen path; `Ok(None)` and
// `None` mean the user cancelled.
pub trait StageFileDialog {
    fn create_shader_file(&mut self, dir: &Path, stage: Stage) -> io::Result<Option<PathBuf>>;

    fn open_shader_file(&mut self, dir: &Path, stage: Stage) -> Option<PathBuf>;
}

pub struct NativeFileDialogs;

impl StageFileDialog for NativeFileDialogs {
    fn create_shader_file(&mut self, dir: &Path, stage: Stage) -> io::Result<Option<PathBuf>> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Create new file")
            .set_directory(dir)
            .add_filter("GLSL shader", &[stage.extension()])
            .save_file()
        else {
            return Ok(None);
        };

        if path.exists() {
            fs::remove_file(&path)?;
        }
        fs::File::create(&path)?;

        Ok(Some(path))
    }

    fn open_shader_file(&mut self, dir: &Path, stage: Stage) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open file")
            .set_directory(dir)
            .add_filter("GLSL shader", &[stage.extension()])
            .pick_file()
    }
}
