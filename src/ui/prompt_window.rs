use crate::{dialogs::PromptChoice, stage::Stage};

// Modal window asking what to do about an unbound stage. Open it when a
// stage click reports that a prompt is required; the answer comes back on
// the frame the user picks a button.
#[derive(Default)]
pub struct StagePromptWindow {
    pending: Option<Stage>,
}

impl StagePromptWindow {
    pub fn open(&mut self, stage: Stage) {
        self.pending = Some(stage);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<(Stage, PromptChoice)> {
        let stage = self.pending?;
        let mut choice = None;

        egui::Window::new("Add Shader")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!(
                    "The {stage} stage has no file yet. Create a new file, \
                     open an existing one, or use the current file?"
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("New File").clicked() {
                        choice = Some(PromptChoice::NewFile);
                    }
                    if ui.button("Open File").clicked() {
                        choice = Some(PromptChoice::OpenFile);
                    }
                    if ui.button("This File").clicked() {
                        choice = Some(PromptChoice::UseCurrentFile);
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(PromptChoice::Cancel);
                    }
                });
            });

        let choice = choice?;
        self.pending = None;
        Some((stage, choice))
    }
}
