use strum::IntoEnumIterator;

use crate::{
    shader_bar::{BarSnapshot, StageStatus},
    stage::Stage,
};

// Bottom status bar: the project name plus one label per pipeline stage,
// colored by binding state. Returns the stage whose label was clicked, for
// the shell to forward to `ShaderBar::handle_stage_click`.
pub fn ui(ui: &mut egui::Ui, snapshot: &BarSnapshot) -> Option<Stage> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        if let Some(info) = snapshot.project() {
            let color = if info.saved {
                ui.visuals().strong_text_color()
            } else {
                ui.visuals().warn_fg_color
            };
            ui.colored_label(color, info.name.as_str());
            ui.separator();
        }

        for stage in Stage::iter() {
            let status = snapshot.stage(stage);
            let text = egui::RichText::new(stage.label()).color(status_color(ui.visuals(), status));

            // Without a project the labels are inert, like the rest of the bar.
            if status == StageStatus::NoProject {
                ui.add_enabled(false, egui::Label::new(text));
                continue;
            }

            let response = ui
                .add(egui::Label::new(text).sense(egui::Sense::click()))
                .on_hover_text(hover_text(stage, status));
            if response.clicked() {
                clicked = Some(stage);
            }
        }
    });

    clicked
}

fn status_color(visuals: &egui::Visuals, status: StageStatus) -> egui::Color32 {
    match status {
        StageStatus::NoProject => visuals.weak_text_color(),
        StageStatus::Unbound => visuals.warn_fg_color,
        StageStatus::Bound => visuals.strong_text_color(),
    }
}

fn hover_text(stage: Stage, status: StageStatus) -> String {
    match status {
        StageStatus::Bound => format!("Open the {stage} shader"),
        _ => format!("Add a {stage} shader"),
    }
}
