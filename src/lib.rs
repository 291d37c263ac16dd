pub mod dialogs;
pub mod document;
pub mod file_bar;
pub mod project;
pub mod property;
pub mod shader_bar;
pub mod stage;
pub mod ui;
