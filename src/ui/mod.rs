pub mod prompt_window;
pub mod shader_bar_panel;
