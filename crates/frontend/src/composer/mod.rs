pub mod navigator;
pub mod state;
pub mod ui;
pub mod view_model;

pub use ui::PromptComposer;
