pub mod app;
pub mod board;
pub mod clue_modal;
pub mod score_panel;
