pub mod follow_up;
pub mod result_panel;
pub mod search_bar;
pub mod spinner;
pub mod theme;
