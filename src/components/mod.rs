pub mod connection_indicator;
pub mod image_panel;
pub mod mode_toggle;
pub mod recent_results;
pub mod result_card;
pub mod stats_grid;
pub mod text_panel;
