pub mod filter_controller;
pub mod filter_widgets;
pub mod table_refresher;
