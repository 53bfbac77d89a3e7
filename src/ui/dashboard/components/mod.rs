pub mod board_panel;
pub mod devices_panel;
pub mod footer;
pub mod header;
pub mod logs;
pub mod network_panel;
pub mod shutdown_menu;
