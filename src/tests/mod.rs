// Make common test utilities available
pub mod common;
mod scenarios;
mod side_menu;
