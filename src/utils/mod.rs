mod root_class;
mod side_menu;
mod theme_state;

pub use root_class::{ apply_mode, attach_root_sync, root_class_list, sync_class_list, sync_root_class, ClassList };
pub use side_menu::{ MenuControl, SideMenu };
pub use theme_state::{ Subscription, ThemeMode, ThemeStore };
