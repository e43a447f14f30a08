mod icons;

pub use icons::{ BarsIcon, CloseIcon, MoonIcon, SunIcon, ThemeIcon, ThemeIconView };
