mod home;
mod navbar;

pub use home::Home;
pub use navbar::{ Navbar, BRAND, BRAND_SUFFIX, HIRE_ME, NAV_ITEMS };
