pub mod views;
pub mod components;
pub mod utils;
pub mod hooks;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ init_logging, parse_log_level };
pub use crate::error::ThemeError;
