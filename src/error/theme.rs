use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    NoWindow,
    NoDocument,
    NoRootElement,
    ClassList(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::NoWindow => write!(f, "DOM Error: no window available"),
            ThemeError::NoDocument => write!(f, "DOM Error: window has no document"),
            ThemeError::NoRootElement => write!(f, "DOM Error: document has no root element"),
            ThemeError::ClassList(msg) => write!(f, "Class List Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}
