use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::utils::ClassList;

/// In-memory stand-in for the root element's class list. Clones share the
/// same token set, so a test can keep one handle and give another to the
/// sync observer.
#[derive(Clone, Debug, Default)]
pub struct MemoryClassList {
    tokens: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryClassList {
    pub fn with_tokens(tokens: &[&str]) -> Self {
        let list = Self::default();
        list.tokens.borrow_mut().extend(tokens.iter().map(|t| t.to_string()));
        list
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.borrow().contains(token)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.borrow().iter().cloned().collect()
    }
}

impl ClassList for MemoryClassList {
    fn remove(&mut self, token: &str) -> Result<(), ThemeError> {
        self.tokens.borrow_mut().remove(token);
        Ok(())
    }

    fn add(&mut self, token: &str) -> Result<(), ThemeError> {
        self.tokens.borrow_mut().insert(token.to_string());
        Ok(())
    }
}

/// Rejects every mutation, like a detached or read-only token list.
#[derive(Clone, Debug, Default)]
pub struct RejectingClassList;

impl ClassList for RejectingClassList {
    fn remove(&mut self, token: &str) -> Result<(), ThemeError> {
        Err(ThemeError::ClassList(format!("cannot remove {}", token)))
    }

    fn add(&mut self, token: &str) -> Result<(), ThemeError> {
        Err(ThemeError::ClassList(format!("cannot add {}", token)))
    }
}
