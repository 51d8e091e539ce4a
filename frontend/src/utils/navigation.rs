use std::{cell::RefCell, rc::Rc};

pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn navigate(&self, path: &str);
}

/// Records navigations instead of performing them. Used off-browser.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    fn navigate(&self, path: &str) {
        self.history.borrow_mut().push(path.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

pub fn default_navigator() -> Rc<dyn Navigator> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserNavigator)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryNavigator::new())
    }
}
