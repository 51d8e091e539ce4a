//! Ties in-flight fetches to the lifetime of the view that started them.

use std::{cell::RefCell, collections::HashMap, future::Future, rc::Rc};

use futures::future::{AbortHandle, Abortable};

use crate::api::ApiError;

#[derive(Default)]
struct Inner {
    disposed: bool,
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Drops its fetch's abort handle once the fetch settles or is dropped.
struct InFlight {
    inner: Rc<RefCell<Inner>>,
    id: u64,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.inner.borrow_mut().handles.remove(&self.id);
    }
}

/// Cancellation scope for one mounted view. Clones share the scope.
#[derive(Clone, Default)]
pub struct ViewLifetime {
    inner: Rc<RefCell<Inner>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lifetime disposed when the current reactive owner is cleaned up.
    pub fn attach() -> Self {
        let lifetime = Self::new();
        let on_unmount = lifetime.clone();
        leptos::on_cleanup(move || on_unmount.dispose());
        lifetime
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Run `fut` unless the view is gone. Disposal while it is pending resolves
    /// it to [`ApiError::Cancelled`].
    pub async fn run<T, F>(&self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (registration, _in_flight) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return Err(ApiError::Cancelled);
            }
            let id = inner.next_id;
            inner.next_id += 1;
            let (handle, registration) = AbortHandle::new_pair();
            inner.handles.insert(id, handle);
            let in_flight = InFlight {
                inner: Rc::clone(&self.inner),
                id,
            };
            (registration, in_flight)
        };

        match Abortable::new(fut, registration).await {
            Ok(result) => result,
            Err(_aborted) => Err(ApiError::Cancelled),
        }
    }

    pub fn dispose(&self) {
        let handles = {
            let mut inner = self.inner.borrow_mut();
            inner.disposed = true;
            std::mem::take(&mut inner.handles)
        };
        for handle in handles.into_values() {
            handle.abort();
        }
    }

    #[cfg(test)]
    fn in_flight(&self) -> usize {
        self.inner.borrow().handles.len()
    }
}
