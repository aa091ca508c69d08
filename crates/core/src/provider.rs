//! Media-query-list provider abstraction.
//!
//! The provider is an external capability: given a query string it returns
//! a list object exposing the current match state and accepting listener
//! registration. Responder never constructs these objects itself.

use crate::error::Result;
use alloc::rc::Rc;
use core::fmt;

/// A change handler registered with media-query lists.
///
/// Cloning a listener shares the same handler; two listeners are the same
/// registration exactly when [`Listener::same_as`] holds.
#[derive(Clone)]
pub struct Listener {
    handler: Rc<dyn Fn()>,
}

impl Listener {
    /// Creates a listener from a zero-argument handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Invokes the handler.
    #[inline]
    pub fn call(&self) {
        (self.handler)();
    }

    /// Returns true if both listeners share the same handler.
    #[inline]
    pub fn same_as(&self, other: &Listener) -> bool {
        Rc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("handler", &Rc::as_ptr(&self.handler))
            .finish()
    }
}

/// Live match state of a single media query.
pub trait MediaQueryList {
    /// Returns whether the query currently matches.
    fn matches(&self) -> bool;

    /// Registers a listener fired whenever the match state changes.
    fn add_listener(&self, listener: &Listener);

    /// Unregisters a listener previously passed to `add_listener`.
    fn remove_listener(&self, listener: &Listener);
}

/// Produces media-query lists for query strings.
pub trait MediaQueryProvider {
    /// The list type handed out by this provider.
    type List: MediaQueryList;

    /// Returns the list tracking `query`.
    fn match_media(&self, query: &str) -> Result<Self::List>;
}

impl<F, L> MediaQueryProvider for F
where
    F: Fn(&str) -> Result<L>,
    L: MediaQueryList,
{
    type List = L;

    fn match_media(&self, query: &str) -> Result<L> {
        self(query)
    }
}

impl<L: MediaQueryList + ?Sized> MediaQueryList for Rc<L> {
    fn matches(&self) -> bool {
        (**self).matches()
    }

    fn add_listener(&self, listener: &Listener) {
        (**self).add_listener(listener)
    }

    fn remove_listener(&self, listener: &Listener) {
        (**self).remove_listener(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::FakeList;
    use core::cell::Cell;

    #[test]
    fn test_listener_call() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let listener = Listener::new(move || count_clone.set(count_clone.get() + 1));

        listener.call();
        listener.clone().call();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_listener_identity() {
        let a = Listener::new(|| {});
        let b = Listener::new(|| {});

        assert!(a.same_as(&a.clone()));
        assert!(!a.same_as(&b));
    }

    #[test]
    fn test_closure_provider() {
        let provider = |query: &str| -> Result<Rc<FakeList>> {
            if query.is_empty() {
                Err(Error::query_rejected(query, "empty"))
            } else {
                Ok(Rc::new(FakeList::new(query.len() > 3)))
            }
        };

        assert!(provider.match_media("(print)").unwrap().matches());
        assert!(!provider.match_media("abc").unwrap().matches());
        assert!(provider.match_media("").is_err());
    }
}
