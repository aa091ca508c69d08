//! Recording fake provider for unit tests.

use crate::error::{Error, Result};
use crate::provider::{Listener, MediaQueryList, MediaQueryProvider};
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A media-query list whose match state is set by the test.
pub struct FakeList {
    matches: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
    added: Cell<usize>,
    removed: Cell<usize>,
}

impl FakeList {
    pub fn new(matches: bool) -> Self {
        Self {
            matches: Cell::new(matches),
            listeners: RefCell::new(Vec::new()),
            added: Cell::new(0),
            removed: Cell::new(0),
        }
    }

    /// Changes the match state and fires every registered listener.
    pub fn set_matches(&self, matches: bool) {
        self.matches.set(matches);
        self.fire();
    }

    pub fn fire(&self) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener.call();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn added(&self) -> usize {
        self.added.get()
    }

    pub fn removed(&self) -> usize {
        self.removed.get()
    }
}

impl MediaQueryList for FakeList {
    fn matches(&self) -> bool {
        self.matches.get()
    }

    fn add_listener(&self, listener: &Listener) {
        self.added.set(self.added.get() + 1);
        self.listeners.borrow_mut().push(listener.clone());
    }

    fn remove_listener(&self, listener: &Listener) {
        self.removed.set(self.removed.get() + 1);
        self.listeners.borrow_mut().retain(|l| !l.same_as(listener));
    }
}

/// Hands out shared [`FakeList`]s keyed by query string.
///
/// A query is matching when it was listed in `matching` at construction.
/// Queries listed in `rejected` fail with `QueryRejected`.
#[derive(Default)]
pub struct FakeProvider {
    matching: Vec<String>,
    rejected: Vec<String>,
    lists: RefCell<Vec<(String, Rc<FakeList>)>>,
    calls: Cell<usize>,
}

impl FakeProvider {
    pub fn new(matching: &[&str]) -> Self {
        Self {
            matching: matching.iter().map(|q| q.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn rejecting(mut self, query: &str) -> Self {
        self.rejected.push(query.to_string());
        self
    }

    pub fn list(&self, query: &str) -> Rc<FakeList> {
        self.lists
            .borrow()
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, list)| list.clone())
            .expect("query was never requested")
    }

    pub fn lists(&self) -> Vec<Rc<FakeList>> {
        self.lists.borrow().iter().map(|(_, l)| l.clone()).collect()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl MediaQueryProvider for FakeProvider {
    type List = Rc<FakeList>;

    fn match_media(&self, query: &str) -> Result<Rc<FakeList>> {
        self.calls.set(self.calls.get() + 1);
        if self.rejected.iter().any(|q| q == query) {
            return Err(Error::query_rejected(query, "rejected by fake"));
        }
        let list = Rc::new(FakeList::new(self.matching.iter().any(|q| q == query)));
        self.lists
            .borrow_mut()
            .push((query.to_string(), list.clone()));
        Ok(list)
    }
}

/// A notice sink that records everything it receives.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub notices: Rc<RefCell<Vec<crate::notice::Notice>>>,
}

impl crate::notice::NoticeSink for RecordingSink {
    fn notice(&self, notice: &crate::notice::Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
