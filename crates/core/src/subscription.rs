//! Subscription instances.
//!
//! A [`Subscription`] owns the query handles created by one registration,
//! the callback to notify, and the single [`Listener`] registered with
//! every handle. It is either active or released; a released subscription
//! holds no handles and its listener ignores late notifications.

use crate::notice::{Notice, NoticeSink, Target};
use crate::provider::{Listener, MediaQueryList};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

/// Callback type for match notifications.
pub type ChangeCallback<T> = Rc<dyn Fn(&[T])>;

/// A media-query list paired with the value registered against its query.
pub struct QueryHandle<L, T> {
    list: L,
    query: String,
    value: T,
}

impl<L: MediaQueryList, T> QueryHandle<L, T> {
    /// Creates a handle. The value is fixed for the lifetime of the handle.
    pub fn new(list: L, query: String, value: T) -> Self {
        Self { list, query, value }
    }

    /// Returns the query string.
    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the registered value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns whether the query currently matches.
    #[inline]
    pub fn matches(&self) -> bool {
        self.list.matches()
    }

    /// Returns the underlying list.
    #[inline]
    pub fn list(&self) -> &L {
        &self.list
    }
}

struct Instance<L, T> {
    queries: Vec<QueryHandle<L, T>>,
    on_change: ChangeCallback<T>,
    listener: Listener,
}

enum State<L, T> {
    Active(Instance<L, T>),
    Released,
}

/// A registered set of media queries.
///
/// Clones share the same instance. The instance stays registered, and keeps
/// notifying, until it is destroyed; dropping every handle does not stop it.
#[must_use = "the subscription keeps notifying until destroyed; keep a handle to tear it down"]
pub struct Subscription<L, T> {
    state: Rc<RefCell<State<L, T>>>,
    sink: Rc<dyn NoticeSink>,
}

impl<L, T> Clone for Subscription<L, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<L, T> Subscription<L, T>
where
    L: MediaQueryList + 'static,
    T: Clone + 'static,
{
    /// Wires `handles` into an active subscription.
    ///
    /// The shared listener is attached to every handle before this returns.
    /// The callback is not invoked; call [`Subscription::refresh`] for the
    /// initial notification.
    pub(crate) fn wire(
        handles: Vec<(L, String, T)>,
        on_change: ChangeCallback<T>,
        sink: Rc<dyn NoticeSink>,
    ) -> Self {
        let state = Rc::new(RefCell::new(State::Released));
        let listener = change_handler(state.clone());

        let queries = handles
            .into_iter()
            .map(|(list, query, value)| {
                list.add_listener(&listener);
                QueryHandle::new(list, query, value)
            })
            .collect();

        *state.borrow_mut() = State::Active(Instance {
            queries,
            on_change,
            listener,
        });

        Self { state, sink }
    }

    /// Recomputes the matching values and delivers them to the callback.
    ///
    /// Returns the values passed to the callback. A released subscription
    /// returns an empty list and does not invoke the callback.
    pub fn refresh(&self) -> Vec<T> {
        aggregate(&self.state)
    }

    /// Returns the currently matching values without notifying.
    pub fn current(&self) -> Vec<T> {
        match &*self.state.borrow() {
            State::Active(instance) => matching_values(&instance.queries),
            State::Released => Vec::new(),
        }
    }

    /// Unregisters the listener from every query and releases the instance.
    ///
    /// Returns false, after reporting a notice, if the subscription was
    /// already destroyed.
    pub fn destroy(&self) -> bool {
        if self.release() {
            true
        } else {
            self.sink.notice(&Notice::AlreadyDestroyed {
                target: Target::Instance,
            });
            false
        }
    }

    /// Releases without reporting. Returns false if already released.
    pub(crate) fn release(&self) -> bool {
        let previous = core::mem::replace(&mut *self.state.borrow_mut(), State::Released);
        match previous {
            State::Active(instance) => {
                for handle in &instance.queries {
                    handle.list.remove_listener(&instance.listener);
                }
                true
            }
            State::Released => false,
        }
    }
}

impl<L, T> Subscription<L, T> {
    /// Returns true until the subscription is destroyed.
    pub fn is_active(&self) -> bool {
        matches!(&*self.state.borrow(), State::Active(_))
    }

    /// Returns the number of registered queries; zero once destroyed.
    pub fn len(&self) -> usize {
        match &*self.state.borrow() {
            State::Active(instance) => instance.queries.len(),
            State::Released => 0,
        }
    }

    /// Returns true if no queries are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered query strings in registration order.
    pub fn queries(&self) -> Vec<String> {
        match &*self.state.borrow() {
            State::Active(instance) => instance
                .queries
                .iter()
                .map(|h| String::from(h.query.as_str()))
                .collect(),
            State::Released => Vec::new(),
        }
    }

    /// Returns the listener registered with every query, while active.
    pub fn listener(&self) -> Option<Listener> {
        match &*self.state.borrow() {
            State::Active(instance) => Some(instance.listener.clone()),
            State::Released => None,
        }
    }
}

fn matching_values<L: MediaQueryList, T: Clone>(queries: &[QueryHandle<L, T>]) -> Vec<T> {
    queries
        .iter()
        .filter(|handle| handle.matches())
        .map(|handle| handle.value.clone())
        .collect()
}

/// Runs the match aggregator for one instance.
///
/// The state borrow is dropped before the callback runs so the callback
/// may destroy this subscription or register new ones.
fn aggregate<L: MediaQueryList, T: Clone>(state: &RefCell<State<L, T>>) -> Vec<T> {
    let (values, on_change) = match &*state.borrow() {
        State::Active(instance) => (
            matching_values(&instance.queries),
            instance.on_change.clone(),
        ),
        State::Released => return Vec::new(),
    };
    on_change(&values);
    values
}

/// Builds the listener shared by every query of an instance.
///
/// The listener keeps the instance alive while it is attached. Releasing
/// the instance drops the listener it stores, which breaks the cycle; a
/// listener that outlives the release only finds `Released` and does nothing.
fn change_handler<L, T>(state: Rc<RefCell<State<L, T>>>) -> Listener
where
    L: MediaQueryList + 'static,
    T: Clone + 'static,
{
    Listener::new(move || {
        aggregate(&state);
    })
}
