//! Identifier-based instance registry.
//!
//! The legacy API hands out numeric identifiers instead of teardown
//! functions. Identifiers start at 0 and are never reused, so a destroyed
//! identifier can never refer to a newer instance.

use crate::config::DeprecationPolicy;
use crate::error::Result;
use crate::notice::{Notice, Target};
use crate::provider::{MediaQueryList, MediaQueryProvider};
use crate::query_map::QueryMap;
use crate::responder::Responder;
use crate::subscription::Subscription;
use alloc::vec::Vec;
use hashbrown::HashMap;

/// Identifier of a registered instance.
pub type InstanceId = u64;

/// Tracks subscriptions registered through the identifier-based API.
///
/// # Example
///
/// ```ignore
/// use responder_core::{InstanceRegistry, QueryMap, Responder};
///
/// let mut registry = InstanceRegistry::new(Responder::new());
/// let id = registry.register(&provider, QueryMap::from([("(print)", 1)]), |_| {})?;
///
/// assert!(registry.destroy(id));
/// assert!(!registry.destroy(id)); // already destroyed
/// ```
pub struct InstanceRegistry<L, T> {
    responder: Responder,
    /// Instance ID -> subscription
    instances: HashMap<InstanceId, Subscription<L, T>>,
    /// Next instance ID to assign
    next_id: InstanceId,
    /// Whether the deprecation notice was reported
    warned: bool,
}

impl<L, T> InstanceRegistry<L, T>
where
    L: MediaQueryList + 'static,
    T: Clone + 'static,
{
    /// Creates an empty registry that registers through `responder`.
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            instances: HashMap::new(),
            next_id: 0,
            warned: false,
        }
    }

    /// Returns the responder used for registration.
    #[inline]
    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Registers `values` and returns the new instance's identifier.
    pub fn register<P, F>(&mut self, provider: &P, values: QueryMap<T>, on_change: F) -> Result<InstanceId>
    where
        P: MediaQueryProvider<List = L> + ?Sized,
        F: Fn(&[T]) + 'static,
    {
        let subscription = self.responder.subscribe(provider, values, on_change)?;
        Ok(self.insert(subscription))
    }

    /// Stores an already registered subscription under the next identifier.
    pub fn insert(&mut self, subscription: Subscription<L, T>) -> InstanceId {
        let id = self.next_id;
        self.next_id += 1;
        self.instances.insert(id, subscription);

        let report = match self.responder.config().deprecation {
            DeprecationPolicy::Once => !self.warned,
            DeprecationPolicy::EveryCall => true,
            DeprecationPolicy::Silent => false,
        };
        if report {
            self.warned = true;
            self.responder.notice(&Notice::LegacyRegistration);
        }

        id
    }

    /// Tears down the instance registered under `id`.
    ///
    /// Returns false, after reporting a notice, if there is no such instance.
    pub fn destroy(&mut self, id: InstanceId) -> bool {
        self.destroy_opt(Some(id))
    }

    /// Like [`InstanceRegistry::destroy`], for callers that may not have an
    /// identifier at all.
    pub fn destroy_opt(&mut self, id: Option<InstanceId>) -> bool {
        match id.and_then(|id| self.instances.remove(&id)) {
            Some(subscription) => {
                subscription.release();
                true
            }
            None => {
                self.responder.notice(&Notice::AlreadyDestroyed {
                    target: Target::Id(id),
                });
                false
            }
        }
    }

    /// Tears down every registered instance. Returns how many were destroyed.
    pub fn destroy_all(&mut self) -> usize {
        let count = self.instances.len();
        for (_, subscription) in self.instances.drain() {
            subscription.release();
        }
        count
    }

    /// Returns the subscription registered under `id`.
    pub fn get(&self, id: InstanceId) -> Option<&Subscription<L, T>> {
        self.instances.get(&id)
    }

    /// Returns true if `id` is registered.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    /// Returns the number of registered instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true if no instances are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns the identifier the next registration will receive.
    #[inline]
    pub fn next_id(&self) -> InstanceId {
        self.next_id
    }

    /// Returns all registered identifiers in ascending order.
    pub fn ids(&self) -> Vec<InstanceId> {
        let mut ids: Vec<_> = self.instances.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
