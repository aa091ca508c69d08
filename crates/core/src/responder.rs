//! Registration entry points.
//!
//! [`Responder::subscribe`] is the single registration routine: it resolves
//! one list per query, wires the shared listener, and delivers the initial
//! matching set. [`Responder::register`] wraps the result in a teardown
//! function; the legacy registry in [`crate::registry`] stores it under a
//! numeric identifier instead.

use crate::config::ResponderConfig;
use crate::error::{Argument, Error, Result};
use crate::notice::{Notice, NoticeSink, NullSink};
use crate::provider::MediaQueryProvider;
use crate::query_map::QueryMap;
use crate::subscription::Subscription;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Tears down the subscription it was returned for.
///
/// Returns true on the first call and false, after a notice, on later calls.
/// Dropping it without calling it leaves the subscription registered.
pub type Teardown = Box<dyn Fn() -> bool>;

/// Creates media-query subscriptions.
///
/// # Example
///
/// ```ignore
/// use responder_core::{QueryMap, Responder};
///
/// let responder = Responder::new();
/// let teardown = responder.register(
///     &provider,
///     QueryMap::from([("(min-width: 100px)", "wide"), ("(max-width: 50px)", "narrow")]),
///     |matching: &[&str]| println!("matching: {:?}", matching),
/// )?;
///
/// // Later
/// teardown();
/// ```
#[derive(Clone)]
pub struct Responder {
    config: ResponderConfig,
    sink: Rc<dyn NoticeSink>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Creates a responder with the default configuration that discards notices.
    pub fn new() -> Self {
        Self::with_config(ResponderConfig::default())
    }

    /// Creates a responder with the given configuration.
    pub fn with_config(config: ResponderConfig) -> Self {
        Self {
            config,
            sink: Rc::new(NullSink),
        }
    }

    /// Routes notices to `sink`.
    pub fn with_sink<S: NoticeSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Reports a notice to the configured sink.
    pub fn notice(&self, notice: &Notice) {
        self.sink.notice(notice);
    }

    /// Registers `values` and returns the subscription instance.
    ///
    /// `on_change` is invoked once with the initial matching values before
    /// this returns, and again after every change of any registered query.
    pub fn subscribe<P, T, F>(
        &self,
        provider: &P,
        values: QueryMap<T>,
        on_change: F,
    ) -> Result<Subscription<P::List, T>>
    where
        P: MediaQueryProvider + ?Sized,
        P::List: 'static,
        T: Clone + 'static,
        F: Fn(&[T]) + 'static,
    {
        if values.is_empty() && !self.config.allow_empty {
            return Err(Error::invalid_argument(Argument::Values));
        }

        // Resolve every list before attaching anything
        let handles = values
            .into_iter()
            .map(|(query, value)| {
                let list = provider.match_media(&query)?;
                Ok((list, query, value))
            })
            .collect::<Result<Vec<_>>>()?;

        let subscription = Subscription::wire(handles, Rc::new(on_change), self.sink.clone());
        subscription.refresh();
        Ok(subscription)
    }

    /// Registers `values` and returns a function that tears them down.
    #[must_use = "dropping the teardown function leaves the queries registered for good"]
    pub fn register<P, T, F>(&self, provider: &P, values: QueryMap<T>, on_change: F) -> Result<Teardown>
    where
        P: MediaQueryProvider + ?Sized,
        P::List: 'static,
        T: Clone + 'static,
        F: Fn(&[T]) + 'static,
    {
        let subscription = self.subscribe(provider, values, on_change)?;
        Ok(Box::new(move || subscription.destroy()))
    }
}
