//! Warning-level notices.
//!
//! Notices report conditions that are not errors: tearing down an instance
//! that was already destroyed, or using the identifier-based registration
//! API. They are delivered to a [`NoticeSink`] chosen by the caller.

use crate::registry::InstanceId;
use core::fmt;

/// What a teardown attempt was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A subscription handle or teardown function.
    Instance,
    /// A legacy registry identifier; `None` when no identifier was given.
    Id(Option<InstanceId>),
}

/// A non-fatal diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Teardown was requested for an instance that is already gone.
    AlreadyDestroyed { target: Target },
    /// An identifier-based registration was made.
    LegacyRegistration,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AlreadyDestroyed {
                target: Target::Instance,
            } => f.write_str("responder instance has already been destroyed"),
            Notice::AlreadyDestroyed {
                target: Target::Id(Some(id)),
            } => write!(f, "responder instance {} has already been destroyed", id),
            Notice::AlreadyDestroyed {
                target: Target::Id(None),
            } => f.write_str("no responder instance identifier given; nothing to destroy"),
            Notice::LegacyRegistration => f.write_str(
                "identifier-based registration is deprecated; use the teardown function returned by register",
            ),
        }
    }
}

/// Receives notices.
pub trait NoticeSink {
    fn notice(&self, notice: &Notice);
}

/// Discards every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NoticeSink for NullSink {
    #[inline]
    fn notice(&self, _notice: &Notice) {}
}

impl<F> NoticeSink for F
where
    F: Fn(&Notice),
{
    fn notice(&self, notice: &Notice) {
        self(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn test_notice_display() {
        let notice = Notice::AlreadyDestroyed {
            target: Target::Id(Some(3)),
        };
        assert!(notice.to_string().contains("instance 3"));

        let notice = Notice::AlreadyDestroyed {
            target: Target::Id(None),
        };
        assert!(notice.to_string().contains("no responder instance identifier"));

        assert!(Notice::LegacyRegistration.to_string().contains("deprecated"));
    }

    #[test]
    fn test_closure_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let sink = move |notice: &Notice| seen_clone.borrow_mut().push(notice.clone());

        sink.notice(&Notice::LegacyRegistration);
        NullSink.notice(&Notice::LegacyRegistration);

        assert_eq!(*seen.borrow(), alloc::vec![Notice::LegacyRegistration]);
    }
}
