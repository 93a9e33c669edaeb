//=========================================================================
// Message Bus Errors
//=========================================================================
//
// Handler and dispatch error types.
//
// Handlers report faults as `HandlerError`. The bus wraps them into a
// `DispatchError` according to its `FaultPolicy`:
//   Propagate → first fault aborts dispatch  → DispatchError::Handler
//   Isolate   → all handlers run, faults kept → DispatchError::Isolated
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{MessageKind, SubscriptionId};

//=== HandlerError ========================================================

/// Fault reported by a message handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct HandlerError {
    reason: String,
}

impl HandlerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

//=== HandlerFailure ======================================================

/// One handler fault collected under `FaultPolicy::Isolate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub subscription: SubscriptionId,
    pub error: HandlerError,
}

//=== DispatchError =======================================================

/// Failure of a single `publish` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A handler failed and the remaining dispatch was aborted.
    #[error("handler {subscription} failed while dispatching {kind:?}: {source}")]
    Handler {
        kind: MessageKind,
        subscription: SubscriptionId,
        #[source]
        source: HandlerError,
    },

    /// A handler's lock was poisoned by an earlier panic.
    #[error("handler {subscription} is poisoned, dispatch of {kind:?} aborted")]
    Poisoned {
        kind: MessageKind,
        subscription: SubscriptionId,
    },

    /// Every handler ran; these ones failed.
    #[error("{} handler(s) failed while dispatching {kind:?}", .failures.len())]
    Isolated {
        kind: MessageKind,
        failures: Vec<HandlerFailure>,
    },
}

impl DispatchError {
    /// Kind of the message whose dispatch failed.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Handler { kind, .. }
            | Self::Poisoned { kind, .. }
            | Self::Isolated { kind, .. } => *kind,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_error_displays_reason() {
        let err = HandlerError::new("camera detached");
        assert_eq!(err.to_string(), "camera detached");
        assert_eq!(err.reason(), "camera detached");
    }

    #[test]
    fn dispatch_error_messages() {
        let err = DispatchError::Handler {
            kind: MessageKind::PointAdded,
            subscription: SubscriptionId(3),
            source: HandlerError::new("boom"),
        };
        assert_eq!(err.to_string(), "handler #3 failed while dispatching PointAdded: boom");
        assert_eq!(err.kind(), MessageKind::PointAdded);

        let err = DispatchError::Isolated {
            kind: MessageKind::LevelStart,
            failures: vec![
                HandlerFailure { subscription: SubscriptionId(0), error: HandlerError::new("a") },
                HandlerFailure { subscription: SubscriptionId(1), error: HandlerError::new("b") },
            ],
        };
        assert_eq!(err.to_string(), "2 handler(s) failed while dispatching LevelStart");
        assert_eq!(err.kind(), MessageKind::LevelStart);
    }

    #[test]
    fn handler_variant_exposes_source() {
        use std::error::Error as _;

        let err = DispatchError::Handler {
            kind: MessageKind::PlayerPosition,
            subscription: SubscriptionId(0),
            source: HandlerError::new("inner"),
        };
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("inner"));
    }
}
