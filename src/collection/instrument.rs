//! Optional trace events.
//!
//! With the `tracing` feature, [`trace_event!`] forwards to
//! `tracing::trace!` under the `setkit::collection` target. Without it the
//! macro expands to nothing and its arguments are never evaluated.

macro_rules! trace_event {
    ($($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "setkit::collection", $($argument)+);
        }
    };
}

pub(crate) use trace_event;
