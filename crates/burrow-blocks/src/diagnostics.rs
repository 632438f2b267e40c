use std::fmt;

/// Sink for diagnostic messages emitted by tile naming and world generation.
///
/// Passed in explicitly rather than logged globally; [`NoopDiagnostics`] is
/// the default everywhere.
pub trait Diagnostics: Send + Sync {
    fn debug(&self, target: &str, message: &dyn fmt::Display);
    fn warn(&self, target: &str, message: &dyn fmt::Display);
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    #[inline]
    fn debug(&self, _target: &str, _message: &dyn fmt::Display) {}

    #[inline]
    fn warn(&self, _target: &str, _message: &dyn fmt::Display) {}
}

/// Forwards to the `log` facade, using the caller's target.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn debug(&self, target: &str, message: &dyn fmt::Display) {
        log::debug!(target: target, "{}", message);
    }

    fn warn(&self, target: &str, message: &dyn fmt::Display) {
        log::warn!(target: target, "{}", message);
    }
}
