//! Injectable logging collaborator
//!
//! The core logs through a [`Logger`] trait object so consumers can plug
//! in any backend. [`NullLogger`] is the default and drops everything;
//! [`LogFacade`] forwards to the `log` crate macros.

use log::Level;

/// Minimal logging capability.
pub trait Logger: Send + Sync {
    /// Log a message at the given level.
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }
}

/// Logger that silently drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Logger that forwards to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(level, "{}", message);
    }
}
