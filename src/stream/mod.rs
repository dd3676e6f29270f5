//! A byte-stream abstraction for embedded command interfaces
//!
//! This module provides the traits the command interpreter uses to talk to
//! the outside world. The interpreter drains single bytes from a [`Read`]
//! source as they become available, and command handlers print diagnostics
//! through the [`Write`] sink. A transport that implements both sides is a
//! [`Stream`].
//!
//! Implementations are expected to be non-blocking: [`Read::read_byte`] must
//! return immediately with `None` when nothing is pending, so the interpreter
//! can be driven safely from an interrupt handler.

#![deny(unsafe_code)]

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Read, Stream, Write};
}

/// A non-blocking byte source.
///
/// The command interface polls [`available`](Read::available) and pops one
/// byte at a time; it never requests more than the source has reported.
///
/// # Examples
///
/// ```rust
/// use libcli::stream::Read;
///
/// struct Fifo {
///     data: Vec<u8>,
/// }
///
/// impl Read for Fifo {
///     fn available(&self) -> usize {
///         self.data.len()
///     }
///
///     fn read_byte(&mut self) -> Option<u8> {
///         if self.data.is_empty() {
///             None
///         } else {
///             Some(self.data.remove(0))
///         }
///     }
/// }
/// ```
pub trait Read {
    /// Number of bytes that can be read immediately without blocking.
    fn available(&self) -> usize;

    /// Pop one byte from the source.
    ///
    /// Returns `None` when nothing is pending. Must never block.
    fn read_byte(&mut self) -> Option<u8>;
}

/// A byte sink for diagnostic output.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Write data to the sink
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A bidirectional character stream (UART, USB CDC, socket, loopback).
///
/// This is the handle passed through the command interface to handlers.
pub trait Stream: Read + Write {}
