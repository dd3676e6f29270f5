//! Common error types for the command interface

/// An error raised when constructing a command interface.
///
/// Runtime irregularities (buffer exhaustion, unknown commands) are not
/// errors; they are encoded in the status values returned by the interface,
/// which always stays usable. Construction problems are programmer errors
/// and are reported here, once, up front.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The supplied line buffer is too small to hold a command name and its
    /// terminator.
    BufferTooSmall,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
        }
    }
}
