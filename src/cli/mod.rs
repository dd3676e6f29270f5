//! Command interface for embedded systems.
//!
//! This module implements a line-oriented command interpreter driven
//! incrementally from a byte stream. Input is tokenized into a shell-like
//! argument vector inside a fixed, caller-supplied buffer, and complete lines
//! are dispatched to handlers registered in a caller-owned command table.
//!
//! # Features
//!
//! - **Zero-allocation**: the line buffer is supplied at construction and
//!   reused for every line; the argument table is a fixed-capacity vector
//! - **Incremental parsing**: bytes are consumed as they arrive, so the
//!   interface works with arbitrarily fragmented input
//! - **Quoted arguments**: `"` wraps tokens that contain whitespace
//! - **Two-phase dispatch**: line recognition is separated from command
//!   execution by a single handoff flag
//! - **Subcommand tables**: handlers can delegate the tail of their argument
//!   vector to a nested command table
//!
//! # Architecture
//!
//! ```text
//!  interrupt context                      task context
//! ┌───────────────────┐   line ready   ┌───────────────────┐
//! │   process_input   │ ─────────────▶ │   execute_input   │
//! │    (tokenizer)    │    handoff     │   (dispatcher)    │
//! └───────────────────┘                └───────────────────┘
//!           │                                    │
//!           ▼                                    ▼
//! ┌───────────────────┐                ┌───────────────────┐
//! │    Line Buffer    │                │      Manifest     │
//! │    + Arg Table    │                │  (command table)  │
//! └───────────────────┘                └───────────────────┘
//! ```
//!
//! [`CommandInterface::process_input`] is the producer: it drains the stream,
//! mutates only parse state, and never calls user code, which makes it safe
//! to run from an interrupt handler. [`CommandInterface::execute_input`] is
//! the consumer: it looks up the pending command and runs its handler, so it
//! must stay in normal task context. The two sides meet at a single
//! ready flag; while a line is pending, the producer refuses to touch the
//! stream, and the consumer resets all parse state when it is done.
//!
//! # Line Syntax
//!
//! - Tokens are separated by runs of spaces and tabs
//! - `"` toggles a quoted span in which whitespace is literal
//! - `\r` terminates a line; `\n` is ignored, so CRLF terminals just work
//! - At most [`MAX_ARGS`] tokens per line; past that, everything accumulates
//!   verbatim in the final token
//!
//! # Usage
//!
//! ```rust
//! use libcli::cli::{Command, CommandInterface, DispatchStatus};
//! use libcli::stream::{Read, Stream, Write};
//! # struct Console { rx: Vec<u8>, pos: usize }
//! # impl Read for Console {
//! #     fn available(&self) -> usize { self.rx.len() - self.pos }
//! #     fn read_byte(&mut self) -> Option<u8> {
//! #         let byte = self.rx.get(self.pos).copied();
//! #         if byte.is_some() { self.pos += 1; }
//! #         byte
//! #     }
//! # }
//! # impl Write for Console {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     type Error = ();
//! # }
//! # impl Stream for Console {}
//!
//! fn led_on(_argc: usize, _argv: &[&str], stream: &mut Console,
//!           _cli: &CommandInterface<'_, Console, ()>, _data: &()) -> bool {
//!     let _ = stream.write(b"led: on\r\n");
//!     true
//! }
//!
//! fn led_off(_argc: usize, _argv: &[&str], stream: &mut Console,
//!            _cli: &CommandInterface<'_, Console, ()>, _data: &()) -> bool {
//!     let _ = stream.write(b"led: off\r\n");
//!     true
//! }
//!
//! static LED_ACTIONS: [Command<Console, ()>; 2] = [
//!     Command { name: "on", handler: led_on, data: () },
//!     Command { name: "off", handler: led_off, data: () },
//! ];
//!
//! fn led(_argc: usize, argv: &[&str], stream: &mut Console,
//!        cli: &CommandInterface<'_, Console, ()>, _data: &()) -> bool {
//!     cli.process_subcommand(&LED_ACTIONS, argv, stream)
//! }
//!
//! static COMMANDS: [Command<Console, ()>; 1] =
//!     [Command { name: "led", handler: led, data: () }];
//!
//! let mut console = Console { rx: b"led on\r".to_vec(), pos: 0 };
//! let mut line_buf = [0u8; 64];
//! let mut cli = CommandInterface::new(&mut line_buf, &COMMANDS).unwrap();
//!
//! cli.process_input(&mut console);
//! assert_eq!(cli.execute_input(&mut console), DispatchStatus::Executed);
//! ```

#![deny(unsafe_code)]

use core::fmt;
use core::str;

use heapless::Vec;

use crate::stream::Stream;

mod buffer;

/// Common error types for the command interface
pub mod error;


use buffer::LineBuffer;

/// Maximum number of arguments per line, the command name included.
///
/// Once a line has produced this many tokens, further delimiters and quotes
/// are treated as ordinary data and accumulate in the final token.
pub const MAX_ARGS: usize = 32;

/// Smallest usable line buffer: one byte of content plus its terminator.
pub const MIN_BUFFER_SIZE: usize = 2;

// ASCII bytes with meaning to the tokenizer
/// ASCII carriage return (0x0D), the line terminator.
pub const ASCII_CR: u8 = 0x0D;
/// ASCII line feed (0x0A), ignored on input.
pub const ASCII_LF: u8 = 0x0A;
/// ASCII space (0x20), an argument delimiter.
pub const ASCII_SPACE: u8 = 0x20;
/// ASCII horizontal tab (0x09), an argument delimiter.
pub const ASCII_TAB: u8 = 0x09;
/// ASCII double quote (0x22), toggles a quoted span.
pub const ASCII_QUOTE: u8 = 0x22;

/// Outcome of one [`CommandInterface::process_input`] call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputStatus {
    /// A complete line is parsed and waiting for [`CommandInterface::execute_input`].
    ///
    /// Repeated calls keep returning this, without reading the stream, until
    /// the pending line is consumed.
    LineReady,
    /// The stream is drained and no terminator has been seen yet; partial
    /// parse state is retained for the next call.
    NotReady,
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputStatus {
    fn format(&self, f: defmt::Formatter) {
        match self {
            InputStatus::LineReady => defmt::write!(f, "LineReady"),
            InputStatus::NotReady => defmt::write!(f, "NotReady"),
        }
    }
}

/// Outcome of one [`CommandInterface::execute_input`] call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DispatchStatus {
    /// A handler matched the command name and was invoked.
    Executed,
    /// The line was empty or no manifest entry matched; the interface has
    /// been reset and is ready for the next line.
    NotFound,
    /// No line is pending; nothing was done.
    NoPendingLine,
}

#[cfg(feature = "defmt")]
impl defmt::Format for DispatchStatus {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DispatchStatus::Executed => defmt::write!(f, "Executed"),
            DispatchStatus::NotFound => defmt::write!(f, "NotFound"),
            DispatchStatus::NoPendingLine => defmt::write!(f, "NoPendingLine"),
        }
    }
}

/// Function signature for command handlers.
///
/// Handlers receive the argument count and vector *after* the command name:
/// for the input line `net up eth0`, the handler of `net` sees `argc == 2`
/// and `argv == ["up", "eth0"]`. The stream is the one the line arrived on,
/// available for diagnostic output; `cli` allows delegation to
/// [`CommandInterface::process_subcommand`]; `data` is the entry's user data.
///
/// The boolean result is returned to the code that invoked the dispatcher;
/// the interface itself resets its parse state regardless of it.
pub type Handler<S, T> = fn(
    argc: usize,
    argv: &[&str],
    stream: &mut S,
    cli: &CommandInterface<'_, S, T>,
    data: &T,
) -> bool;

/// One entry of a command manifest.
///
/// A manifest is a caller-owned slice of these, scanned front to back for
/// the first exact name match; order is significant when names repeat. The
/// interface only ever reads the table.
pub struct Command<S: Stream, T = ()> {
    /// The command name as typed by the user. Matching is case-sensitive
    /// byte equality, no prefixes, no aliases.
    pub name: &'static str,

    /// The function invoked when the name matches.
    pub handler: Handler<S, T>,

    /// Opaque per-entry data passed through to the handler, so one handler
    /// function can serve several entries.
    pub data: T,
}

impl<S: Stream, T: Clone> Clone for Command<S, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            handler: self.handler,
            data: self.data.clone(),
        }
    }
}

impl<S: Stream, T: fmt::Debug> fmt::Debug for Command<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("data", &self.data)
            .finish()
    }
}

/// A finalized argument: a span of the line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    start: usize,
    len: usize,
}

/// Line-oriented command interpreter over a byte stream.
///
/// The interface owns no storage of its own: the line buffer is borrowed
/// from the caller at construction and the manifest is referenced in place.
/// One instance handles one stream; the stream handle itself is passed into
/// each call so the caller keeps control of it between calls.
///
/// # Producer / consumer contract
///
/// [`process_input`](Self::process_input) may run in interrupt context,
/// [`execute_input`](Self::execute_input) must not. The two must not run
/// concurrently; the expected shape is an ISR that calls `process_input` and
/// a main loop that calls `execute_input` whenever a line is ready. An
/// unconsumed ready line blocks further input until it is dispatched.
pub struct CommandInterface<'a, S: Stream, T = ()> {
    buffer: LineBuffer<'a>,
    args: Vec<Token, MAX_ARGS>,
    /// Start offset of the in-progress argument.
    open_start: usize,
    /// Inside a quoted span, delimiters are literal.
    ignore_spaces: bool,
    /// The handoff flag: set by the tokenizer, cleared by the dispatcher.
    cmd_ready: bool,
    manifest: &'a [Command<S, T>],
}

impl<S: Stream, T> fmt::Debug for CommandInterface<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandInterface")
            .field("argc", &self.args.len())
            .field("head", &self.buffer.head())
            .field("capacity", &self.buffer.capacity())
            .field("ignore_spaces", &self.ignore_spaces)
            .field("cmd_ready", &self.cmd_ready)
            .finish()
    }
}

impl<'a, S: Stream, T> CommandInterface<'a, S, T> {
    /// Create a command interface over a caller-supplied line buffer and
    /// command manifest.
    ///
    /// The buffer bounds the length of one line; content beyond it is
    /// truncated, never overrun. The manifest is scanned in order on every
    /// dispatch and is never copied.
    ///
    /// # Errors
    ///
    /// [`error::Error::BufferTooSmall`] if `buffer` is shorter than
    /// [`MIN_BUFFER_SIZE`] bytes.
    pub fn new(
        buffer: &'a mut [u8],
        manifest: &'a [Command<S, T>],
    ) -> Result<Self, error::Error> {
        if buffer.len() < MIN_BUFFER_SIZE {
            return Err(error::Error::BufferTooSmall);
        }
        Ok(Self {
            buffer: LineBuffer::new(buffer),
            args: Vec::new(),
            open_start: 0,
            ignore_spaces: false,
            cmd_ready: false,
            manifest,
        })
    }

    /// Whether a parsed line is waiting to be executed.
    pub fn line_ready(&self) -> bool {
        self.cmd_ready
    }

    /// Drain available bytes from the stream and advance the tokenizer.
    ///
    /// Returns [`InputStatus::LineReady`] as soon as a carriage return
    /// completes a line; bytes after it stay queued in the stream for the
    /// next call. Returns [`InputStatus::NotReady`] when the stream runs dry
    /// first; all partial state is kept, so the call can be repeated as more
    /// input arrives.
    ///
    /// This is the producer half of the interface: bounded work, no user
    /// code, no allocation, which makes it callable from an interrupt
    /// handler. While a completed line is pending it returns immediately
    /// and reads nothing, protecting the pending argument vector.
    pub fn process_input(&mut self, stream: &mut S) -> InputStatus {
        if self.cmd_ready {
            // A parsed line is pending until execute_input consumes it; the
            // stream must not be drained underneath it.
            return InputStatus::LineReady;
        }
        while stream.available() > 0 {
            let byte = match stream.read_byte() {
                Some(byte) => byte,
                None => break,
            };

            // With the argument table full, quotes and delimiters are
            // ordinary data accumulating in the final argument.
            if !self.args.is_full() {
                if byte == ASCII_QUOTE {
                    self.ignore_spaces = !self.ignore_spaces;
                    if !self.ignore_spaces {
                        // A closing quote ends the argument, even an empty
                        // one. Neither quote byte is recorded.
                        self.finish_argument();
                    }
                    continue;
                }
                if !self.ignore_spaces && (byte == ASCII_SPACE || byte == ASCII_TAB) {
                    if self.open_start == self.buffer.head() {
                        // Nothing recorded in the open slot yet: collapse
                        // runs of delimiters.
                        continue;
                    }
                    if !self.finish_argument() {
                        // The table just filled; the delimiter itself
                        // becomes part of the final argument.
                        self.buffer.record(byte);
                    }
                    continue;
                }
            }
            if byte == ASCII_CR {
                self.finish_line();
                return InputStatus::LineReady;
            }
            if byte == ASCII_LF {
                continue;
            }
            // Ordinary data. A full buffer drops the byte; the line is
            // truncated rather than failed.
            self.buffer.record(byte);
        }
        InputStatus::NotReady
    }

    /// Execute the pending line, if any.
    ///
    /// Takes argument 0 as the command name and scans the manifest for the
    /// first exact match, invoking its handler with the remaining arguments,
    /// the stream, this interface, and the entry's user data. Whatever the
    /// handler returns, all parse state is reset before this method does, so
    /// a line is executed at most once and the interface is immediately
    /// ready for new input.
    ///
    /// Handlers may block or perform unbounded work; do not call this from
    /// an interrupt handler.
    ///
    /// # Returns
    ///
    /// * [`DispatchStatus::NoPendingLine`] - no completed line; no effect
    /// * [`DispatchStatus::Executed`] - a handler was found and invoked
    /// * [`DispatchStatus::NotFound`] - empty line or unknown command name
    pub fn execute_input(&mut self, stream: &mut S) -> DispatchStatus {
        if !self.cmd_ready {
            return DispatchStatus::NoPendingLine;
        }
        if self.args.is_empty() {
            self.input_reset();
            return DispatchStatus::NotFound;
        }

        let argc = self.args.len();
        let mut argv: [&str; MAX_ARGS] = [""; MAX_ARGS];
        for (slot, token) in argv.iter_mut().zip(self.args.iter()) {
            *slot = self.arg_str(token);
        }

        let manifest = self.manifest;
        let mut executed = false;
        for command in manifest {
            if command.name == argv[0] {
                // The handler sees the arguments after the name. The reset
                // below happens whatever it returns.
                (command.handler)(argc - 1, &argv[1..argc], stream, self, &command.data);
                executed = true;
                break;
            }
        }
        self.input_reset();
        if executed {
            DispatchStatus::Executed
        } else {
            DispatchStatus::NotFound
        }
    }

    /// Dispatch an argument vector against a nested command table.
    ///
    /// Callable from inside a handler, with the handler's own argument tail
    /// as `argv`: `argv[0]` names the subcommand and the matched handler
    /// receives the arguments after it. Tables can nest to any depth this
    /// way. Parse state, the line buffer, and the handoff flag are not
    /// touched, so this is usable at any time, pending line or not.
    ///
    /// Returns `true` when an entry matched and its handler ran, `false` on
    /// an empty vector or when the scan finds no match.
    pub fn process_subcommand(
        &self,
        table: &[Command<S, T>],
        argv: &[&str],
        stream: &mut S,
    ) -> bool {
        let name = match argv.first() {
            Some(name) => *name,
            None => return false,
        };
        for command in table {
            if command.name == name {
                (command.handler)(argv.len() - 1, &argv[1..], stream, self, &command.data);
                return true;
            }
        }
        false
    }

    /// Seal the open argument and open the next slot.
    ///
    /// Returns `false` when the table is full afterwards; the caller then
    /// treats subsequent delimiter bytes as data for the final argument.
    fn finish_argument(&mut self) -> bool {
        let len = self.buffer.head() - self.open_start;
        if self.args.push(Token { start: self.open_start, len }).is_err() {
            return false;
        }
        if self.args.is_full() {
            return false;
        }
        // The terminator may not fit in a full buffer; the next slot starts
        // at the cursor either way.
        self.buffer.record(0);
        self.open_start = self.buffer.head();
        true
    }

    /// Terminate the line on a carriage return.
    ///
    /// Seals the argument in progress, rewinds the cursor for the next line,
    /// and raises the handoff flag. The argument table stays untouched until
    /// the consumer resets it.
    fn finish_line(&mut self) {
        let lost = usize::from(self.buffer.terminate());
        let head = self.buffer.head();
        if self.args.is_full() {
            // Everything recorded since the final slot was sealed belongs to
            // the overflow argument, minus the byte the terminator may have
            // overwritten.
            if let Some(last) = self.args.last_mut() {
                last.len = (head - last.start).saturating_sub(lost);
            }
        } else if self.open_start < head {
            let len = (head - self.open_start).saturating_sub(lost);
            let _ = self.args.push(Token { start: self.open_start, len });
        } else if lost == 1 {
            // The overwritten byte belonged to the argument sealed last.
            if let Some(last) = self.args.last_mut() {
                last.len = last.len.saturating_sub(1);
            }
        }
        self.buffer.rewind();
        self.ignore_spaces = false;
        self.cmd_ready = true;
    }

    /// Reset to a blank line: argument table cleared, open slot back at the
    /// buffer start, quote state dropped, handoff flag lowered.
    fn input_reset(&mut self) {
        self.args.clear();
        self.open_start = 0;
        self.buffer.rewind();
        self.ignore_spaces = false;
        self.cmd_ready = false;
    }

    /// A finalized argument as a string slice.
    ///
    /// Input is byte-oriented ASCII; a token that is not valid UTF-8
    /// degrades to the empty string.
    fn arg_str(&self, token: &Token) -> &str {
        str::from_utf8(self.buffer.token(token.start, token.len)).unwrap_or("")
    }
}
