//! # libcli - Embedded Command Line Toolkit
//!
//! A lightweight, line-oriented command interpreter for embedded devices.
//! Bytes arriving on a character stream (UART, USB CDC, a TCP socket) are
//! consumed incrementally, tokenized into a shell-like argument vector inside
//! a caller-supplied buffer, and dispatched to a registered handler by exact
//! command-name match. This library is designed for firmware and supports
//! `no_std` environments.
//!
//! ## Features
//!
//! ### Command Interface
//! - **Incremental tokenizer**: quote-aware, byte-by-byte parsing that can be
//!   resumed across arbitrarily small reads
//! - **Two-phase dispatch**: parsing is safe to drive from an interrupt
//!   handler, execution runs in normal task context
//! - **Subcommand tables**: handlers can delegate to nested command tables
//!
//! ### Resource Model
//! - Zero allocation on the hot path; all storage is caller-supplied and
//!   reused line after line
//! - Strict capacity enforcement: overlong lines truncate, they never overrun
//! - Bounded argument count with graceful degradation beyond the limit
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Basic Command Interface Example
//!
//! ```rust
//! use libcli::cli::{Command, CommandInterface, DispatchStatus, InputStatus};
//! use libcli::stream::{Read, Stream, Write};
//! # struct Uart { rx: Vec<u8>, pos: usize }
//! # impl Read for Uart {
//! #     fn available(&self) -> usize { self.rx.len() - self.pos }
//! #     fn read_byte(&mut self) -> Option<u8> {
//! #         let byte = self.rx.get(self.pos).copied();
//! #         if byte.is_some() { self.pos += 1; }
//! #         byte
//! #     }
//! # }
//! # impl Write for Uart {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Stream for Uart {}
//!
//! fn reboot(
//!     _argc: usize,
//!     _argv: &[&str],
//!     stream: &mut Uart,
//!     _cli: &CommandInterface<'_, Uart, ()>,
//!     _data: &(),
//! ) -> bool {
//!     let _ = stream.write(b"rebooting\r\n");
//!     true
//! }
//!
//! static COMMANDS: [Command<Uart, ()>; 1] = [Command {
//!     name: "reboot",
//!     handler: reboot,
//!     data: (),
//! }];
//!
//! let mut uart = Uart { rx: b"reboot now\r".to_vec(), pos: 0 };
//! let mut line_buf = [0u8; 64];
//! let mut cli = CommandInterface::new(&mut line_buf, &COMMANDS).unwrap();
//!
//! // Producer side, e.g. from a UART interrupt:
//! assert_eq!(cli.process_input(&mut uart), InputStatus::LineReady);
//!
//! // Consumer side, from the main loop:
//! assert_eq!(cli.execute_input(&mut uart), DispatchStatus::Executed);
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices exposing serial consoles
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Byte-stream abstraction consumed by the command interface.
///
/// This module contains the traits a transport (UART driver, socket wrapper,
/// loopback for tests) implements so the interpreter can drain input from it
/// and handlers can print diagnostics to it.
pub mod stream;

/// Line-oriented command interface for embedded devices.
///
/// Contains the incremental tokenizer, the line handoff between interrupt and
/// task context, and the command/subcommand dispatchers.
pub mod cli;
