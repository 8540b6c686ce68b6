//! # rxdlib
//!
//! An `xxd`-compatible hex dump formatting library.
//!
//! ## Overview
//!
//! rxdlib turns a byte buffer into the classic fixed-width dump layout:
//! an 8-digit offset column, grouped hexadecimal octet values, and a
//! printable-character sidebar. Output is byte-for-byte compatible with
//! `xxd -c <cols> -g <groupsize>` for every column/group combination.
//!
//! The library operates on raw octets end-to-end. Input is never decoded
//! as text, and output sinks take bytes, so arbitrary binary input
//! (including invalid UTF-8) can never fail to render.
//!
//! ## Features
//!
//! - **Byte-exact layout**: the sidebar starts at the same column on
//!   every row, short final row included
//! - **Configurable layout**: octets per row (up to 256), group size,
//!   upper- or lower-case hex
//! - **Sink-agnostic**: write to any `io::Write`, or capture in memory
//! - **File and stdin input**: `-` selects standard input
//!
//! ## Example
//!
//! ```rust
//! use rxdlib::{dump_to_vec, DumpOptions};
//!
//! let out = dump_to_vec(b"\x00A\nB", &DumpOptions::new().cols(4)).unwrap();
//! assert_eq!(out, b"00000000: 0041 0a42  .A.B\n".to_vec());
//! ```

pub mod dump;
pub mod error;
pub mod input;
pub mod options;

pub use dump::{data_width, dump, dump_source, dump_to_vec};
pub use error::RxdError;
pub use input::{read_source, STDIN_PATH};
pub use options::{DumpOptions, DEFAULT_COLS, DEFAULT_GROUP_SIZE, MAX_COLS};

/// Result type for rxdlib operations
pub type Result<T> = std::result::Result<T, RxdError>;
