//! Row formatting: turn a byte buffer into `xxd`-style dump lines.
//!
//! Every row of one invocation shares the same layout:
//!
//! ```text
//! 00000000: 6c6f 7265 6d20 6970 7375 6d20 646f 6c6f  lorem ipsum dolo
//! |offset-| |------------- hex field -------------|  |-- sidebar ---|
//! ```
//!
//! The offset field is always 10 characters (8 zero-padded lower-case
//! hex digits plus `: `). The hex field renders the row's octets in
//! groups of `group_size`, one space after each group, and is padded so
//! that the sidebar starts at the same column on every row, including a
//! short final row.

use std::io::Write;
use std::path::Path;

use crate::input::read_source;
use crate::options::DumpOptions;
use crate::Result;

/// Width of the offset field: 8 hex digits plus `: `.
const OFFSET_WIDTH: usize = 10;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Width in characters of the offset+hex portion of a full row:
/// `10 + cols * 2 + ceil(cols / group_size)`.
///
/// Short rows are padded to this width, so the sidebar of every row
/// starts at column `data_width(cols, group_size) + 1`.
pub fn data_width(cols: usize, group_size: usize) -> usize {
    OFFSET_WIDTH + cols * 2 + cols.div_ceil(group_size)
}

/// Substitution applied to a byte before it enters the sidebar.
///
/// NUL and LF become `.`; every other byte passes through raw, control
/// characters included. The sink takes bytes, not text, so there is no
/// byte value that fails to render.
fn sidebar_byte(byte: u8) -> u8 {
    match byte {
        0x00 | 0x0a => b'.',
        other => other,
    }
}

/// Write a dump of `data` to `out`, one newline-terminated row per
/// `cols`-octet slice of the input.
///
/// Options are run through [`DumpOptions::normalized`] first, so
/// over-range values are capped rather than rejected. A zero column
/// count or group size is reported as an error before any output is
/// written. Empty input produces no rows.
///
/// # Example
///
/// ```rust
/// use rxdlib::{dump, DumpOptions};
///
/// let mut out = Vec::new();
/// dump(b"\x00A\nB", &DumpOptions::new().cols(4), &mut out).unwrap();
/// assert_eq!(out, b"00000000: 0041 0a42  .A.B\n".to_vec());
/// ```
pub fn dump<W: Write>(data: &[u8], options: &DumpOptions, out: &mut W) -> Result<()> {
    let opts = options.normalized();
    opts.validate()?;

    let width = data_width(opts.cols, opts.group_size);
    let mut line = Vec::with_capacity(width + opts.cols + 2);

    for (index, row) in data.chunks(opts.cols).enumerate() {
        line.clear();
        render_row(&mut line, index * opts.cols, row, &opts, width);
        out.write_all(&line)?;
    }

    Ok(())
}

/// Dump to an in-memory buffer.
///
/// The sidebar passes non-ASCII bytes through raw, so the result is a
/// byte vector rather than a `String`.
pub fn dump_to_vec(data: &[u8], options: &DumpOptions) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    dump(data, options, &mut out)?;
    Ok(out)
}

/// Read `path` (`-` for standard input) and dump its contents to `out`.
pub fn dump_source<W: Write>(
    path: impl AsRef<Path>,
    options: &DumpOptions,
    out: &mut W,
) -> Result<()> {
    let data = read_source(path)?;
    dump(&data, options, out)
}

/// Render one complete row into `line`.
///
/// `width` must be `data_width(opts.cols, opts.group_size)`; `row` holds
/// at most `opts.cols` octets.
fn render_row(line: &mut Vec<u8>, offset: usize, row: &[u8], opts: &DumpOptions, width: usize) {
    let digits = if opts.uppercase { HEX_UPPER } else { HEX_LOWER };

    // Offset field: always lower-case, regardless of the case mode.
    line.extend_from_slice(format!("{:08x}: ", offset).as_bytes());

    for group in row.chunks(opts.group_size) {
        for &byte in group {
            line.push(digits[(byte >> 4) as usize]);
            line.push(digits[(byte & 0x0f) as usize]);
        }
        line.push(b' ');
    }

    // A short final row renders fewer octets and group separators than a
    // full one; pad out to the full-row width so the sidebar column
    // stays fixed.
    line.resize(width, b' ');

    line.push(b' ');
    line.extend(row.iter().map(|&b| sidebar_byte(b)));
    line.push(b'\n');
}
