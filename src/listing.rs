use std::io::{BufRead, BufReader, Read};

use crate::debug_println;
use crate::error::HelperError;

/// The first listing line that contained the marker signature, split at the
/// first colon. Objdump-style listings format instruction lines as
/// `<hex-address>:\t<mnemonic>\t<operands>`, so everything before the colon
/// is the load-time address field.
#[derive(Debug)]
pub struct MarkerLine {
    pub address_field: String,
    pub raw_line: String,
}

/// Scan a disassembly listing for the first line containing `marker` as a
/// literal substring.
///
/// The listing may be large (a full kernel disassembly), so the scan streams
/// line by line and stops at the first match; remaining lines are never read.
/// Returns `Ok(None)` when the reader is exhausted without a match — the
/// caller decides how absence is surfaced.
pub fn find_marker_line<R: Read>(
    input: R,
    marker: &str,
) -> std::io::Result<Option<MarkerLine>> {
    let mut reader = BufReader::with_capacity(64 * 1024, input);
    let mut buf: Vec<u8> = Vec::with_capacity(8 * 1024);

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None); // EOF
        }

        // strip trailing CR/LF
        while buf
            .last()
            .map(|b| *b == b'\n' || *b == b'\r')
            .unwrap_or(false)
        {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf);
        let s: &str = line.as_ref();
        if !s.contains(marker) {
            continue;
        }

        debug_println!("marker line: {}", s);
        let address_field = match s.split_once(':') {
            Some((field, _rest)) => field.to_string(),
            // A marker line without the leading `addr:` field means the
            // listing is not in the expected format.
            None => String::new(),
        };
        return Ok(Some(MarkerLine {
            address_field,
            raw_line: s.to_string(),
        }));
    }
}

impl MarkerLine {
    /// The address field with surrounding whitespace removed, or a
    /// `MalformedAddress` error when the matched line had no colon at all.
    pub fn trimmed_address_field(&self) -> Result<&str, HelperError> {
        let field = self.address_field.trim();
        if field.is_empty() {
            return Err(HelperError::MalformedAddress {
                field: self.address_field.clone(),
                line: self.raw_line.clone(),
            });
        }
        Ok(field)
    }
}
