use std::sync::OnceLock;

use regex::Regex;

use crate::error::HelperError;

/// Memory map constants for one target platform. The listing carries
/// load-time (pre-relocation) addresses; the debugger needs the address the
/// instruction occupies after the image moves into its execution mapping.
/// Both bases are injected configuration, not properties of this module.
#[derive(Debug, Clone, Copy)]
pub struct MemoryMap {
    pub load_base: u64,
    pub exec_base: u64,
}

impl MemoryMap {
    /// Map a load-time address to its execution-time address:
    /// `addr - load_base + exec_base`.
    ///
    /// Addresses on the target are wider than 32 bits, so all arithmetic is
    /// u64. An address below the load base would wrap; fail instead.
    pub fn translate(&self, address: u64) -> Result<u64, HelperError> {
        let offset = address
            .checked_sub(self.load_base)
            .ok_or(HelperError::AddressBelowLoadBase {
                address,
                load_base: self.load_base,
            })?;
        Ok(self.exec_base + offset)
    }
}

fn hex_field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0[xX])?[0-9a-fA-F]+$").unwrap())
}

/// Parse the leading address field of a listing line as base-16. Objdump
/// emits bare hex digits; a conventional `0x` prefix is accepted too.
pub fn parse_address_field(field: &str, raw_line: &str) -> Result<u64, HelperError> {
    let malformed = || HelperError::MalformedAddress {
        field: field.to_string(),
        line: raw_line.to_string(),
    };

    if !hex_field_re().is_match(field) {
        return Err(malformed());
    }
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    u64::from_str_radix(digits, 16).map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The qemu-virt-rv64 map the reference build uses.
    const MAP: MemoryMap = MemoryMap {
        load_base: 0x20_0000_0000,
        exec_base: 0x8000_0000,
    };

    #[test]
    fn parses_bare_hex() {
        assert_eq!(
            parse_address_field("2000008000abcd", "").unwrap(),
            0x2000008000abcd
        );
    }

    #[test]
    fn parses_prefixed_hex() {
        assert_eq!(parse_address_field("0x80000000", "").unwrap(), 0x80000000);
        assert_eq!(parse_address_field("0X80000000", "").unwrap(), 0x80000000);
    }

    #[test]
    fn rejects_non_hex() {
        assert!(parse_address_field("80zz0000", "line").is_err());
        assert!(parse_address_field("", "line").is_err());
        assert!(parse_address_field("0x", "line").is_err());
        assert!(parse_address_field(" 8000", "line").is_err());
    }

    #[test]
    fn rejects_overflowing_field() {
        assert!(parse_address_field("1ffffffffffffffff", "line").is_err());
    }

    #[test]
    fn translates_reference_address() {
        // 0x2000008000abcd - 0x2000000000 + 0x80000000
        assert_eq!(MAP.translate(0x2000008000abcd).unwrap(), 0x10000abcd);
    }

    #[test]
    fn translates_load_base_to_exec_base() {
        assert_eq!(MAP.translate(0x20_0000_0000).unwrap(), 0x8000_0000);
    }

    #[test]
    fn address_below_load_base_fails() {
        let err = MAP.translate(0x1000).unwrap_err();
        assert!(matches!(
            err,
            HelperError::AddressBelowLoadBase { address: 0x1000, .. }
        ));
    }
}
