use std::io::Write;
use std::path::Path;

/// Render the translated address the way gdb's breakpoint/location syntax
/// wants it: the `*` indirection sigil followed by a lowercase `0x` hex
/// literal, e.g. `*0x10000abcd`.
pub fn format_break_address(address: u64) -> String {
    format!("*{:#x}", address)
}

/// Replace every occurrence of `placeholder` in the template with `value`.
/// A template with zero occurrences passes through byte-identical; that is
/// accepted behavior, not an error.
pub fn render_template(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, value)
}

/// Write the rendered document, overwriting any existing destination.
///
/// The content goes to a temp file in the destination directory first and is
/// renamed into place, so a failure partway through a write never leaves a
/// truncated or corrupt command file for the build to pick up.
pub fn write_output(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "[before_virtual_address_space_entry]";

    #[test]
    fn formats_gdb_address_expression() {
        assert_eq!(format_break_address(0x10000abcd), "*0x10000abcd");
    }

    #[test]
    fn replaces_every_occurrence() {
        let template = "break [before_virtual_address_space_entry]\n\
                        tbreak [before_virtual_address_space_entry]\n\
                        continue\n";
        let out = render_template(template, PLACEHOLDER, "*0x10000abcd");
        assert_eq!(out.matches("*0x10000abcd").count(), 2);
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn replaces_repeats_within_one_line() {
        let template = "x [before_virtual_address_space_entry] [before_virtual_address_space_entry]\n";
        let out = render_template(template, PLACEHOLDER, "*0x80000000");
        assert_eq!(out, "x *0x80000000 *0x80000000\n");
    }

    #[test]
    fn template_without_placeholder_passes_through() {
        let template = "target remote :1234\ncontinue\n";
        let out = render_template(template, PLACEHOLDER, "*0x80000000");
        assert_eq!(out, template);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gdbcommand.txt");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();
        write_output(&path, "break *0x80000000\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "break *0x80000000\n"
        );
    }
}
