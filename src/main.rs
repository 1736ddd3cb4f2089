//! Build-time helper: locate the marker instruction in a disassembly
//! listing, translate its load-time address into the execution-time
//! mapping, and substitute it into a gdb command template.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gdbcommand_gen::debug::set_debug;
use gdbcommand_gen::{generate, HelperError, Job, MemoryMap};

#[derive(Parser, Debug)]
#[command(
    name = "gdbcommand-gen",
    about = "Generate a gdb command file with the relocated kernel entry address"
)]
struct Cli {
    /// Disassembly listing to scan (objdump -d output)
    #[arg(long = "listing", default_value = "dreamos.asm")]
    listing: PathBuf,

    /// gdb command template containing the placeholder token
    #[arg(long = "template", default_value = "gdbcommand_template.txt")]
    template: PathBuf,

    /// Destination command file (overwritten on success)
    #[arg(short = 'o', long = "output", default_value = "gdbcommand.txt")]
    output: PathBuf,

    /// Instruction text identifying the jump out of the load address space
    #[arg(long = "marker", default_value = "jr\ts2")]
    marker: String,

    /// Placeholder token replaced throughout the template
    #[arg(
        long = "placeholder",
        default_value = "[before_virtual_address_space_entry]"
    )]
    placeholder: String,

    /// Base the image is loaded at, as it appears in the listing
    #[arg(long = "load-base", value_parser = parse_hex, default_value = "0x2000000000")]
    load_base: u64,

    /// Base of the execution-time (virtual) mapping
    #[arg(long = "exec-base", value_parser = parse_hex, default_value = "0x80000000")]
    exec_base: u64,

    /// Enable debug output
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value `{}`: {}", s, e))
}

impl Cli {
    fn into_job(self) -> Job {
        Job {
            listing: self.listing,
            template: self.template,
            output: self.output,
            marker: self.marker,
            placeholder: self.placeholder,
            memory_map: MemoryMap {
                load_base: self.load_base,
                exec_base: self.exec_base,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_debug(cli.debug);

    match generate(&cli.into_job()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gdbcommand-gen: {:#}", err);
            let code = err
                .downcast_ref::<HelperError>()
                .map(HelperError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
