use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::debug_println;
use crate::error::HelperError;
use crate::listing::find_marker_line;
use crate::render::{format_break_address, render_template, write_output};
use crate::translate::{parse_address_field, MemoryMap};

/// One invocation's worth of configuration: the three files plus the
/// platform constants. Everything here is injected at the boundary; the
/// stages below carry no literals of their own.
#[derive(Debug, Clone)]
pub struct Job {
    pub listing: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub marker: String,
    pub placeholder: String,
    pub memory_map: MemoryMap,
}

/// Run the whole pipeline: locate the marker, translate its address, render
/// the template, write the command file. Strictly sequential; any failure
/// stops before the output is touched.
pub fn generate(job: &Job) -> Result<()> {
    let listing = File::open(&job.listing)
        .with_context(|| format!("can't open listing {}", job.listing.display()))?;
    let found = find_marker_line(listing, &job.marker)
        .with_context(|| format!("error reading listing {}", job.listing.display()))?
        .ok_or_else(|| HelperError::MarkerNotFound {
            marker: job.marker.clone(),
            path: job.listing.display().to_string(),
        })?;

    let field = found.trimmed_address_field()?;
    let address = parse_address_field(field, &found.raw_line)?;
    let translated = job.memory_map.translate(address)?;
    debug_println!(
        "marker at {:#x}, execution-time address {:#x}",
        address,
        translated
    );

    // The listing is streamed above; the template is small and bounded, so
    // bulk load and replace is enough here.
    let template = fs::read_to_string(&job.template)
        .with_context(|| format!("can't read template {}", job.template.display()))?;
    let rendered =
        render_template(&template, &job.placeholder, &format_break_address(translated));

    write_output(&job.output, &rendered)
        .with_context(|| format!("can't write output {}", job.output.display()))?;
    debug_println!("wrote {}", job.output.display());
    Ok(())
}
