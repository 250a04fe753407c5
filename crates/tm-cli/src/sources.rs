use std::fs;
use std::io;

use tm_loader::{load_from_file, load_from_resource};

/// Embedded prefix list used when no `--prefixes` file is given.
pub const DEFAULT_RESOURCE: &str = "sample_prefixes.txt";

pub fn load_prefixes(path: Option<&str>) -> Result<Vec<String>, String> {
    let loaded = match path {
        Some(path) => load_from_file(path),
        None => load_from_resource(DEFAULT_RESOURCE),
    };
    loaded.map_err(|e| format!("Failed to load prefixes: {}", e))
}

/// Positional inputs win; otherwise every line of `file` is one input.
///
/// Lines are kept verbatim (no trimming, empty lines included) so that the
/// report shows exactly what was queried.
pub fn load_inputs(args: Vec<String>, file: Option<&str>) -> Result<Vec<String>, String> {
    if !args.is_empty() {
        return Ok(args);
    }

    let path = file.ok_or_else(|| "No inputs given: pass INPUTS or --inputs FILE".to_string())?;
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            log::warn!("Input file not found: {}", path);
            format!("Input file not found: {}", path)
        } else {
            format!("Failed to read '{}': {}", path, e)
        }
    })?;

    let inputs: Vec<String> = content.lines().map(str::to_string).collect();
    log::info!("Loaded {} inputs from {}", inputs.len(), path);
    Ok(inputs)
}
