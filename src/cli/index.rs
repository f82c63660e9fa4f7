//! Index command: build the manifest and write or print it.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::IndexArgs;
use crate::config::IndexerConfig;
use crate::index::build_manifest;
use crate::manifest::Manifest;
use crate::utils::plural_count;
use crate::{debug, log};

/// Run one indexing pass.
///
/// With `--dry` the manifest goes to `out` (stdout in `main`) and nothing
/// else is written there.
pub fn run_index(
    config: &IndexerConfig,
    args: &IndexArgs,
    out: &mut impl Write,
) -> Result<Manifest> {
    let paths = config.paths();
    debug!("index"; "public root {}", paths.public_root().display());
    debug!("index"; "assets root {}", paths.assets_root().display());

    let manifest = build_manifest(&paths, &config.index)?;
    if manifest.is_empty() {
        debug!(
            "index";
            "no .{} files under {}",
            config.index.extension,
            paths.assets_root().display()
        );
    }

    if args.dry {
        out.write_all(manifest.to_json()?.as_bytes())?;
        out.flush()?;
        return Ok(manifest);
    }

    manifest
        .write(paths.output())
        .with_context(|| format!("no manifest written to {}", paths.output().display()))?;

    log!(
        "index";
        "wrote {} to {}",
        plural_count(manifest.len(), "entry", "entries"),
        paths.output().display()
    );
    Ok(manifest)
}
