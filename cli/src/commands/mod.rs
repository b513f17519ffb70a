pub mod aggregate;
pub mod compare;
pub mod districts;
pub mod years;

use std::path::Path;

use anyhow::{bail, Result};

/// Refuse to clobber an existing file unless `force` is set.
pub(crate) fn check_output(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(())
}
