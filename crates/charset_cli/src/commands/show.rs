//! Show command implementation

use std::io::Write;

use charset_core::Catalog;
use tracing::debug;

use crate::Result;

/// Run the show command
pub fn run(name: &str, out: &mut impl Write) -> Result<()> {
    let set = Catalog::builtin().lookup(name)?;
    debug!(charset = %set.id(), size = set.len(), "Showing catalog entry");

    writeln!(out, "{}", set.text())?;
    Ok(())
}
