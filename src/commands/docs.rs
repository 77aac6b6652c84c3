//! Command: open the DFHack documentation.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::launcher::DocsTarget;
use crate::logging::Logger;

/// Run the docs command.
///
/// # Errors
///
/// Returns an error only if the session cannot be opened; launch failures
/// are reported as warnings.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let session = super::open_session(global, log)?;
    match session.open_docs() {
        DocsTarget::Local(path) => log.info(&format!("documentation: {}", path.display())),
        DocsTarget::Online => log.info(&format!(
            "documentation: {}",
            crate::launcher::DFHACK_DOCS_URL
        )),
    }
    Ok(())
}
