mod fetch;
mod list;
mod sort;
mod validate;

pub use fetch::fetch_command;
pub use list::list_command;
pub use sort::sort_command;
pub use validate::validate_command;

use anyhow::Result;
use yacar::loader::RegistryLoader;

/// The chains a command should work on: the requested ones, or every chain under the root
fn select_chains(loader: &RegistryLoader, requested: &[String]) -> Result<Vec<String>> {
    if !requested.is_empty() {
        return Ok(requested.to_vec());
    }

    let chains = loader.discover_chains()?;
    if chains.is_empty() {
        anyhow::bail!("No chain directories found in {}", loader.root().display());
    }
    Ok(chains)
}
