use anyhow::Result;
use colored::Colorize;
use yacar::config::Settings;
use yacar::loader::RegistryLoader;
use yacar::ordering::OrderingEngine;

use super::select_chains;

pub fn sort_command(settings: &Settings, chains: &[String], check: bool) -> Result<()> {
    let loader = RegistryLoader::new(&settings.root);
    let chains = select_chains(&loader, chains)?;
    let ordering = OrderingEngine::new(settings.ordering_options())?;

    let mut unsorted = 0;
    for chain in &chains {
        let registry = loader.load_chain(chain)?;
        let kinds = registry.out_of_order(&ordering);

        if kinds.is_empty() {
            println!("  {} {chain}", "✓".green());
            continue;
        }

        if check {
            for kind in &kinds {
                println!("  {} {chain}/{}", "✗".red(), kind.file_name());
            }
            unsorted += kinds.len();
        } else {
            let sorted = registry.canonicalize(&ordering);
            loader.write_kinds(&sorted, &kinds)?;
            for kind in &kinds {
                println!("  {} {chain}/{}", "sorted".yellow(), kind.file_name());
            }
        }
    }

    if unsorted > 0 {
        anyhow::bail!("{unsorted} files are not in canonical order; run `yacar sort` to fix them");
    }

    Ok(())
}
