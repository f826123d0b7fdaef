use anyhow::Result;
use yacar::config::Settings;
use yacar::loader::RegistryLoader;
use yacar::models::RecordKind;

pub fn list_command(settings: &Settings) -> Result<()> {
    let loader = RegistryLoader::new(&settings.root);
    let chains = loader.discover_chains()?;

    println!("Registry: {}\n", settings.root.display());

    if chains.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for chain in &chains {
        let registry = loader.load_chain(chain)?;
        println!("{chain}:");
        for kind in RecordKind::ALL {
            println!("  {:<10} {}", kind.as_str(), registry.len(kind));
        }
    }

    Ok(())
}
