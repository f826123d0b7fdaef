use anyhow::Result;
use colored::Colorize;
use yacar::config::Settings;
use yacar::loader::RegistryLoader;
use yacar::validation::Validator;

use super::select_chains;

pub fn validate_command(settings: &Settings, chains: &[String]) -> Result<()> {
    println!("Validating registry: {}", settings.root.display());

    let loader = RegistryLoader::new(&settings.root);
    let chains = select_chains(&loader, chains)?;
    let validator = Validator::new(settings.validation_options());

    let mut failures = 0;
    for chain in &chains {
        let registry = loader.load_chain(chain)?;

        match registry.validate(&validator, settings.check_unused_entities) {
            Ok(()) => println!("  {} {chain}", "✓".green()),
            Err(err) => {
                println!("  {} {chain}", "✗".red());
                eprintln!("{:?}", miette::Report::new(err));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} chains failed validation", chains.len());
    }

    println!("\n✅ All validations passed!");
    Ok(())
}
