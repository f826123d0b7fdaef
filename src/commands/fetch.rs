use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yacar::config::Settings;
use yacar::fetch::RemoteRegistry;
use yacar::loader::to_json;
use yacar::models::{Account, Asset, Binary, Contract, Entity, Pool, RecordKind};
use yacar::validation::{Validate, ValidationContext, Validator};

pub fn fetch_command(settings: &Settings, chain: &str, kind: RecordKind, validate: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let remote = RemoteRegistry::new(settings.base_url.as_str())?;
    let validator = Validator::new(settings.validation_options());
    let validator = validate.then_some(&validator);

    let json = runtime.block_on(async {
        match kind {
            RecordKind::Account => fetch_one::<Account>(&remote, chain, validator).await,
            RecordKind::Asset => fetch_one::<Asset>(&remote, chain, validator).await,
            RecordKind::Binary => fetch_one::<Binary>(&remote, chain, validator).await,
            RecordKind::Contract => fetch_one::<Contract>(&remote, chain, validator).await,
            RecordKind::Entity => fetch_one::<Entity>(&remote, chain, validator).await,
            RecordKind::Pool => fetch_one::<Pool>(&remote, chain, validator).await,
        }
    })?;

    print!("{json}");
    Ok(())
}

async fn fetch_one<R>(
    remote: &RemoteRegistry,
    chain: &str,
    validator: Option<&Validator>,
) -> Result<String>
where
    R: Validate + DeserializeOwned + Serialize,
{
    let batch: Vec<R> = remote
        .fetch_batch(chain)
        .await
        .with_context(|| format!("Failed to fetch {} records for {chain}", R::KIND))?;

    if let Some(validator) = validator
        && let Err(err) = validator.validate(&batch, &ValidationContext::new())
    {
        eprintln!("{:?}", miette::Report::new(err));
        anyhow::bail!("Fetched {} batch for {chain} failed validation", R::KIND);
    }

    Ok(to_json(&batch)?)
}
