use super::*;
use crate::models::{Account, Entity};
use std::fs;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_discover_chains_skips_unrelated_and_hidden_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(&root.join("phoenix-1"), "account.json", "[]");
    write(&root.join("juno-1"), "pool.json", "[]");
    write(&root.join("docs"), "README.md", "# docs");
    write(&root.join(".github"), "asset.json", "[]");
    write(root, "entity.json", "[]");

    let chains = RegistryLoader::new(root).discover_chains().unwrap();
    assert_eq!(chains, vec!["juno-1".to_string(), "phoenix-1".to_string()]);
}

#[test]
fn test_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = RegistryLoader::new(temp_dir.path().join("nope")).discover_chains();
    assert!(matches!(result, Err(LoadError::MissingRoot(_))));
}

#[test]
fn test_load_chain_reads_present_files_and_defaults_missing_ones() {
    let temp_dir = TempDir::new().unwrap();
    let chain_dir = temp_dir.path().join("phoenix-1");
    write(
        &chain_dir,
        "account.json",
        r#"[{"id": "terra1dao", "entity": "Terra", "label": "DAO"}]"#,
    );
    write(&chain_dir, "entity.json", r#"[{"name": "Terra"}]"#);

    let registry = RegistryLoader::new(temp_dir.path())
        .load_chain("phoenix-1")
        .unwrap();

    assert_eq!(registry.chain, "phoenix-1");
    assert_eq!(registry.accounts.len(), 1);
    assert_eq!(registry.accounts[0].label, "DAO");
    assert_eq!(registry.entities[0].name, "Terra");
    assert!(registry.assets.is_empty());
    assert!(registry.pools.is_empty());
}

#[test]
fn test_load_unknown_chain_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = RegistryLoader::new(temp_dir.path()).load_chain("osmosis-1");
    assert!(matches!(result, Err(LoadError::UnknownChain { .. })));
}

#[test]
fn test_parse_error_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let chain_dir = temp_dir.path().join("phoenix-1");
    write(&chain_dir, "contract.json", r#"[{"id": "x", "lable": "typo"}]"#);

    let err = RegistryLoader::new(temp_dir.path())
        .load_chain("phoenix-1")
        .unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().contains("contract.json"));
}

#[test]
fn test_write_kinds_rewrites_only_requested_files() {
    let temp_dir = TempDir::new().unwrap();
    let chain_dir = temp_dir.path().join("phoenix-1");
    write(&chain_dir, "account.json", "[]");
    write(&chain_dir, "entity.json", "[ ]");

    let mut registry = ChainRegistry::new("phoenix-1");
    registry.accounts = vec![Account {
        id: "terra1dao".to_string(),
        entity: "Terra".to_string(),
        label: String::new(),
    }];
    registry.entities = vec![Entity {
        name: "Terra".to_string(),
        ..Default::default()
    }];

    let loader = RegistryLoader::new(temp_dir.path());
    loader
        .write_kinds(&registry, &[RecordKind::Account])
        .unwrap();

    let accounts = fs::read_to_string(chain_dir.join("account.json")).unwrap();
    assert_eq!(
        accounts,
        "[\n  {\n    \"id\": \"terra1dao\",\n    \"entity\": \"Terra\"\n  }\n]\n"
    );
    assert_eq!(
        fs::read_to_string(chain_dir.join("entity.json")).unwrap(),
        "[ ]"
    );
}

#[test]
fn test_to_json_of_empty_batch() {
    let empty: Vec<Account> = Vec::new();
    assert_eq!(to_json(&empty).unwrap(), "[]\n");
}
