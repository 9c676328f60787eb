//! Registry loading and dataset output against the filesystem.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8Path;
use example_data::{
    ExampleUserSeed, RegistryError, SeedRegistry, generate_example_users, write_dataset,
};
use rstest::rstest;
use test_support::{open_parent_dir, unique_temp_path};

const VALID_JSON: &str = r#"{
    "version": 1,
    "organizations": ["Lendsqr", "Irorun"],
    "seeds": [
        {"name": "lendsqr-demo", "seed": 2026, "userCount": 12},
        {"name": "tiny", "seed": 1234, "userCount": 3}
    ]
}"#;

fn bundled_registry_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../console/fixtures/example-data/seeds.json")
}

#[test]
fn loads_registry_from_file() {
    let path = unique_temp_path("registry", "seeds.json").expect("temp path");
    let dir = open_parent_dir(&path).expect("open dir");
    dir.write("seeds.json", VALID_JSON).expect("write registry");

    let registry = SeedRegistry::from_file(path.as_std_path()).expect("load registry");
    assert_eq!(registry.seeds().len(), 2);
    assert_eq!(registry.organizations(), ["Lendsqr", "Irorun"]);
}

#[test]
fn missing_file_reports_io_error() {
    let result = SeedRegistry::from_file(std::path::Path::new("does/not/exist.json"));
    assert!(matches!(result, Err(RegistryError::IoError { .. })));
}

#[test]
fn bundled_registry_has_the_demo_seed() {
    let registry = SeedRegistry::from_file(&bundled_registry_path()).expect("bundled registry");
    let seed = registry.find_seed("lendsqr-demo").expect("demo seed");

    assert_eq!(seed.user_count(), 520);
    assert_eq!(
        registry.organizations(),
        ["Lendsqr", "Irorun", "Lendstar", "Lendbox", "Paylater"]
    );
}

#[rstest]
#[case("tiny", 3)]
#[case("lendsqr-demo", 12)]
fn written_dataset_reads_back(#[case] seed_name: &str, #[case] expected: usize) {
    let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
    let seed = registry.find_seed(seed_name).expect("seed found");
    let users = generate_example_users(&registry, seed).expect("generated");

    let path = unique_temp_path("dataset", "users.json").expect("temp path");
    let dir = open_parent_dir(&path).expect("open dir");
    write_dataset(&dir, Utf8Path::new("users.json"), &users).expect("write dataset");

    let contents = dir.read_to_string("users.json").expect("read dataset");
    assert!(contents.ends_with('\n'));
    let parsed: Vec<ExampleUserSeed> = serde_json::from_str(&contents).expect("parse dataset");
    assert_eq!(parsed.len(), expected);
    assert_eq!(parsed, users);
}
