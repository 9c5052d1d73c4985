use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HENCH: &str = r#"[{
    "id": 351, "firstname": "Philip S.", "surname": "Hench",
    "born": "1896-02-28", "died": "1965-03-30",
    "borncountry": "USA", "borncountrycode": "US", "borncity": "Pittsburgh PA",
    "diedcountry": "Jamaica", "diedcountrycode": "JM", "diedcity": "Ocho Rios",
    "gender": "male", "year": 1950, "category": "Medicine",
    "name": "Mayo Clinic", "city": "Rochester MN", "country": "USA",
    "geo_point_2d": {"lon": -112.4943339159, "lat": 45.6875333395}
}, {"year": "not a year"}]"#;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("laureates").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nobel laureate importer"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("laureates").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_import_then_query() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("laureates.json");
    std::fs::write(&data, HENCH).unwrap();
    let db = dir.path().join("nobel.db");

    Command::cargo_bin("laureates")
        .unwrap()
        .arg("--db")
        .arg(&db)
        .arg("import")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"records_imported\": 1"));

    Command::cargo_bin("laureates")
        .unwrap()
        .arg("countries")
        .env("LAUREATES_DB_PATH", &db)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jamaica (JM)")
                .and(predicate::str::contains("United States (US)")),
        );

    Command::cargo_bin("laureates")
        .unwrap()
        .args(["--db"])
        .arg(&db)
        .arg("winners")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hench"));
}

#[test]
fn test_import_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("laureates")
        .unwrap()
        .arg("--db")
        .arg(dir.path().join("x.db"))
        .arg("import")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure();
}
