//! Integration tests for the painel binary
//!
//! Drives the compiled binary against local sheet files. Every test gets
//! its own config directory so nothing leaks from the developer's setup.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SHEET: &str = "mes,despesas,a_receber,recebido,saldo,restante\n\
                     Jan,R$ 100,00,50,00,200,00,150,00,0,00\n\
                     Fev,300,150,150,0,50\n";

const SHEET_WITH_BLANK_MONTH: &str = "mes,despesas,a_receber,recebido,saldo,restante\n\
                                      Jan,1,2,3,4,5\n\
                                      ,9,9,9,9,9\n\
                                      Fev,6,7,8,9,10\n";

const SHEET_MISSING_SALDO: &str = "mes,despesas,a_receber,recebido,restante\n\
                                   Jan,1,2,3,4\n";

fn sheet_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

/// Binary command with an isolated config directory
fn painel(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("painel").unwrap();
    cmd.env("PAINEL_CLI_DATA_DIR", config_dir.path());
    cmd.env_remove("PAINEL_SHEET_URL");
    cmd
}

#[test]
fn show_renders_latest_month_by_default() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET);

    painel(&config)
        .args(["show", "--file"])
        .arg(sheet.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resumo do mês • Fev"))
        .stdout(predicate::str::contains("Receita Total"))
        .stdout(predicate::str::contains("Alertas"))
        .stdout(predicate::str::contains("Atualizado:"));
}

#[test]
fn show_renders_a_requested_month() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET);

    painel(&config)
        .args(["show", "--month", "Jan", "--file"])
        .arg(sheet.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resumo do mês • Jan"));
}

#[test]
fn show_fails_for_an_unknown_month() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET);

    painel(&config)
        .args(["show", "--month", "Dez", "--file"])
        .arg(sheet.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month not found: Dez"));
}

#[test]
fn show_reports_missing_columns_by_name() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET_MISSING_SALDO);

    painel(&config)
        .args(["show", "--file"])
        .arg(sheet.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("saldo"));
}

#[test]
fn show_without_any_source_points_at_init() {
    let config = TempDir::new().unwrap();

    painel(&config)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("painel init"));
}

#[test]
fn show_emits_json_when_asked() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET);

    let output = painel(&config)
        .args(["show", "--month", "Fev", "--format", "json", "--file"])
        .arg(sheet.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["month"], "Fev");
    assert_eq!(json["expenses"], 30_000);
    assert_eq!(json["revenue_total"], 30_000);
    assert_eq!(json["alerts"].as_array().unwrap().len(), 3);
}

#[test]
fn months_lists_every_month_in_sheet_order() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET);

    painel(&config)
        .args(["months", "--file"])
        .arg(sheet.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan"))
        .stdout(predicate::str::contains("Fev"))
        .stdout(predicate::str::contains("2 month(s)"));
}

#[test]
fn months_excludes_rows_with_blank_month_labels() {
    let config = TempDir::new().unwrap();
    let sheet = sheet_file(SHEET_WITH_BLANK_MONTH);

    painel(&config)
        .args(["months", "--file"])
        .arg(sheet.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 month(s)"));
}

#[test]
fn init_stores_the_sheet_link() {
    let config = TempDir::new().unwrap();

    painel(&config)
        .args(["init", "--url", "https://example.com/pub?output=csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheet link saved"));

    painel(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/pub?output=csv"));
}

#[test]
fn config_without_init_says_so() {
    let config = TempDir::new().unwrap();

    painel(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}
