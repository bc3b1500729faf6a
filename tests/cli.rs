use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").expect("ledger binary should build");
    cmd.env("LEDGER_CLI_DATA_DIR", dir.path());
    cmd
}

#[test]
fn test_interactive_session_persists_and_reports() {
    let dir = TempDir::new().unwrap();

    let script = "\
1\n2024-01-15\nExpense\nFood\n1200\ngroceries\n\
1\n2024-01-31\nExpense\nFood\n900.00\ntakeaway\n\
1\n2024-02-01\nIncome\nSalary\n50000\nFebruary pay\n\
3\n4\n2024-01\n5\n";

    ledger(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added.").count(3))
        .stdout(predicate::str::contains("Total Income  : ₹50000.00"))
        .stdout(predicate::str::contains("Total Expense : ₹2100.00"))
        .stdout(predicate::str::contains(
            "  Food: ₹2100.00 ⚠️  Exceeded budget limit of ₹2000.00",
        ))
        .stdout(predicate::str::contains(
            "2024-01-31 | Expense | Food | ₹900.00 | takeaway",
        ))
        .stdout(predicate::str::contains("Exiting. Stay financially smart!"));

    let stored = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();
    assert_eq!(
        stored,
        "2024-01-15,Expense,Food,1200.00,groceries\n\
         2024-01-31,Expense,Food,900.00,takeaway\n\
         2024-02-01,Income,Salary,50000.00,February pay\n"
    );
}

#[test]
fn test_empty_ledger_session() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .write_stdin("2\n3\n4\n2024-01\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- All Transactions ---\n\n"))
        .stdout(predicate::str::contains("Total Income  : ₹0.00"))
        .stdout(predicate::str::contains("Savings       : ₹0.00"))
        .stdout(predicate::str::contains("No transactions found for this month."));

    assert!(!dir.path().join("transactions.txt").exists());
}

#[test]
fn test_invalid_choice_keeps_running() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .write_stdin("7\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Try again."));
}

#[test]
fn test_subcommands() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "2024-03-10", "expense", "Food", "2000"])
        .assert()
        .success()
        .stdout("Transaction added.\n");

    ledger(&dir)
        .args(["add", "2024-03-11", "Expense", "Food", "0.01", "--note", "gum"])
        .assert()
        .success();

    ledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-11 | Expense | Food | ₹0.01 | gum"));

    ledger(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exceeded budget limit of ₹2000.00"));

    ledger(&dir)
        .args(["filter", "2024-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found for this month."));
}

#[test]
fn test_add_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "2024-03-10", "Salary", "Work", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown transaction type"));
}

#[test]
fn test_malformed_ledger_fails_with_line_number() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("transactions.txt"),
        "2024-01-15,Expense,Food,10.00,ok\n2024-01-16,Expense,Food,oops,bad\n",
    )
    .unwrap();

    ledger(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at line 2"));
}

#[test]
fn test_skip_policy_from_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"malformed_records": "skip", "currency_symbol": "$"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("transactions.txt"),
        "2024-01-15,Expense,Food,10.00,ok\n2024-01-16,Expense,Food,oops,bad\n",
    )
    .unwrap();

    ledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15 | Expense | Food | $10.00 | ok"))
        .stdout(predicate::str::contains("oops").not());
}

#[test]
fn test_data_dir_flag() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env_remove("LEDGER_CLI_DATA_DIR")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ledger-cli at:"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_add_rejects_oversized_amount() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["add", "2024-03-10", "Expense", "Food", "90000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is too large"));

    assert!(!dir.path().join("transactions.txt").exists());
}

#[test]
fn test_older_file_with_stray_quote_lists_every_record() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("transactions.txt"),
        "2024-01-15,Expense,Food,10.000000,\"best\n2024-01-16,Expense,Food,20.000000,next\n",
    )
    .unwrap();

    ledger(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15 | Expense | Food | ₹10.00 | \"best\n"))
        .stdout(predicate::str::contains("2024-01-16 | Expense | Food | ₹20.00 | next\n"));
}
