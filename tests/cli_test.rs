#![cfg(feature = "cli")]

use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

fn bookdeal() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bookdeal"))
}

#[test]
fn test_invalid_seed_exits_with_code_1() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let seed_path = temp_dir.path().join("bad.toml");
    std::fs::write(
        &seed_path,
        r#"
[[authors]]
name = "Jane Doe"

[[books]]
title = "Moby Dick"

[[contracts]]
author = "Jane Doe"
book = "Moby Dick"
date = "01/01/2001"
royalties = -3
"#,
    )?;

    let output = bookdeal()
        .arg("--seed")
        .arg(&seed_path)
        .arg("royalties")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("contracts.royalties"));
    Ok(())
}

#[test]
fn test_missing_seed_exits_with_code_1() -> Result<()> {
    let output = bookdeal()
        .args(["--seed", "/definitely/not/here.toml", "export"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_royalties_on_sample_data() -> Result<()> {
    let output = bookdeal().args(["--format", "csv", "royalties"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "author,royalties\nName 1,60\nName 2,40\n"
    );
    Ok(())
}

#[test]
fn test_unknown_author_fails() -> Result<()> {
    let output = bookdeal().args(["books-of", "Nobody"]).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No such author"));
    Ok(())
}
