use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, STRINGS_FILE, stderr};

#[test]
fn test_config_file_sets_marker_and_include() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".trsyncrc.json",
        r#"{
            "marker": "Msg.get",
            "include": "*.groovy",
            "keyPrefix": "msg_",
            "keyLength": 6
        }"#,
    )?;
    test.write_file(STRINGS_FILE, "")?;
    test.write_file("src/App.groovy", r#"println Msg.get("Groovy string")"#)?;
    test.write_file("src/App.java", r#"Tr.tr("Java string")"#)?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(0));
    let content = test.read_file(STRINGS_FILE)?;
    let (key, value) = content
        .trim()
        .split_once(" = ")
        .expect("one entry should be written");
    assert_eq!(value, "Groovy string");
    assert!(key.starts_with("msg_"));
    assert_eq!(key.len(), "msg_".len() + 6);
    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("conf/trsync.json", r#"{ "include": "*.kt" }"#)?;
    test.write_file(STRINGS_FILE, "")?;
    test.write_file("src/Main.kt", r#"Tr.tr("From Kotlin")"#)?;

    let output = test.sync(&["--config", "conf/trsync.json"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_file(STRINGS_FILE)?.contains(" = From Kotlin\n"));
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trsyncrc.json", r#"{ "include": "[broken" }"#)?;
    let original = "\ns_AAAA = Hi\n";
    test.write_file(STRINGS_FILE, original)?;
    test.write_file("src/View.java", r#"Tr.tr("Hi")"#)?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Error:"));
    assert_eq!(test.read_file(STRINGS_FILE)?, original);
    Ok(())
}

#[test]
fn test_cli_flag_overrides_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trsyncrc.json", r#"{ "include": "*.groovy" }"#)?;
    test.write_file(STRINGS_FILE, "")?;
    test.write_file("src/View.java", r#"Tr.tr("Java string")"#)?;

    let output = test.sync(&["--glob", "*.java"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.read_file(STRINGS_FILE)?.contains(" = Java string\n"));
    Ok(())
}
