use anyhow::Result;
use insta::{assert_snapshot, with_settings};
use pretty_assertions::assert_eq;
use regex::Regex;

use crate::{CliTest, STRINGS_FILE, stderr};

const VIEW: &str = r#"
package org.example.view;

class ChatView {
    void init() {
        title.setText(Tr.tr("Chats"));
        send.setText(Tr.tr("Send message"));
    }
}
"#;

fn key_shape() -> Regex {
    Regex::new(r"^s_[A-Z0-9]{4}$").unwrap()
}

/// Keys of a mapping file in file order.
fn keys_of(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim().to_string())
        .collect()
}

#[test]
fn test_sync_no_changes() -> Result<()> {
    let test = CliTest::new()?;
    let original = "\ns_AAAA = Chats\ns_BBBB = Send message\n";
    test.write_file(STRINGS_FILE, original)?;
    test.write_file("src/org/example/view/ChatView.java", VIEW)?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("no changes detected"));
    assert!(stderr(&output).contains("update successful"));
    assert_eq!(test.read_file(STRINGS_FILE)?, original);
    Ok(())
}

#[test]
fn test_sync_removes_unused_and_adds_new() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "\ns_AAAA = Old title\ns_BBBB = Chats\n")?;
    test.write_file("src/org/example/view/ChatView.java", VIEW)?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(0));
    let log = stderr(&output);
    assert!(log.contains(r#"removing unused string: "Old title""#));
    assert!(log.contains(r#"adding new string: "Send message""#));
    assert!(log.contains("update successful"));

    let content = test.read_file(STRINGS_FILE)?;
    let keys = keys_of(&content);
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0], "s_BBBB");
    assert!(key_shape().is_match(&keys[1]));

    assert!(content.starts_with('\n'));
    with_settings!({filters => vec![(r"s_[A-Z0-9]{4} = Send", "[KEY] = Send")]}, {
        assert_snapshot!(content.trim_start(), @r"
        s_BBBB = Chats
        [KEY] = Send message
        ");
    });
    Ok(())
}

#[test]
fn test_sync_keeps_order_of_existing_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "\ns_ZZZZ = Send message\ns_AAAA = Chats\n")?;
    test.write_file("src/org/example/view/ChatView.java", VIEW)?;
    test.write_file("src/org/example/Main.java", r#"log(Tr.tr("Starting"));"#)?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(0));
    let content = test.read_file(STRINGS_FILE)?;
    assert!(content.starts_with("\ns_ZZZZ = Send message\ns_AAAA = Chats\n"));
    assert!(content.ends_with(" = Starting\n"));
    Ok(())
}

#[test]
fn test_sync_missing_strings_file_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/View.java", VIEW)?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no strings file"));
    assert!(!test.root().join(STRINGS_FILE).exists());
    Ok(())
}

#[test]
fn test_sync_init_creates_strings_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/View.java", r#"Tr.tr("Hello")"#)?;

    let output = test.sync(&["--init"])?;

    assert_eq!(output.status.code(), Some(0));
    let content = test.read_file(STRINGS_FILE)?;
    let keys = keys_of(&content);
    assert_eq!(keys.len(), 1);
    assert!(key_shape().is_match(&keys[0]));
    assert_eq!(content, format!("\n{} = Hello\n", keys[0]));
    Ok(())
}

#[test]
fn test_sync_no_strings_found_aborts() -> Result<()> {
    let test = CliTest::new()?;
    let original = "\ns_AAAA = Chats\n";
    test.write_file(STRINGS_FILE, original)?;
    test.write_file("src/View.java", "class View {}")?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no source strings found"));
    assert_eq!(test.read_file(STRINGS_FILE)?, original);
    Ok(())
}

#[test]
fn test_sync_missing_source_dir_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "\ns_AAAA = Chats\n")?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(2));
    let log = stderr(&output);
    assert!(log.contains("does not exist/is not a directory"));
    assert!(log.contains("no source strings found"));
    Ok(())
}

#[test]
fn test_sync_duplicate_new_strings_each_get_a_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "")?;
    test.write_file(
        "src/View.java",
        r#"Tr.tr("hello"); Tr.tr("hello"); Tr.tr("world");"#,
    )?;

    let output = test.sync(&[])?;

    assert_eq!(output.status.code(), Some(0));
    let content = test.read_file(STRINGS_FILE)?;
    let values: Vec<&str> = content
        .lines()
        .filter_map(|line| line.split_once(" = "))
        .map(|(_, value)| value)
        .collect();
    assert_eq!(values, vec!["hello", "hello", "world"]);

    let keys = keys_of(&content);
    assert_ne!(keys[0], keys[1]);
    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "# translations\n")?;
    test.write_file("src/View.java", VIEW)?;

    let first = test.sync(&[])?;
    let after_first = test.read_file(STRINGS_FILE)?;
    let second = test.sync(&[])?;

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
    assert!(stderr(&second).contains("no changes detected"));
    assert_eq!(test.read_file(STRINGS_FILE)?, after_first);
    Ok(())
}

#[test]
fn test_sync_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::new()?;
    let original = "\ns_AAAA = Old title\n";
    test.write_file(STRINGS_FILE, original)?;
    test.write_file("src/View.java", VIEW)?;

    let output = test.sync(&["--dry-run"])?;

    assert_eq!(output.status.code(), Some(0));
    let log = stderr(&output);
    assert!(log.contains("dry run: 2 to add, 1 to remove"));
    assert!(!log.contains("update successful"));
    assert_eq!(test.read_file(STRINGS_FILE)?, original);
    Ok(())
}

#[test]
fn test_sync_glob_and_marker_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "")?;
    test.write_file("src/Main.kt", r#"show(I18n.t("From Kotlin"))"#)?;
    test.write_file("src/Main.java", VIEW)?;

    let output = test.sync(&["--glob", "*.kt", "--marker", "I18n.t"])?;

    assert_eq!(output.status.code(), Some(0));
    let content = test.read_file(STRINGS_FILE)?;
    assert!(content.contains(" = From Kotlin\n"));
    assert!(!content.contains("Chats"));
    Ok(())
}

#[test]
fn test_sync_verbose_logs_scanned_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_FILE, "\ns_AAAA = Chats\ns_BBBB = Send message\n")?;
    test.write_file("src/View.java", VIEW)?;

    let output = test.sync(&["--verbose"])?;

    assert_eq!(output.status.code(), Some(0));
    let log = stderr(&output);
    assert!(log.contains("debug:"));
    assert!(log.contains("View.java: 2 strings"));
    Ok(())
}

#[test]
fn test_sync_without_arguments_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    // Usage errors must not be mistaken for "no strings found".
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Usage"));
    Ok(())
}
