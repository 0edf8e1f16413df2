use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, json_stdout, stderr, stdout};

fn record<'a>(diff: &'a Value, category: &str, name: &str) -> Option<&'a Value> {
    diff[category].as_array()?.iter().find(|r| r["name"] == name)
}

fn setup_versions(test: &CliTest) -> Result<()> {
    test.write_file("v1/site.css", "#header {}\n.legacy {}\n")?;
    test.write_file("v2/site.css", "#header {}\n#header > a {}\n.fresh {}\n")
}

#[test]
fn test_identical_projects_have_no_differences() -> Result<()> {
    let test = CliTest::with_file("v1/site.css", "#header {}\n.card {}\n")?;
    test.write_file("v2/site.css", "#header {}\n.card {}\n")?;

    assert_cmd_snapshot!(test.diff_command().args(["v1", "v2"]));

    Ok(())
}

#[test]
fn test_changed_added_and_removed_identifiers() -> Result<()> {
    let test = CliTest::new()?;
    setup_versions(&test)?;

    assert_cmd_snapshot!(test.diff_command().args(["v1", "v2"]));

    Ok(())
}

#[test]
fn test_changed_added_and_removed_identifiers_json() -> Result<()> {
    let test = CliTest::new()?;
    setup_versions(&test)?;

    assert_cmd_snapshot!(test.diff_command().args(["v1", "v2", "--json"]));

    Ok(())
}

#[test]
fn test_diff_against_snapshot_file() -> Result<()> {
    let test = CliTest::with_file("site/site.css", "#header {}\n.card {}\n")?;

    let minify = test
        .minify_command()
        .args(["--source-root", "site", "--output", "before.json"])
        .output()?;
    assert!(minify.status.success(), "stderr: {}", stderr(&minify));

    let same = test.diff_command().args(["before.json", "site"]).output()?;
    assert_eq!(same.status.code(), Some(0));

    test.write_file("site/extra.css", ".card > p {}\n")?;
    let changed = test.diff_command().args(["before.json", "site"]).output()?;
    assert_eq!(changed.status.code(), Some(1));
    let out = stdout(&changed);
    assert!(out.contains("~ card  count 1 -> 2"));
    assert!(out.contains("1 difference(s)"));

    Ok(())
}

#[test]
fn test_snapshot_with_missing_categories() -> Result<()> {
    let test = CliTest::with_file(
        "left.json",
        r##"{ "ids": [ { "name": "header", "occurrences": ["#header"], "count": 1 } ] }"##,
    )?;
    test.write_file("right.json", r#"{ "classes": [] }"#)?;

    let output = test
        .diff_command()
        .args(["left.json", "right.json", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let diff = json_stdout(&output)?;
    let header = record(&diff, "ids", "header").unwrap();
    assert_eq!(header["countLeft"], 1);
    assert_eq!(header["countRight"], 0);

    Ok(())
}

#[test]
fn test_malformed_snapshot_is_an_error() -> Result<()> {
    let test = CliTest::with_file("left.json", "[1, 2, 3]")?;
    test.write_file("right.json", "{}")?;

    let output = test.diff_command().args(["left.json", "right.json"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse snapshot"));

    Ok(())
}

#[test]
fn test_missing_side_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.diff_command().args(["nowhere.json", "."]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("nowhere.json"));

    Ok(())
}
