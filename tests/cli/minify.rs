use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, entry, json_stdout, stderr};

const NAVIGATION_CSS: &str =
    ".navigation {}\n.navigation a {}\n.navigation li {}\n.footer {}\n.tiny {}\n";

#[test]
fn test_minify_table() -> Result<()> {
    let test = CliTest::with_file("site.css", NAVIGATION_CSS)?;

    assert_cmd_snapshot!(test.minify_command());

    Ok(())
}

#[test]
fn test_minify_json() -> Result<()> {
    let test = CliTest::with_file("site.css", NAVIGATION_CSS)?;

    assert_cmd_snapshot!(test.minify_command().arg("--json"));

    Ok(())
}

#[test]
fn test_minify_leaves_script_names_unassigned() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        r#"<script>var counter = 0; function reset() {}</script>
<body><p id="message"></p></body>"#,
    )?;

    assert_cmd_snapshot!(test.minify_command());

    Ok(())
}

#[test]
fn test_minify_ids_and_classes_are_independent() -> Result<()> {
    let test = CliTest::with_file("site.css", "#banner {}\n.banner {}\n")?;

    let output = test.minify_command().arg("--json").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let snapshot = json_stdout(&output)?;

    assert_eq!(entry(&snapshot, "ids", "banner").unwrap()["substitute"], "a");
    assert_eq!(entry(&snapshot, "classes", "banner").unwrap()["substitute"], "a");

    Ok(())
}

#[test]
fn test_minify_counts_script_references_to_markup() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<body><div id="header"></div></body>"#)?;
    test.write_file("app.js", "$(\"#header\").hide();\n$(\"#header\").show();\n")?;

    let output = test.minify_command().arg("--json").output()?;
    let snapshot = json_stdout(&output)?;

    let header = entry(&snapshot, "ids", "header").unwrap();
    assert_eq!(header["count"], 3);
    assert_eq!(
        header["rewrittenOccurrences"],
        serde_json::json!(["id=\"a\"", "\"#a"])
    );

    Ok(())
}

#[test]
fn test_token_space_exhaustion_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".idshrinkrc.json", r#"{ "maxTokenLength": 1 }"#)?;
    let css: String = (0..53).map(|i| format!(".item{i} {{}}\n")).collect();
    test.write_file("many.css", &css)?;

    assert_cmd_snapshot!(test.minify_command().args(["--output", "snap.json"]));

    assert!(!test.root().join("snap.json").exists());

    Ok(())
}
