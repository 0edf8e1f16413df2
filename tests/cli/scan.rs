use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, entry, json_stdout, names, stderr, stdout};

/// Markup and stylesheet sharing an id and two classes.
fn setup_site(test: &CliTest) -> Result<()> {
    test.write_file(
        "index.html",
        r#"<html>
<body>
  <div id="header" class="card wide">
    <button onclick="openMenu()">Menu</button>
  </div>
</body>
</html>
"#,
    )?;
    test.write_file(
        "site.css",
        "#header { color: #fff; }\n.card {}\n.card-title, .wide {}\n",
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  #header { background: #fff; }
  .nav-item { padding: 0; }
</style>
<script>
  var menuOpen = false;
  function toggleMenu() { menuOpen = !menuOpen; }
  document.getElementById('header');
</script>
</head>
<body>
  <div id="header" class="nav-item active">
    <button onclick="toggleMenu()">Menu</button>
  </div>
</body>
</html>
"#;

#[test]
fn test_scan_json_harvests_every_category() -> Result<()> {
    let test = CliTest::with_file("index.html", INDEX_HTML)?;

    let output = test.scan_command().arg("--json").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let snapshot = json_stdout(&output)?;

    let header = entry(&snapshot, "ids", "header").unwrap();
    assert_eq!(header["count"], 3);
    assert_eq!(header["substitute"], "");
    assert!(names(&snapshot, "classes").contains(&"nav-item".to_string()));
    assert!(names(&snapshot, "classes").contains(&"active".to_string()));
    assert_eq!(names(&snapshot, "variables"), vec!["menuOpen"]);
    assert_eq!(names(&snapshot, "functions"), vec!["toggleMenu"]);
    assert_eq!(entry(&snapshot, "functions", "toggleMenu").unwrap()["count"], 2);

    Ok(())
}

#[test]
fn test_scan_tables() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_scan_json() -> Result<()> {
    let test = CliTest::new()?;
    setup_site(&test)?;

    assert_cmd_snapshot!(test.scan_command().arg("--json"));

    Ok(())
}

#[test]
fn test_script_references_cross_files() -> Result<()> {
    // The script sorts before the stylesheet that defines its targets.
    let test = CliTest::with_file("theme.css", "#sidebar { width: 10px; }\n.panel {}\n")?;
    test.write_file(
        "app.js",
        "$(\"#sidebar\").show();\n$('.panel').hide();\n$(\"#missing\").show();\n",
    )?;

    let output = test.scan_command().arg("--json").output()?;
    let snapshot = json_stdout(&output)?;

    let sidebar = entry(&snapshot, "ids", "sidebar").unwrap();
    assert_eq!(sidebar["count"], 2);
    assert_eq!(sidebar["occurrences"], serde_json::json!(["#sidebar", "\"#sidebar"]));
    assert_eq!(entry(&snapshot, "classes", "panel").unwrap()["count"], 2);
    assert!(entry(&snapshot, "ids", "missing").is_none());

    Ok(())
}

#[test]
fn test_third_party_classes_excluded() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        r#"<body><div class="slick-slide card col-md-6 fa-home"></div></body>"#,
    )?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_custom_third_party_patterns() -> Result<()> {
    let test = CliTest::with_file(".idshrinkrc.json", r#"{ "thirdParty": { "ids": ["^ga-.*$"] } }"#)?;
    test.write_file("site.css", "#ga-tracker {}\n#content {}\n")?;

    let output = test.scan_command().arg("--json").output()?;
    let snapshot = json_stdout(&output)?;

    assert_eq!(names(&snapshot, "ids"), vec!["content"]);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file(".idshrinkrc.json", r#"{ "ignores": ["**/vendor/**"] }"#)?;
    test.write_file("vendor/lib.css", "#vendored {}\n")?;
    test.write_file("site.css", "#own {}\n")?;

    let output = test.scan_command().arg("--json").output()?;
    let snapshot = json_stdout(&output)?;

    assert_eq!(names(&snapshot, "ids"), vec!["own"]);

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/site.css", "#layout {}\n")?;
    test.write_file("other/site.css", "#elsewhere {}\n")?;

    let output = test
        .scan_command()
        .args(["--source-root", "web", "--json"])
        .output()?;
    let snapshot = json_stdout(&output)?;

    assert_eq!(names(&snapshot, "ids"), vec!["layout"]);

    Ok(())
}

#[test]
fn test_output_file_with_absolute_path() -> Result<()> {
    let test = CliTest::with_file("site.css", ".grid {}\n")?;
    let path = test.root().join("snap.json");

    let mut cmd = test.scan_command();
    cmd.arg("--output").arg(&path);
    insta::with_settings!({ filters => test.path_filters() }, {
        assert_cmd_snapshot!(cmd);
    });

    let snapshot: serde_json::Value = serde_json::from_str(&test.read_file("snap.json")?)?;
    assert_eq!(names(&snapshot, "classes"), vec!["grid"]);

    Ok(())
}

#[test]
fn test_invalid_utf8_is_skipped_with_warning() -> Result<()> {
    let test = CliTest::with_file("site.css", "#valid {}\n")?;
    std::fs::write(test.root().join("broken.css"), [0xc3, 0x28, b'#', b'x'])?;

    assert_cmd_snapshot!(test.scan_command());

    let verbose = test.scan_command().args(["--json", "-v"]).output()?;
    assert!(verbose.status.success());
    assert!(stderr(&verbose).contains("broken.css"));
    assert!(stderr(&verbose).contains("UTF-8"));
    assert_eq!(names(&json_stdout(&verbose)?, "ids"), vec!["valid"]);

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".idshrinkrc.json", r#"{ "maxTokenLength": 0 }"#)?;

    assert_cmd_snapshot!(test.scan_command());

    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.scan_command());

    let output = test.scan_command().arg("--json").output()?;
    let snapshot = json_stdout(&output)?;
    for category in ["ids", "classes", "variables", "functions"] {
        assert!(names(&snapshot, category).is_empty());
    }

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["scan", "minify", "diff", "init"] {
        assert!(out.contains(command));
    }

    Ok(())
}
