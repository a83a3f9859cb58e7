use anyhow::Result;
use insta::assert_snapshot;
use serde_json::Value;

use crate::CliTest;

const BUNDLE: &str = r#"
const { userId, authToken: token } = response;
fetch(url, { method: "GET", page: 1, pageSize: 10 });
"#;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_extract_file_saves_results() -> Result<()> {
    let test = CliTest::with_file("static/app.js", BUNDLE)?;

    let output = test.extract_command("static/app.js").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(stdout(&output), @r"
    Extracted 6 unique parameters from 1 file
      authentication  2
      general         1
      identifier      1
      pagination      2
    ✓ Saved authentication (2) to results/authentication.txt
    ✓ Saved general (1) to results/general.txt
    ✓ Saved identifier (1) to results/identifier.txt
    ✓ Saved pagination (2) to results/pagination.txt
    ✓ Saved all results (6) to results/all_results_all.txt
    ");

    assert_eq!(
        test.read_file("results/all_results_all.txt")?,
        "authToken\nmethod\npage\npageSize\ntoken\nuserId\n"
    );
    assert_eq!(
        test.read_file("results/authentication.txt")?,
        "authToken\ntoken\n"
    );
    assert_eq!(test.read_file("results/pagination.txt")?, "page\npageSize\n");
    assert!(!test.root().join("results/status.txt").exists());

    Ok(())
}

#[test]
fn test_extract_no_save_prints_json() -> Result<()> {
    let test = CliTest::with_file("app.js", BUNDLE)?;

    let output = test.extract_command("app.js").arg("--no-save").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!test.root().join("results").exists());
    assert!(stderr(&output).contains("Extracted 6 unique parameters from 1 file"));

    let json: Value = serde_json::from_str(&stdout(&output))?;
    let items = json.as_array().expect("array of parameters");
    let names: Vec<&str> = items.iter().filter_map(|p| p["value"].as_str()).collect();
    assert_eq!(
        names,
        vec!["authToken", "method", "page", "pageSize", "token", "userId"]
    );

    let page = &items[2];
    assert_eq!(page["source"], "api_request");
    assert_eq!(page["category"], "pagination");
    assert_eq!(page["priority"], 3);
    assert_eq!(page["tags"], serde_json::json!(["api", "pagination"]));

    Ok(())
}

#[test]
fn test_extract_route_params() -> Result<()> {
    let test = CliTest::with_file("routes.js", "app.get('/api/users/:userId', handler)")?;

    let output = test
        .extract_command("routes.js")
        .arg("--no-save")
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        json,
        serde_json::json!([{
            "value": "userId",
            "source": "route_param",
            "category": "identifier",
            "priority": 4,
            "tags": ["id", "route"]
        }])
    );

    Ok(())
}

#[test]
fn test_extract_directory_continues_after_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("js/a.js", "app.get('/orders/:orderId', h)")?;
    test.write_file("js/b.js", "")?;
    test.write_file("js/c.js", "const { sessionKey } = store;")?;
    test.write_file("js/readme.txt", "const { ignored } = x;")?;

    let output = test.extract_command("js").output()?;
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("warning: Failed to process b.js: source text is empty"));
    assert!(err.contains("warning: 1 file could not be processed"));
    assert!(stdout(&output).contains("Extracted 2 unique parameters from 3 files"));
    assert_eq!(
        test.read_file("results/all_results_all.txt")?,
        "orderId\nsessionKey\n"
    );

    Ok(())
}

#[test]
fn test_extract_directory_is_shallow_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("js/a.js", "const { userId } = req;")?;
    test.write_file("js/vendor/b.js", "const { orderId } = req;")?;

    let output = test.extract_command("js").output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file("results/all_results_all.txt")?, "userId\n");

    let output = test
        .extract_command("js")
        .args(["--recursive", "--output-dir", "deep"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("deep/all_results_all.txt")?,
        "orderId\nuserId\n"
    );

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".parascanrc.json",
        r#"{
         "outputDir": "params",
         "aggregateFile": "all.txt",
         "extensions": ["mjs"]
     }"#,
    )?;
    test.write_file("src/api.mjs", "const { pageSize } = query;")?;
    test.write_file("src/skip.js", "const { userId } = query;")?;

    let output = test.extract_command("src").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("params/all.txt")?, "pageSize\n");
    assert_eq!(test.read_file("params/pagination.txt")?, "pageSize\n");

    Ok(())
}

#[test]
fn test_extract_empty_file_is_an_error() -> Result<()> {
    let test = CliTest::with_file("empty.js", "")?;

    let output = test.extract_command("empty.js").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output)
            .contains("Error: Failed to extract parameters from empty.js: source text is empty")
    );
    assert!(!test.root().join("results").exists());

    Ok(())
}

#[test]
fn test_extract_missing_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command("nope.js").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Path does not exist: nope.js"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("app.js", BUNDLE)?;
    test.write_file(".parascanrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.extract_command("app.js").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));

    Ok(())
}
