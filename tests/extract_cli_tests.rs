mod common;

use common::TestEnv;

const FENCED_RESPONSE: &str = "\
**Detailed Summary:** The candidate spoke at length about distributed systems.

**Performance Analysis:** Strong engagement, clear answers.

**Chart Data (JSON):**
```json
{\"engagement\": 7, \"clarity\": 9, \"enthusiasm\": 6}
```

**Insights Report:** Keep answers shorter.
";

#[test]
fn extract_prints_score_table() {
    let env = TestEnv::new();
    let response = env.write_data_file("response.txt", FENCED_RESPONSE);

    let output = env.run(&["extract", response.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "extract should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("engagement"));
    assert!(stdout.contains("7"));
    assert!(stdout.contains("clarity"));
    assert!(stdout.contains("9"));
    assert!(stdout.contains("enthusiasm"));
    assert!(stdout.contains("6"));
}

#[test]
fn extract_json_prints_json_object() {
    let env = TestEnv::new();
    let response = env.write_data_file("response.txt", FENCED_RESPONSE);

    let output = env.run(&["extract", "--json", response.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "extract --json should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("\"engagement\": 7.0"),
        "expected JSON output\nstdout:\n{}",
        stdout
    );
}

#[test]
fn extract_fails_when_response_has_no_json() {
    let env = TestEnv::new();
    let response = env.write_data_file("response.txt", "All prose, no structured data.\n");

    let output = env.run(&["extract", response.to_str().unwrap()]);

    assert!(
        !output.status.success(),
        "extract should fail when no JSON object is present\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No score table extracted"),
        "expected extraction failure diagnostic, got:\n{}",
        stderr
    );
}

#[test]
fn extract_reports_missing_file() {
    let output = TestEnv::new().run(&["extract", "/nonexistent/response.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read response file"),
        "expected missing file error, got:\n{}",
        stderr
    );
}
