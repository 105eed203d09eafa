mod common;

use common::TestEnv;

#[test]
fn analyze_subcommand_is_available() {
    let output = TestEnv::new().run(&["analyze", "--help"]);

    assert!(
        output.status.success(),
        "analyze --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn analyze_reports_missing_transcript() {
    let env = TestEnv::new();
    let output = env.run(&[
        "analyze",
        "--transcript",
        "/nonexistent/interview_transcript.txt",
        "--no-chart",
    ]);

    assert!(
        !output.status.success(),
        "analyze should fail for a missing transcript\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read transcript"),
        "expected missing transcript error, got:\n{}",
        stderr
    );
}

#[test]
fn analyze_requires_api_key() {
    let env = TestEnv::new();
    let transcript = env.write_data_file(
        "interview_transcript.txt",
        "Interviewer: Tell me about yourself.\nCandidate: Sure.\n",
    );

    let output = env.run(&[
        "analyze",
        "--transcript",
        transcript.to_str().unwrap(),
        "--no-chart",
    ]);

    assert!(
        !output.status.success(),
        "analyze without an API key should fail\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Gemini API key is missing"),
        "expected missing API key error, got:\n{}",
        stderr
    );
}
