use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_workspace() -> TempDir {
    tempfile::tempdir().expect("create tempdir")
}

fn write_vocab(workspace: &TempDir, tokens: &[&str]) -> PathBuf {
    let path = workspace.path().join("vocab.txt");
    fs::write(&path, tokens.join("\n")).expect("write vocab");
    path
}

fn reference_tokens() -> Vec<&'static str> {
    vec!["hello", "world", ",", ".", "go", "##go"]
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is UTF-8")
}

#[test]
fn tokenize_text_argument() {
    let workspace = temp_workspace();
    let vocab_path = write_vocab(&workspace, &reference_tokens());

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "Hello worldgo.",
    ]);
    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["hello", "world", "##go", "."]);
}

#[test]
fn tokenize_reads_stdin() {
    let workspace = temp_workspace();
    let vocab_path = write_vocab(&workspace, &reference_tokens());

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path())
        .args(["--quiet", "tokenize", "--vocab", vocab_path.to_str().unwrap()])
        .write_stdin("Hello world, from go.");
    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["hello", "world", ",", "[UNK]", "go", "."]);
}

#[test]
fn tokenize_reads_input_file() {
    let workspace = temp_workspace();
    let vocab_path = write_vocab(&workspace, &reference_tokens());
    let input_path = workspace.path().join("input.txt");
    fs::write(&input_path, "Hello worldgo.\nhello world\n").expect("write input");

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "--input",
        input_path.to_str().unwrap(),
        "--no-progress",
    ]);
    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["hello", "world", "##go", ".", "hello", "world"]);
}

#[test]
fn tokenize_emits_ids() {
    let workspace = temp_workspace();
    let mut tokens = reference_tokens();
    tokens.push("[UNK]");
    let vocab_path = write_vocab(&workspace, &tokens);

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "--ids",
        "Hello worldgo, from go.",
    ]);
    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "0\thello",
            "1\tworld",
            "5\t##go",
            "2\t,",
            "6\t[UNK]",
            "4\tgo",
            "3\t."
        ]
    );
}

#[test]
fn tokenize_ids_fail_without_sentinel_entry() {
    let workspace = temp_workspace();
    let vocab_path = write_vocab(&workspace, &reference_tokens());

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "--ids",
        "from",
    ]);
    let output = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(output).expect("stderr is UTF-8");
    assert!(
        stderr.contains("has no vocabulary id"),
        "stderr explained the missing sentinel: {stderr}"
    );
}

#[test]
fn tokenize_json_records() {
    let workspace = temp_workspace();
    let mut tokens = reference_tokens();
    tokens.push("[UNK]");
    let vocab_path = write_vocab(&workspace, &tokens);

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "--json",
        "--ids",
        "Hello worldgo.",
    ]);
    let stdout = stdout_of(&mut cmd);
    let record: Value = serde_json::from_str(stdout.trim()).expect("output is valid JSON");
    assert_eq!(record["text"], "Hello worldgo.");
    let pieces: Vec<&str> = record["tokens"]
        .as_array()
        .expect("tokens array")
        .iter()
        .map(|v| v.as_str().expect("string token"))
        .collect();
    assert_eq!(pieces, ["hello", "world", "##go", "."]);
    let ids: Vec<u64> = record["ids"]
        .as_array()
        .expect("ids array")
        .iter()
        .map(|v| v.as_u64().expect("u64 id"))
        .collect();
    assert_eq!(ids, [0, 1, 5, 3]);
}

#[test]
fn tokenize_json_emits_one_record_per_line() {
    let workspace = temp_workspace();
    let vocab_path = write_vocab(&workspace, &reference_tokens());
    let input_path = workspace.path().join("input.txt");
    fs::write(&input_path, "Hello worldgo.\nhello world\n").expect("write input");

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "--input",
        input_path.to_str().unwrap(),
        "--no-progress",
        "--json",
    ]);
    let stdout = stdout_of(&mut cmd);
    let records: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is one JSON record"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["text"], "Hello worldgo.");
    assert_eq!(records[1]["text"], "hello world");
    let second: Vec<&str> = records[1]["tokens"]
        .as_array()
        .expect("tokens array")
        .iter()
        .map(|v| v.as_str().expect("string token"))
        .collect();
    assert_eq!(second, ["hello", "world"]);
}

#[test]
fn basic_stage_splits_punctuation() {
    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.args(["--quiet", "basic", "Hello, world\tfrom    go"]);
    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["hello", ",", "world", "from", "go"]);
}

#[test]
fn basic_keep_case_preserves_input_case() {
    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.args(["--quiet", "basic", "--keep-case", "Hello World"]);
    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["Hello", "World"]);
}

#[test]
fn vocab_summary_reports_entries() {
    let workspace = temp_workspace();
    let vocab_path = write_vocab(&workspace, &reference_tokens());

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "vocab",
        "--vocab",
        vocab_path.to_str().unwrap(),
        "--json",
    ]);
    let stdout = stdout_of(&mut cmd);
    let summary: Value = serde_json::from_str(&stdout).expect("summary is valid JSON");
    assert_eq!(summary["entries"], 6);
    assert_eq!(summary["continuation_pieces"], 1);
    assert_eq!(summary["has_default_sentinel"], false);
}

#[test]
fn missing_vocabulary_file_fails_with_context() {
    let workspace = temp_workspace();
    let missing = workspace.path().join("missing.txt");

    let mut cmd = Command::cargo_bin("wordpiece").expect("binary exists");
    cmd.current_dir(workspace.path()).args([
        "--quiet",
        "tokenize",
        "--vocab",
        missing.to_str().unwrap(),
        "hello",
    ]);
    let output = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(output).expect("stderr is UTF-8");
    assert!(
        stderr.contains("failed to load vocabulary"),
        "stderr carried load context: {stderr}"
    );
}
