use assert_cmd::Command;
use insta::assert_snapshot;
use rstest::rstest;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn refuses_a_minor() {
    let assert = cmd().args(["Alice", "17"]).assert().failure().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_snapshot!(stdout, @"You must be over 18 to enter. Sorry :(");
}

#[test]
fn admits_at_the_threshold() {
    let assert = cmd().args(["Bob", "18"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_snapshot!(stdout, @"Welocme: Bob");
}

#[rstest]
#[case("Bob", "18")]
#[case("Carol", "99")]
fn admits_adults_with_the_name_verbatim(#[case] name: &str, #[case] age: &str) {
    cmd()
        .args([name, age])
        .assert()
        .success()
        .stdout(format!("Welocme: {name}"));
}

#[rstest]
#[case("0")]
#[case("-3")]
#[case("abc")] // degrades to 0 under lossy parsing
fn refuses_ages_below_the_threshold(#[case] age: &str) {
    cmd()
        .args(["Dan", age])
        .assert()
        .failure()
        .code(1)
        .stdout("You must be over 18 to enter. Sorry :(");
}

#[test]
fn repeated_runs_are_identical() {
    let first = cmd().args(["Eve", "30"]).output().unwrap();
    let second = cmd().args(["Eve", "30"]).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn output_has_no_trailing_newline() {
    let output = cmd().args(["Bob", "18"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(stdout, "Welocme: Bob");
    assert!(!stdout.ends_with('\n'));
}
