//! Exit status for each failure class.
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! |  0   | success, dry run, or nothing left to copy        |
//! |  1   | usage: options, operands, destination            |
//! |  2   | ignore file unreadable or missing with `-i`      |
//! |  3   | source tree unreadable                           |
//! | 23   | one or more items failed to copy                 |

mod integration;

use integration::helpers::*;

#[test]
fn malformed_destination_exits_one() {
    let dir = TestDir::new().expect("dir");
    dir.write_file("src/a.txt", b"a").expect("write");
    let output = EscpCommand::new()
        .current_dir(dir.path())
        .args(["src", "@host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("invalid remote destination '@host:/dst'"));
}

#[test]
fn missing_explicit_ignore_file_exits_two() {
    let dir = TestDir::new().expect("dir");
    dir.write_file("src/a.txt", b"a").expect("write");
    let output = EscpCommand::new()
        .current_dir(dir.path())
        .args(["-i", "nope.ignore", "src", "host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("ignore file 'nope.ignore' does not exist"));
}

#[cfg(unix)]
#[test]
fn unreadable_default_ignore_file_exits_two() {
    let dir = TestDir::new().expect("dir");
    dir.write_file("src/a.txt", b"a").expect("write");
    // A directory in place of the ignore file cannot be read as text.
    dir.mkdir(".scpignore").expect("mkdir");
    let output = EscpCommand::new()
        .current_dir(dir.path())
        .args(["src", "host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("failed to read ignore file '.scpignore'"));
}

#[test]
fn missing_source_exits_three() {
    let dir = TestDir::new().expect("dir");
    let output = EscpCommand::new()
        .current_dir(dir.path())
        .args(["absent", "host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_text(&output).contains("(code 3)"));
}

#[cfg(unix)]
#[test]
fn failed_item_exits_twenty_three() {
    let dir = TestDir::new().expect("dir");
    let mut tree = FileTree::new();
    tree.text_file("src/fail.txt", "x").text_file("src/ok.txt", "y");
    tree.create_in(&dir).expect("tree");
    let fakes = FakePrograms::new(0);

    let output = EscpCommand::new()
        .current_dir(dir.path())
        .with_fakes(&fakes)
        .args(["src", "out"])
        .output();
    assert_eq!(output.status.code(), Some(23));
    let stderr = stderr_text(&output);
    assert!(stderr.contains("failed to copy 'fail.txt'"));
    assert!(stderr.contains("1 of 2 item(s) failed"));
    assert!(dir.exists("out/ok.txt"), "later items still copy");
}

#[test]
fn nothing_to_copy_exits_zero() {
    let dir = TestDir::new().expect("dir");
    dir.write_file("src/a.tmp", b"a").expect("write");
    dir.write_file(".scpignore", b"*.tmp\n").expect("write");
    let output = EscpCommand::new()
        .current_dir(dir.path())
        .args(["src", "host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_text(&output),
        "escp info: no files to copy based on the ignore patterns\n"
    );
}
