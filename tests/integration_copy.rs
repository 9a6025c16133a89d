//! Full runs of the `escp` binary with fake `scp`/`ssh` programs.
#![cfg(unix)]

mod integration;

use integration::helpers::*;

fn example_source(dir: &TestDir) {
    let mut tree = FileTree::new();
    tree.text_file("src/file1.txt", "1")
        .text_file("src/file2.log", "2")
        .text_file("src/file3.bak", "3")
        .text_file("src/subdir/file4.txt", "4")
        .dir("src/emptydir");
    tree.create_in(dir).expect("tree");
}

#[test]
fn default_ignore_file_filters_local_copy() {
    let dir = TestDir::new().expect("dir");
    example_source(&dir);
    dir.write_file(".scpignore", b"# Ignore log files\n*.log\n\n# Ignore backup files\n*.bak\n")
        .expect("ignore file");
    let fakes = FakePrograms::new(0);

    let output = EscpCommand::new()
        .current_dir(dir.path())
        .with_fakes(&fakes)
        .args(["src", "out"])
        .output();
    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));
    assert!(stdout_text(&output).contains("escp info: copied 3 item(s) to out"));

    assert!(dir.exists("out/file1.txt"));
    assert!(dir.exists("out/subdir/file4.txt"));
    assert!(dir.path().join("out/emptydir").is_dir());
    assert!(!dir.exists("out/file2.log"));
    assert!(!dir.exists("out/file3.bak"));
    assert!(fakes.log("ssh").is_empty(), "local copies never use ssh");
}

#[test]
fn missing_default_ignore_file_copies_everything() {
    let dir = TestDir::new().expect("dir");
    example_source(&dir);
    let fakes = FakePrograms::new(0);

    let output = EscpCommand::new()
        .current_dir(dir.path())
        .with_fakes(&fakes)
        .args(["-q", "src", "out"])
        .output();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).is_empty(), "quiet run prints nothing");
    assert_eq!(fakes.log("scp").len(), 5);
    assert!(dir.exists("out/file2.log"));
}

#[test]
fn remote_copy_prepares_directories_then_copies_each_item() {
    let dir = TestDir::new().expect("dir");
    example_source(&dir);
    dir.write_file("rules", b"*.log\n*.bak\nemptydir\n").expect("rules");
    let fakes = FakePrograms::new(0);

    let output = EscpCommand::new()
        .current_dir(dir.path())
        .with_fakes(&fakes)
        .args(["-i", "rules", "-P", "2222", "src", "backup@example.com:/srv/backup"])
        .output();
    assert_eq!(output.status.code(), Some(0), "{}", stderr_text(&output));

    let ssh = fakes.log("ssh");
    assert_eq!(ssh.len(), 1);
    assert!(ssh[0].starts_with("-p 2222 backup@example.com mkdir -p --"));
    assert!(ssh[0].ends_with("/srv/backup /srv/backup/subdir"));

    let scp = fakes.log("scp");
    assert_eq!(scp.len(), 2);
    assert!(scp[0].starts_with("-r -P 2222 "));
    assert!(scp[0].ends_with("backup@example.com:/srv/backup/file1.txt"));
    assert!(scp[1].ends_with("backup@example.com:/srv/backup/subdir/file4.txt"));
}

#[test]
fn failed_directory_preparation_copies_nothing() {
    let dir = TestDir::new().expect("dir");
    example_source(&dir);
    let fakes = FakePrograms::new(255);

    let output = EscpCommand::new()
        .current_dir(dir.path())
        .with_fakes(&fakes)
        .args(["src", "host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(23));
    assert!(stderr_text(&output).contains("host"));
    assert!(fakes.log("scp").is_empty());
}

#[test]
fn dry_run_never_invokes_copy_programs() {
    let dir = TestDir::new().expect("dir");
    example_source(&dir);
    dir.write_file(".scpignore", b"*.log\n*.bak\n").expect("ignore file");
    let fakes = FakePrograms::new(0);

    let output = EscpCommand::new()
        .current_dir(dir.path())
        .with_fakes(&fakes)
        .args(["--dry-run", "src", "host:/dst"])
        .output();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).starts_with("emptydir/\nfile1.txt\nsubdir/file4.txt\n"));
    assert!(fakes.log("scp").is_empty());
    assert!(fakes.log("ssh").is_empty());
}
