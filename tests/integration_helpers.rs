//! Checks for the helpers shared by the binary suites.

mod integration;

use integration::helpers::*;

#[test]
fn test_dir_creates_and_cleans_up() {
    let path_copy;
    {
        let test_dir = TestDir::new().expect("create test dir");
        path_copy = test_dir.path().to_path_buf();
        assert!(path_copy.exists(), "test dir should exist");
    }
    assert!(!path_copy.exists(), "test dir should be cleaned up");
}

#[cfg(unix)]
#[test]
fn fake_programs_log_each_invocation() {
    let fakes = FakePrograms::new(7);
    let status = std::process::Command::new(fakes.ssh())
        .args(["host", "true"])
        .status()
        .expect("run fake ssh");
    assert_eq!(status.code(), Some(7));
    assert_eq!(fakes.log("ssh"), ["host true"]);
    assert!(fakes.log("scp").is_empty());
}
