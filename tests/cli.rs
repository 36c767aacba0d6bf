use std::process::Command;

fn calculator() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calculator"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_sample_addition() {
    let output = calculator().output().expect("failed to run calculator");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Adding 5 + 3 = 8\n");
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = calculator()
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run calculator");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Adding 5 + 3 = 8\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("returned 8"));
}
