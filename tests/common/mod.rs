use assert_cmd::Command;
use std::path::Path;

pub fn moodiary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodiary").unwrap();
    cmd.env_remove("MOODIARY_ROOT");
    cmd.env_remove("MOODIARY_THEME");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized diary
#[allow(dead_code)]
pub fn in_diary(root: &Path) -> Command {
    let mut cmd = moodiary_cmd();
    cmd.current_dir(root);
    cmd
}

#[allow(dead_code)]
pub fn init_diary(root: &Path) {
    moodiary_cmd().arg("init").arg(root).assert().success();
}

#[allow(dead_code)]
pub fn write_entry(root: &Path, date: &str, mood: &str, content: &str) {
    in_diary(root)
        .args(["write", "--date", date, "--mood", mood, "--content", content])
        .assert()
        .success();
}

/// Plain process for tests that need to interact with a running command
#[allow(dead_code)]
pub fn moodiary_process(root: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("moodiary"));
    cmd.current_dir(root)
        .env_remove("MOODIARY_ROOT")
        .env_remove("MOODIARY_THEME")
        .env_remove("RUST_LOG");
    cmd
}
