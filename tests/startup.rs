use std::process::Command;

#[test]
fn test_refuses_to_start_without_api_key() {
    let workdir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_ecomimic-site"))
        .current_dir(workdir.path())
        .env_remove("COZE_API_KEY")
        .env("ECOMIMIC_PORT", "0")
        .output()
        .expect("failed to run server binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("COZE_API_KEY"), "stderr: {stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("EcoMimic server started"), "stdout: {stdout}");
}
