use super::*;

#[test]
fn invocation_builds_argument_list_in_order() {
    let inv = ToolInvocation::new("pandoc")
        .args(["-t", "beamer"])
        .arg("slides.md")
        .args(["-o", "slides.pdf"]);
    assert_eq!(inv.program(), "pandoc");
    assert_eq!(inv.arg_list().len(), 5);
    assert_eq!(inv.value_after("-o").unwrap(), "slides.pdf");
    assert_eq!(inv.last_arg().unwrap(), "slides.pdf");
    assert!(inv.value_after("--missing").is_none());
    assert_eq!(inv.to_string(), "pandoc -t beamer slides.md -o slides.pdf");
}

#[test]
fn recording_runner_shares_log_between_clones() {
    let runner = RecordingRunner::new();
    let observer = runner.clone();
    runner.run(&ToolInvocation::new("sox")).unwrap();
    runner.run(&ToolInvocation::new("ffmpeg")).unwrap();
    assert_eq!(observer.programs(), vec!["sox", "ffmpeg"]);
}

#[test]
fn recording_runner_handler_can_fail_after_recording() {
    let runner = RecordingRunner::with_handler(|inv| {
        Err(AutoslideError::tool(format!("{} is broken", inv.program())))
    });
    let err = runner.run(&ToolInvocation::new("text2wave")).unwrap_err();
    assert!(err.to_string().contains("text2wave is broken"));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn system_runner_reports_spawn_failure() {
    let err = SystemRunner::new()
        .run(&ToolInvocation::new("autoslide-no-such-tool-xyz"))
        .unwrap_err();
    assert!(matches!(err, AutoslideError::Tool(_)));
    assert!(err.to_string().contains("failed to spawn"));
}

#[cfg(unix)]
#[test]
fn system_runner_propagates_nonzero_exit_with_stderr() {
    let inv = ToolInvocation::new("sh").args(["-c", "echo nope >&2; exit 3"]);
    let err = SystemRunner::new().run(&inv).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("sh exited with status"));
    assert!(msg.contains("nope"));
}

#[cfg(unix)]
#[test]
fn system_runner_feeds_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("echo.txt");
    let inv = ToolInvocation::new("sh")
        .arg("-c")
        .arg(format!("cat > '{}'", out.display()))
        .stdin("hello slides\n");
    SystemRunner::new().run(&inv).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "hello slides\n");
}

#[cfg(unix)]
#[test]
fn system_runner_accepts_success_without_reading_stdin() {
    let inv = ToolInvocation::new("sh")
        .args(["-c", "exit 0"])
        .stdin(vec![b'x'; 4 << 20]);
    SystemRunner::new().run(&inv).unwrap();
}

#[cfg(unix)]
#[test]
fn system_runner_still_fails_on_exit_status_when_stdin_is_unread() {
    let inv = ToolInvocation::new("sh")
        .args(["-c", "exit 4"])
        .stdin(vec![b'x'; 4 << 20]);
    let msg = SystemRunner::new().run(&inv).unwrap_err().to_string();
    assert!(msg.contains("sh exited with status"), "{msg}");
}
