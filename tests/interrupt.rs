#![cfg(unix)]

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn sigint_ends_run_while_stdin_stays_open() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_link-inspector"))
        .arg("--nc")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Held open so the stdin read never completes on its own.
    let _stdin = child.stdin.take().unwrap();

    let stderr = child.stderr.take().unwrap();
    let (ready_tx, ready_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stderr).lines().map_while(Result::ok) {
            if line.contains("Reading URLs from") {
                let _ = ready_tx.send(());
            }
        }
    });
    ready_rx.recv_timeout(Duration::from_secs(10)).unwrap();
    // Give the signal handler task time to register.
    thread::sleep(Duration::from_millis(300));

    let pid = child.id().to_string();
    let sent = Command::new("kill").args(["-INT", pid.as_str()]).status().unwrap();
    assert!(sent.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    let exit = loop {
        if let Some(exit) = child.try_wait().unwrap() {
            break Some(exit);
        }
        if Instant::now() >= deadline {
            break None;
        }
        thread::sleep(Duration::from_millis(50));
    };

    let Some(exit) = exit else {
        let _ = child.kill();
        panic!("still running 5s after SIGINT");
    };
    assert!(exit.success(), "exit status {exit:?}");
}
