//! E2E tests for the pulsecheck CLI
//!
//! Each test runs the compiled binary in its own temp directory, since all
//! output filenames are fixed and relative to the working directory.

#![allow(deprecated)] // cargo_bin deprecation - will update when assert_cmd stabilizes replacement

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pulsecheck() -> Command {
    Command::cargo_bin("pulsecheck").unwrap()
}

#[test]
fn test_help() {
    pulsecheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--smart-mode"))
        .stdout(predicate::str::contains("--purge"))
        .stdout(predicate::str::contains("--no-archive"));
}

#[test]
fn test_version() {
    pulsecheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pulsecheck"));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    pulsecheck()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read bookmarks file"));
}

#[test]
fn test_linkless_file_still_produces_outputs() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bookmarks.html"),
        "<html><body><p>nothing saved yet</p></body></html>",
    )
    .unwrap();

    pulsecheck()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 live links kept."))
        .stdout(predicate::str::contains("0 dead links archived."))
        .stdout(predicate::str::contains("0 links with other status codes."));

    assert!(dir.path().join("cleaned_bookmarks.html").exists());
    assert!(dir.path().join("dead_links.html").exists());
    assert!(dir.path().join("other_status.html").exists());
}

#[test]
fn test_no_archive_leaves_archive_files_alone() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bookmarks.html"), "<html><body></body></html>").unwrap();
    // A stale archive from some previous run must survive untouched
    fs::write(dir.path().join("dead_links.html"), "stale contents").unwrap();

    pulsecheck()
        .current_dir(dir.path())
        .arg("--no-archive")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("dead_links.html")).unwrap(),
        "stale contents"
    );
    assert!(!dir.path().join("other_status.html").exists());
    // The cleaned copy is written regardless of archiving
    assert!(dir.path().join("cleaned_bookmarks.html").exists());
}

#[test]
fn test_archives_are_full_overwrites() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bookmarks.html"), "<html><body></body></html>").unwrap();
    fs::write(dir.path().join("dead_links.html"), "stale contents").unwrap();

    pulsecheck().current_dir(dir.path()).assert().success();

    let archive = fs::read_to_string(dir.path().join("dead_links.html")).unwrap();
    assert!(!archive.contains("stale contents"));
    assert!(archive.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_purge_backs_up_then_rewrites_the_source() {
    let dir = tempdir().unwrap();
    // Only non-HTTP(S) links, so nothing is left to probe afterwards and
    // the test never touches the network
    let source = "<html><body>\
                  <a href=\"mailto:someone@example.com\">mail</a>\
                  <a href=\"/relative/path\">rel</a>\
                  <a href=\"javascript:void(0)\">js</a>\
                  </body></html>";
    fs::write(dir.path().join("bookmarks.html"), source).unwrap();

    pulsecheck()
        .current_dir(dir.path())
        .arg("--purge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Purged 3 non-HTTP link(s)"))
        .stdout(predicate::str::contains("0 live links kept."));

    // Backup is byte-for-byte identical to the pre-purge source
    let backup = fs::read_to_string(dir.path().join("bookmarks.html.bak")).unwrap();
    assert_eq!(backup, source);

    // The source file itself was rewritten without the purged anchors
    let rewritten = fs::read_to_string(dir.path().join("bookmarks.html")).unwrap();
    assert!(!rewritten.contains("mailto:"));
    assert!(!rewritten.contains("/relative/path"));
    assert!(!rewritten.contains("javascript:"));
}

#[test]
fn test_custom_filename_flag() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("saved.html"), "<html><body></body></html>").unwrap();

    pulsecheck()
        .current_dir(dir.path())
        .args(["--filename", "saved.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 live links kept."));
}

// The full scenario from one live link, one 404, and one timeout: live
// count 1, dead count 2, other count 0; the dead archive holds exactly the
// two dead entries and the cleaned copy drops their anchors.
#[test]
fn test_three_link_scenario_end_to_end() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;
        server
    });

    let dir = tempdir().unwrap();
    let uri = server.uri();
    fs::write(
        dir.path().join("bookmarks.html"),
        format!(
            "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n<dl>\n\
             <dt><a href=\"{uri}/ok\">Alive</a>\n\
             <dt><a href=\"{uri}/gone\">Gone</a>\n\
             <dt><a href=\"{uri}/slow\">Slow</a>\n\
             </dl>\n"
        ),
    )
    .unwrap();

    pulsecheck()
        .current_dir(dir.path())
        .args(["--timeout", "1", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 live links kept."))
        .stdout(predicate::str::contains("2 dead links archived."))
        .stdout(predicate::str::contains("0 links with other status codes."));

    let dead_archive = fs::read_to_string(dir.path().join("dead_links.html")).unwrap();
    assert!(dead_archive.contains(&format!("{uri}/gone")));
    assert!(dead_archive.contains(&format!("{uri}/slow")));
    assert!(!dead_archive.contains(&format!("{uri}/ok\"")));

    let cleaned = fs::read_to_string(dir.path().join("cleaned_bookmarks.html")).unwrap();
    assert!(cleaned.contains(&format!("{uri}/ok")));
    assert!(!cleaned.contains(&format!("{uri}/gone")));
    assert!(!cleaned.contains(&format!("{uri}/slow")));
}
