//! Compose-config heuristic: advisory only when the file exists, is
//! readable, and lacks the user-mapping token.

mod common;

use common::{with_temp_root, write_file, TestAudit, TestEmitter};
use reclaim::policy::Policy;
use reclaim::types::HostIdentity;
use reclaim::Reclaim;

const HOST: HostIdentity = HostIdentity {
    uid: 1000,
    gid: 1000,
};

fn api(root: &std::path::Path) -> (Reclaim<TestEmitter, TestAudit>, TestAudit) {
    let audit = TestAudit::default();
    let api = Reclaim::new(TestEmitter::default(), audit.clone(), Policy::scan_root(root))
        .with_identity(HOST);
    (api, audit)
}

#[test]
fn mapping_token_present_produces_no_advisory() {
    let td = with_temp_root();
    write_file(
        td.path(),
        "docker-compose.yml",
        b"services:\n  app:\n    user: \"1000:1000\"\n",
    );
    let (api, _) = api(td.path());
    assert!(api.check_compose().is_none());
}

#[test]
fn missing_token_produces_advisory_with_token_and_file_name() {
    let td = with_temp_root();
    write_file(td.path(), "docker-compose.yml", b"version: '3'\n");
    let (api, audit) = api(td.path());

    let advisory = api.check_compose().expect("advisory");
    let text = advisory.render();
    assert!(text.contains("user:"));
    assert!(text.contains("docker-compose.yml"));
    assert!(text.contains("\"1000:1000\""));
    assert!(text.contains("${UID}:${GID}"));

    // The rendered advisory reaches the audit sink for presentation.
    let lines = audit.lines.lock().unwrap();
    assert!(lines.iter().any(|(_, m)| m.contains("user:")));
}

#[test]
fn missing_file_produces_nothing() {
    let td = with_temp_root();
    let (api, audit) = api(td.path());
    assert!(api.check_compose().is_none());
    assert!(audit.lines.lock().unwrap().is_empty());
}

#[test]
fn unreadable_file_is_swallowed() {
    let td = with_temp_root();
    // A directory with the compose name forces a read error.
    std::fs::create_dir(td.path().join("docker-compose.yml")).unwrap();
    let (api, _) = api(td.path());
    assert!(api.check_compose().is_none());
}

#[test]
fn non_utf8_content_is_swallowed() {
    let td = with_temp_root();
    write_file(td.path(), "docker-compose.yml", &[0xff, 0xfe, 0x00, 0x01]);
    let (api, _) = api(td.path());
    assert!(api.check_compose().is_none());
}

#[test]
fn compose_check_never_blocks_diagnose() {
    let td = with_temp_root();
    std::fs::create_dir(td.path().join("docker-compose.yml")).unwrap();
    write_file(td.path(), "normal.txt", b"x");
    let (api, _) = api(td.path());

    let _ = api.check_compose();
    let report = api.diagnose();
    // The compose dir itself is walked like any directory; only files count.
    assert_eq!(report.files_seen, 1);
}
