use reclaim::logging::JsonlSink;
use reclaim::policy::Policy;
use reclaim::types::ApplyMode;
use reclaim::Reclaim;

fn main() {
    let facts = JsonlSink::default();
    let audit = JsonlSink::default();
    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let api = Reclaim::new(facts, audit, Policy::scan_root(root));

    let report = api.diagnose();
    println!(
        "scanned {} files, {} owned by a foreign uid",
        report.files_seen,
        report.mismatches.len()
    );

    if let Some(advisory) = api.check_compose() {
        println!("{}", advisory.render());
    }

    let fix = api.fix(&report.mismatches, ApplyMode::DryRun);
    for line in &fix.preview {
        println!("  {line}");
    }
    if fix.hidden > 0 {
        println!("  ... and {} more", fix.hidden);
    }
}
