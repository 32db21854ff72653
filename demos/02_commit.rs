use reclaim::api::errors::exit_code;
use reclaim::logging::JsonlSink;
use reclaim::policy::Policy;
use reclaim::types::errors::ErrorKind;
use reclaim::types::ApplyMode;
use reclaim::Reclaim;

fn main() {
    let facts = JsonlSink::default();
    let audit = JsonlSink::default();
    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let api = Reclaim::new(facts, audit, Policy::scan_root(root));

    let report = api.diagnose();
    if report.mismatches.is_empty() {
        println!("no ownership mismatches detected");
        return;
    }

    println!("repairing {} paths...", report.mismatches.len());
    let fix = api.fix(&report.mismatches, ApplyMode::Commit);
    if fix.ok() {
        println!("ownership reclaimed in {} ms", fix.duration_ms);
    } else {
        for err in &fix.errors {
            eprintln!("error: {err}");
        }
        std::process::exit(exit_code(ErrorKind::Elevation));
    }
}
