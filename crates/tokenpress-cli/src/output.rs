//! End-of-stage summaries printed to stdout.

use std::path::Path;

use tokenpress_codegen::GenerationReport;
use tokenpress_tailwind::assemble::MISSING_FILE;

pub(crate) fn fetch_summary(path: &Path, collections: usize, variables: usize) -> String {
    format!(
        "fetched {collections} collections and {variables} variables into {}",
        path.display()
    )
}

pub(crate) fn generation_summary(report: &GenerationReport) -> String {
    let mut line = format!(
        "generated {} declarations into {} artifacts",
        report.declarations, report.artifacts_written
    );
    if report.skipped > 0 {
        line.push_str(&format!(", {} tokens skipped", report.skipped));
    }
    if report.lookup_misses > 0 {
        line.push_str(&format!(", {} lookup misses", report.lookup_misses));
    }
    if report.artifacts_skipped > 0 {
        line.push_str(&format!(
            ", {} artifacts not written",
            report.artifacts_skipped
        ));
    }
    line
}

pub(crate) fn tailwind_summary(dir: &Path, written: usize, unbound: usize) -> String {
    let mut line = format!("wrote {written} tailwind artifacts into {}", dir.display());
    if unbound > 0 {
        line.push_str(&format!(
            ", {unbound} unbound declarations in {MISSING_FILE}"
        ));
    }
    line
}

pub(crate) fn render(line: &str) {
    println!("{line}");
}
