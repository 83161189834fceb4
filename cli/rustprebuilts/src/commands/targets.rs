//! `rustprebuilts targets`: list prebuilt target variants.

use anyhow::Result;

use rustprebuilts_targets::{BuildOs, TARGETS};

/// Print the descriptor table, marking variants populated on `current`.
pub fn run(current: BuildOs) -> Result<()> {
    print!("{}", render(current));
    Ok(())
}

fn render(current: BuildOs) -> String {
    let mut out = String::new();
    out.push_str(&format!("Prebuilt targets (build host: {current}):\n\n"));
    for t in TARGETS {
        let marker = if t.host == current { "*" } else { " " };
        out.push_str(&format!(
            "{marker} {:<20} {:<16} {:<28} {}\n",
            t.key,
            t.family,
            t.triple,
            t.dylib_extension()
        ));
    }
    out.push_str("\n(*) populated on this host\n");
    out
}
