//! Non-interactive rendering of the derived view.
//!
//! `--snapshot text` prints one block per domain, `--snapshot json` prints the
//! serialized `MatrixView`. Both show exactly what the interactive grid would
//! show for the same filter state.

use std::io::Write;

use crate::error::Result;
use crate::models::SnapshotFormat;
use crate::view::{DomainView, MatrixView};

/// Plain-text rendering of the view
pub fn render_text(view: &MatrixView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Pattern: {}\n", view.active_pattern));

    for domain in &view.domains {
        out.push('\n');
        render_domain(&mut out, domain);
    }
    out
}

fn render_domain(out: &mut String, domain: &DomainView) {
    out.push_str(&format!("{} [{}]\n", domain.label, domain.annotation));
    for stage in &domain.stages {
        let marker = if stage.enabled { "" } else { " (filtered)" };
        let chips: Vec<String> = stage
            .activities
            .iter()
            .map(|a| format!("{} [{}]", a.name, a.role.code()))
            .collect();
        let chips = if chips.is_empty() {
            "-".to_string()
        } else {
            chips.join(", ")
        };
        out.push_str(&format!("  {}{}: {}\n", stage.stage.label(), marker, chips));
    }
}

/// Write the view to `writer` in `format`
pub fn write_snapshot<W: Write>(
    writer: &mut W,
    view: &MatrixView,
    format: SnapshotFormat,
) -> Result<()> {
    match format {
        SnapshotFormat::Text => writer.write_all(render_text(view).as_bytes())?,
        SnapshotFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, view)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}
