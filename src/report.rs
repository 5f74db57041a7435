use crate::frequency::{FrequencyTable, UNREACHABLE};
use crate::separation::SeparationSummary;

pub struct Labels<'a> {
    pub title: &'a str,
    pub key: &'a str,
    pub count: &'a str,
}

impl<'a> Labels<'a> {
    pub fn separation(title: &'a str) -> Self {
        Self {
            title,
            key: "Degrees of Separation",
            count: "Frequency",
        }
    }
}

const RULE: &str = "---------------------\t\t--------------------";

fn header(title: &str, labels: &Labels<'_>) -> String {
    format!("{title}\n{:<20}\t\t{:<20}\n{RULE}\n", labels.key, labels.count)
}

fn row(key: &str, count: usize) -> String {
    format!("{key:<20}\t\t{count:>20}\n")
}

fn key_text(key: u32) -> String {
    if key == UNREACHABLE {
        "inf".to_string()
    } else {
        key.to_string()
    }
}

/// One row per key, ascending.
pub fn render_table(table: &FrequencyTable, labels: &Labels<'_>) -> String {
    let mut out = header(labels.title, labels);
    for (key, count) in table.iter() {
        out.push_str(&row(&key_text(key), count));
    }
    out
}

/// Rows of `bin_size` consecutive keys from the smallest to the largest finite key.
/// The unreachable bucket keeps its own row.
pub fn render_binned(table: &FrequencyTable, labels: &Labels<'_>, bin_size: u32) -> String {
    let bin_size = bin_size.max(1);
    let mut out = header(&format!("{} (binSize={bin_size})", labels.title), labels);

    let finite_max = table.keys().filter(|&k| k != UNREACHABLE).last();
    if let (Ok(min), Some(max)) = (table.minimum(), finite_max) {
        let mut lo = min;
        while lo <= max {
            let hi = lo.saturating_add(bin_size - 1).min(UNREACHABLE - 1);
            out.push_str(&row(&format!("{lo}-{hi}"), table.total(lo, hi)));
            match hi.checked_add(1) {
                Some(next) => lo = next,
                None => break,
            }
        }
    }
    let unreachable = table.count(UNREACHABLE);
    if unreachable > 0 {
        out.push_str(&row(&key_text(UNREACHABLE), unreachable));
    }
    out
}

/// Plain-text summary block printed after a traversal.
pub fn render_summary(summary: &SeparationSummary, bin_size: Option<u32>) -> String {
    let mut out = format!(
        "Graph ({}) with {} vertices & {} edges traversed from {}.\n",
        summary.scheme, summary.vertices, summary.edges, summary.source
    );
    let title = format!("Frequency Chart for: {}", summary.source);
    let labels = Labels::separation(&title);
    out.push('\n');
    match bin_size {
        Some(bin) => out.push_str(&render_binned(&summary.frequencies, &labels, bin)),
        None => out.push_str(&render_table(&summary.frequencies, &labels)),
    }
    out.push('\n');
    let separation = match summary.average_separation {
        Some(avg) => format!("{avg:.5}"),
        None => "infinity".to_string(),
    };
    out.push_str(&format!("Separation number: {separation}\n"));
    out
}
