//! Terminal output formatter

use linkrank_core::{IterationReport, RankVector, SamplingReport};

pub fn format_report(sampling: &SamplingReport, iteration: &IterationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "PageRank Results from Sampling (n = {})\n",
        sampling.samples
    ));
    push_ranks(&mut output, &sampling.ranks);

    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &iteration.ranks);

    output
}

/// One line per page, alphabetical, four decimals
fn push_ranks(output: &mut String, ranks: &RankVector) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}
