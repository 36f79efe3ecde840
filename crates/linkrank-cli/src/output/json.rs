//! JSON output formatter

use linkrank_core::{IterationReport, RankVector, SamplingReport};

pub fn format_report(sampling: &SamplingReport, iteration: &IterationReport) -> String {
    let output = serde_json::json!({
        "sampling": {
            "samples": sampling.samples,
            "ranks": ranks_object(&sampling.ranks),
        },
        "iteration": {
            "iterations": iteration.iterations,
            "converged": iteration.converged,
            "delta": iteration.delta,
            "ranks": ranks_object(&iteration.ranks),
        },
    });

    serde_json::to_string_pretty(&output).expect("a json! value always serializes") + "\n"
}

fn ranks_object(ranks: &RankVector) -> serde_json::Map<String, serde_json::Value> {
    ranks
        .iter()
        .map(|(page, rank)| (page.to_string(), serde_json::json!(rank)))
        .collect()
}
