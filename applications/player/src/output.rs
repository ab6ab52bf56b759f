/// Machine-readable CLI output
use crate::error::Result;
use cadence_core::SearchResults;
use serde::Serialize;

#[derive(Serialize)]
struct SourceResults<'a> {
    source: &'a str,
    results: &'a SearchResults,
}

/// Render per-source search results as a pretty-printed JSON array
pub fn search_results_json(results: &[(String, SearchResults)]) -> Result<String> {
    let output: Vec<SourceResults<'_>> = results
        .iter()
        .map(|(source, results)| SourceResults { source, results })
        .collect();
    Ok(serde_json::to_string_pretty(&output)?)
}
