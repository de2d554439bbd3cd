//! Integration tests exercising the indexer façade as a black box.

mod common;

#[path = "integration/end_to_end.rs"]
mod end_to_end;

#[path = "integration/persistence.rs"]
mod persistence;

#[path = "integration/link_graph_ranking.rs"]
mod link_graph_ranking;
