//! A two-block pipeline: fetch data from two places, combine, store.
//!
//! Run with `cargo run --example simple_workflow`. Prints the provenance
//! graph as TriG.

use provworkflow::{Agent, Block, Entity, ProvWorkflowError, ToGraph, Workflow};

fn main() -> Result<(), ProvWorkflowError> {
    let mut workflow = Workflow::new();
    workflow.base.label = Some("Two Block Workflow".to_string());

    let mut runner = Agent::machine();
    runner.base.label = Some("pipeline-runner".to_string());
    workflow.was_associated_with = Some(runner);

    // Block 1: read a local file and a remote endpoint, produce an
    // intermediate result plus a dataset that lands directly on storage.
    let mut fetch = Block::new();
    let mut local = Entity::new();
    local.value = Some(serde_json::json!("local data"));
    fetch.used.push(local);
    fetch
        .used
        .push(Entity::with_iri("http://example.com/endpoint")?);

    let intermediate = Entity::new();
    let mut stored_elsewhere = Entity::new();
    stored_elsewhere.external = true;
    fetch.generated.push(intermediate.clone());
    fetch.generated.push(stored_elsewhere.clone());
    fetch.finish();
    workflow.blocks.push(fetch);

    // Block 2: combine everything into the final output.
    let mut combine = Block::new();
    let mut config = Entity::new();
    config.base.label = Some("other data".to_string());
    combine.used.push(config);
    combine.used.push(intermediate);
    combine.used.push(stored_elsewhere);
    combine
        .generated
        .push(Entity::with_iri("http://somewhere-on-s3/d/e/f")?);
    combine.finish();
    workflow.blocks.push(combine);

    workflow.finish();
    let graph = workflow.prov_to_graph(None)?;
    print!("{}", graph.to_trig()?);
    Ok(())
}
