//! Shared fixtures for the provworkflow conformance test suite.
//!
//! Provides [`two_block_workflow`] — a fully wired two-block pipeline with
//! every interesting entity role represented: plain local data, a
//! caller-identified endpoint, an interior intermediate result, an
//! externally stored product, and a final output. Tests get the workflow
//! plus the identifiers of each participant so they can assert on the
//! emitted statements directly.

use oxigraph::model::NamedNode;
use provworkflow::{Agent, Block, Entity, Workflow};

/// A two-block pipeline and the IRIs of everything in it.
///
/// Shape:
///
/// ```text
/// fetch:   used {local, endpoint}        generated {intermediate, external}
/// combine: used {other, intermediate, external}   generated {output}
/// ```
///
/// `external` is marked as produced outside the workflow. The expected
/// boundary after emission: the workflow used `{local, endpoint, other}` and
/// generated `{output, external}`; `intermediate` stays interior.
pub struct TwoBlockFixture {
    pub workflow: Workflow,
    pub local: NamedNode,
    pub endpoint: NamedNode,
    pub intermediate: NamedNode,
    pub external: NamedNode,
    pub other: NamedNode,
    pub output: NamedNode,
    pub fetch_block: NamedNode,
    pub combine_block: NamedNode,
}

/// Build the fixture.
///
/// # Panics
///
/// Panics if any of the fixed fixture IRIs fail to parse, which would be a
/// bug in the fixture itself.
pub fn two_block_workflow() -> TwoBlockFixture {
    let mut local = Entity::new();
    local.value = Some(serde_json::json!("local data"));
    let endpoint = Entity::with_iri("http://example.com/endpoint").expect("fixture IRI");
    let intermediate = Entity::new();
    let mut external = Entity::new();
    external.external = true;
    let mut other = Entity::new();
    other.base.label = Some("other data".to_string());
    let output = Entity::with_iri("http://somewhere-on-s3/d/e/f").expect("fixture IRI");

    let ids = (
        local.base.iri.clone(),
        endpoint.base.iri.clone(),
        intermediate.base.iri.clone(),
        external.base.iri.clone(),
        other.base.iri.clone(),
        output.base.iri.clone(),
    );

    let mut fetch = Block::new();
    fetch.used.push(local);
    fetch.used.push(endpoint);
    fetch.generated.push(intermediate.clone());
    fetch.generated.push(external.clone());
    fetch.finish();

    let mut combine = Block::new();
    combine.used.push(other);
    combine.used.push(intermediate);
    combine.used.push(external);
    combine.generated.push(output);
    combine.finish();

    let mut workflow = Workflow::new();
    workflow.base.label = Some("Two Block Workflow".to_string());
    let mut runner = Agent::machine();
    runner.base.label = Some("pipeline-runner".to_string());
    workflow.was_associated_with = Some(runner);
    let fetch_block = fetch.base.iri.clone();
    let combine_block = combine.base.iri.clone();
    workflow.blocks.push(fetch);
    workflow.blocks.push(combine);
    workflow.finish();

    TwoBlockFixture {
        workflow,
        local: ids.0,
        endpoint: ids.1,
        intermediate: ids.2,
        external: ids.3,
        other: ids.4,
        output: ids.5,
        fetch_block,
        combine_block,
    }
}
