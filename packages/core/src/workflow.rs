//! Workflows: ordered collections of blocks with derived boundary
//! provenance.
//!
//! A workflow emits everything its blocks emit, then derives its own
//! `prov:used` and `prov:generated` statements from the accumulated graph:
//! entities consumed but never produced inside the workflow are the
//! workflow's inputs, entities produced but never consumed are its outputs.
//! Entities marked external are re-homed onto the workflow as generated,
//! consuming their transient marker.

use chrono::{DateTime, Utc};
use oxigraph::model::{Literal, Subject, Term};
use tracing::debug;

use crate::agent::Agent;
use crate::block::Block;
use crate::error::{ProvWorkflowError, Result};
use crate::graph::ProvGraph;
use crate::namespace::{prov, provwf};
use crate::reporter::{Kind, Reporter, ToGraph, Visited};

/// A `provwf:Workflow`.
#[derive(Debug, Clone)]
pub struct Workflow {
    pub base: Reporter,
    /// Must be non-empty by emission time.
    pub blocks: Vec<Block>,
    pub was_associated_with: Option<Agent>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::assemble(Reporter::minted(None))
    }

    pub fn with_iri(iri: &str) -> Result<Self> {
        Ok(Self::assemble(Reporter::create_with_iri(
            Kind::Workflow,
            iri,
            false,
            None,
        )?))
    }

    /// A workflow typed by the caller's own class IRI.
    pub fn specialised(class_iri: &str) -> Result<Self> {
        Ok(Self::assemble(Reporter::create(
            Kind::Workflow,
            true,
            Some(class_iri),
        )?))
    }

    /// Record the workflow as finished now.
    pub fn finish(&mut self) {
        self.ended_at = Some(Utc::now());
    }

    fn assemble(base: Reporter) -> Self {
        Self {
            base,
            blocks: Vec::new(),
            was_associated_with: None,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// Derive the workflow's own used/generated statements from the block
    /// statements already in the graph.
    fn aggregate_boundary(&self, graph: &mut ProvGraph) {
        let used = graph.objects_of(prov::USED);
        let generated = graph.objects_of(prov::GENERATED);
        debug!(
            used = used.len(),
            generated = generated.len(),
            "aggregating workflow boundary"
        );
        for term in used.difference(&generated) {
            if let Term::NamedNode(entity) = term {
                graph.insert(&self.base.iri, prov::USED, entity);
            }
        }
        for term in generated.difference(&used) {
            if let Term::NamedNode(entity) = term {
                graph.insert(&self.base.iri, prov::GENERATED, entity);
            }
        }
    }

    /// Re-home externally produced entities: claim them as generated by the
    /// workflow and consume their marker so it never reaches serialization.
    fn rehome_external(&self, graph: &mut ProvGraph) {
        let marker = Literal::from(true);
        for subject in graph.subjects_with(provwf::EXTERNAL, (&marker).into()) {
            if let Subject::NamedNode(entity) = &subject {
                debug!(entity = entity.as_str(), "re-homing external entity");
                graph.insert(&self.base.iri, prov::GENERATED, entity);
                graph.remove(entity, provwf::EXTERNAL, &marker);
            }
        }
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ToGraph for Workflow {
    fn kind(&self) -> Kind {
        Kind::Workflow
    }

    fn reporter(&self) -> &Reporter {
        &self.base
    }

    fn emit(&self, graph: &mut ProvGraph, visited: &mut Visited) -> Result<()> {
        if self.blocks.is_empty() {
            return Err(ProvWorkflowError::EmptyWorkflow);
        }
        if !visited.insert(self.base.iri.clone()) {
            return Ok(());
        }
        self.base.emit_base(Kind::Workflow, graph);
        for block in &self.blocks {
            block.emit(graph, visited)?;
            graph.insert(&self.base.iri, provwf::HAD_BLOCK, &block.base.iri);
        }
        Block::emit_activity(
            &self.base,
            &self.started_at,
            self.ended_at.as_ref(),
            self.was_associated_with.as_ref(),
            graph,
            visited,
        )?;
        self.aggregate_boundary(graph);
        self.rehome_external(graph);
        Ok(())
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::namespace::owl;
    use oxigraph::model::vocab::{rdf, rdfs};
    use oxigraph::model::{NamedNode, SubjectRef};

    fn entity(iri: &str) -> Entity {
        Entity::with_iri(iri).unwrap()
    }

    #[test]
    fn empty_workflow_refuses_to_emit() {
        let workflow = Workflow::new();
        assert!(matches!(
            workflow.prov_to_graph(None),
            Err(ProvWorkflowError::EmptyWorkflow)
        ));
    }

    #[test]
    fn boundary_aggregation_uses_set_differences() {
        // b1 uses x, generates y; b2 uses y, generates z and w.
        // Inputs: {x}. Outputs: {z, w}. y is interior.
        let x = entity("https://example.com/x");
        let y = entity("https://example.com/y");
        let z = entity("https://example.com/z");
        let w = entity("https://example.com/w");
        let (xi, yi, zi, wi) = (
            x.base.iri.clone(),
            y.base.iri.clone(),
            z.base.iri.clone(),
            w.base.iri.clone(),
        );

        let mut b1 = Block::new();
        b1.used.push(x);
        b1.generated.push(y.clone());
        let mut b2 = Block::new();
        b2.used.push(y);
        b2.generated.push(z);
        b2.generated.push(w);

        let mut workflow = Workflow::new();
        workflow.blocks.push(b1);
        workflow.blocks.push(b2);

        let g = workflow.prov_to_graph(None).unwrap();
        let wf = &workflow.base.iri;
        assert!(g.contains(wf, prov::USED, &xi));
        assert!(!g.contains(wf, prov::USED, &yi));
        assert!(!g.contains(wf, prov::GENERATED, &yi));
        assert!(g.contains(wf, prov::GENERATED, &zi));
        assert!(g.contains(wf, prov::GENERATED, &wi));
    }

    #[test]
    fn blocks_are_linked_and_typed() {
        let mut workflow = Workflow::new();
        let mut block = Block::new();
        block.generated.push(Entity::new());
        let block_iri = block.base.iri.clone();
        workflow.blocks.push(block);

        let g = workflow.prov_to_graph(None).unwrap();
        assert!(g.contains(&workflow.base.iri, rdf::TYPE, provwf::WORKFLOW));
        assert!(g.contains(&workflow.base.iri, provwf::HAD_BLOCK, &block_iri));
        assert!(g.contains(
            &workflow.base.iri,
            owl::VERSION_IRI,
            &crate::convert::iri_literal(&workflow.base.version_iri)
        ));
    }

    #[test]
    fn external_entities_are_rehomed_without_leaking_the_marker() {
        let mut produced_elsewhere = entity("https://example.com/elsewhere");
        produced_elsewhere.external = true;
        let elsewhere_iri = produced_elsewhere.base.iri.clone();

        let mut block = Block::new();
        block.used.push(produced_elsewhere);
        let mut workflow = Workflow::new();
        workflow.blocks.push(block);

        let g = workflow.prov_to_graph(None).unwrap();
        assert!(g.contains(&workflow.base.iri, prov::GENERATED, &elsewhere_iri));
        assert!(!g.contains(&elsewhere_iri, provwf::EXTERNAL, &Literal::from(true)));
    }

    #[test]
    fn shared_entity_is_emitted_once() {
        let shared = entity("https://example.com/shared");
        let shared_iri = shared.base.iri.clone();
        let mut b1 = Block::new();
        b1.generated.push(shared.clone());
        let mut b2 = Block::new();
        b2.used.push(shared);
        let mut workflow = Workflow::new();
        workflow.blocks.push(b1);
        workflow.blocks.push(b2);

        let g = workflow.prov_to_graph(None).unwrap();
        let type_statements = g
            .iter()
            .filter(|q| q.subject == SubjectRef::from(&shared_iri) && q.predicate == rdf::TYPE)
            .count();
        assert_eq!(type_statements, 1);
    }

    #[test]
    fn emission_into_the_same_graph_is_idempotent() {
        let mut block = Block::new();
        block.used.push(entity("https://example.com/in"));
        block.generated.push(entity("https://example.com/out"));
        let mut workflow = Workflow::new();
        workflow.blocks.push(block);

        let first = workflow.prov_to_graph(None).unwrap();
        let len = first.len();
        let second = workflow.prov_to_graph(Some(first)).unwrap();
        assert_eq!(second.len(), len);
    }

    #[test]
    fn specialised_workflow_subclasses_workflow() {
        let mut workflow = Workflow::specialised("https://example.com/onto/Etl").unwrap();
        let mut block = Block::new();
        block.generated.push(Entity::new());
        workflow.blocks.push(block);

        let g = workflow.prov_to_graph(None).unwrap();
        let class = NamedNode::new("https://example.com/onto/Etl").unwrap();
        assert!(g.contains(&workflow.base.iri, rdf::TYPE, &class));
        assert!(g.contains(&class, rdfs::SUB_CLASS_OF, provwf::WORKFLOW));
        assert!(!g.contains(&class, rdfs::SUB_CLASS_OF, provwf::BLOCK));
    }

    #[test]
    fn named_scope_comes_from_the_workflow() {
        let mut workflow = Workflow::new();
        workflow.base.named_graph_iri =
            Some(NamedNode::new("https://example.com/graphs/run-7").unwrap());
        let mut block = Block::new();
        block.generated.push(Entity::new());
        workflow.blocks.push(block);

        let g = workflow.prov_to_graph(None).unwrap();
        let trig = g.to_trig().unwrap();
        assert!(trig.contains("run-7"));
    }
}
