//! Blocks: the individual activities a workflow is made of.

use chrono::{DateTime, Utc};

use crate::agent::Agent;
use crate::convert;
use crate::entity::Entity;
use crate::error::Result;
use crate::graph::ProvGraph;
use crate::namespace::{owl, prov};
use crate::reporter::{Kind, Reporter, ToGraph, Visited};

/// A `provwf:Block`: one step of a workflow, consuming and producing
/// entities.
///
/// Blocks may be specialised with a caller-owned ontology class via
/// [`Block::specialised`]; the emitted type statement then uses that class
/// and a single `rdfs:subClassOf` edge records the built-in ancestry.
#[derive(Debug, Clone)]
pub struct Block {
    pub base: Reporter,
    pub used: Vec<Entity>,
    pub generated: Vec<Entity>,
    pub was_associated_with: Option<Agent>,
    /// Set when the block is constructed.
    pub started_at: DateTime<Utc>,
    /// Set by [`Block::finish`], or directly by the caller.
    pub ended_at: Option<DateTime<Utc>>,
}

impl Block {
    pub fn new() -> Self {
        Self::assemble(Reporter::minted(None))
    }

    pub fn with_iri(iri: &str) -> Result<Self> {
        Ok(Self::assemble(Reporter::create_with_iri(
            Kind::Block,
            iri,
            false,
            None,
        )?))
    }

    /// A block typed by the caller's own class IRI.
    pub fn specialised(class_iri: &str) -> Result<Self> {
        Ok(Self::assemble(Reporter::create(
            Kind::Block,
            true,
            Some(class_iri),
        )?))
    }

    /// Record the block as finished now.
    pub fn finish(&mut self) {
        self.ended_at = Some(Utc::now());
    }

    fn assemble(base: Reporter) -> Self {
        Self {
            base,
            used: Vec::new(),
            generated: Vec::new(),
            was_associated_with: None,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    /// The activity layer shared with workflows: version, timing,
    /// association.
    pub(crate) fn emit_activity(
        base: &Reporter,
        started_at: &DateTime<Utc>,
        ended_at: Option<&DateTime<Utc>>,
        was_associated_with: Option<&Agent>,
        graph: &mut ProvGraph,
        visited: &mut Visited,
    ) -> Result<()> {
        graph.insert(
            &base.iri,
            owl::VERSION_IRI,
            &convert::iri_literal(&base.version_iri),
        );
        graph.insert(
            &base.iri,
            prov::STARTED_AT_TIME,
            &convert::datetime_literal(started_at),
        );
        if let Some(ended_at) = ended_at {
            graph.insert(
                &base.iri,
                prov::ENDED_AT_TIME,
                &convert::datetime_literal(ended_at),
            );
        }
        if let Some(agent) = was_associated_with {
            agent.emit(graph, visited)?;
            graph.insert(&base.iri, prov::WAS_ASSOCIATED_WITH, &agent.base.iri);
        }
        Ok(())
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

impl ToGraph for Block {
    fn kind(&self) -> Kind {
        Kind::Block
    }

    fn reporter(&self) -> &Reporter {
        &self.base
    }

    fn emit(&self, graph: &mut ProvGraph, visited: &mut Visited) -> Result<()> {
        if !visited.insert(self.base.iri.clone()) {
            return Ok(());
        }
        self.base.emit_base(Kind::Block, graph);
        Self::emit_activity(
            &self.base,
            &self.started_at,
            self.ended_at.as_ref(),
            self.was_associated_with.as_ref(),
            graph,
            visited,
        )?;
        for entity in &self.used {
            entity.emit(graph, visited)?;
            graph.insert(&self.base.iri, prov::USED, &entity.base.iri);
        }
        for entity in &self.generated {
            entity.emit(graph, visited)?;
            graph.insert(&self.base.iri, prov::GENERATED, &entity.base.iri);
        }
        Ok(())
    }
}

// --- tests -------------------------------------------------------------------
