//! Entities: the data a workflow consumes and produces.

use oxigraph::model::Literal;

use crate::agent::Agent;
use crate::block::Block;
use crate::convert;
use crate::error::Result;
use crate::graph::ProvGraph;
use crate::namespace::{dcat, prov, provwf};
use crate::reporter::{Kind, Reporter, ToGraph, Visited};

/// A `prov:Entity`, `dcat:DataService`, or `provwf:ErrorEntity`.
///
/// All relationship fields are plain public fields in the style of the rest
/// of the crate: construct, then attach.
#[derive(Debug, Clone)]
pub struct Entity {
    pub base: Reporter,
    kind: Kind,
    /// Opaque payload, emitted as a typed `prov:value` literal.
    pub value: Option<serde_json::Value>,
    /// Endpoint of a data service (`dcat:accessURL`). Must be an absolute
    /// IRI; checked at emission.
    pub access_uri: Option<String>,
    /// Query or parameters sent to a data service
    /// (`provwf:serviceParameters`).
    pub service_parameters: Option<String>,
    /// Datasets a data service exposes (`dcat:servesDataset`).
    pub serves_datasets: Vec<Entity>,
    /// Blocks that consumed this entity; emitted as inverse `prov:used`
    /// statements with the block as subject.
    pub was_used_by: Vec<Block>,
    /// Blocks that produced this entity; emitted as inverse `prov:generated`
    /// statements with the block as subject.
    pub was_generated_by: Vec<Block>,
    pub was_attributed_to: Option<Agent>,
    pub was_revision_of: Option<Box<Entity>>,
    /// Marks an entity produced outside this workflow. The owning workflow
    /// re-homes it during emission: the transient marker statement is
    /// replaced by `prov:generated` from the workflow itself.
    pub external: bool,
}

impl Entity {
    pub fn new() -> Self {
        Self::minted(Kind::Entity)
    }

    pub fn with_iri(iri: &str) -> Result<Self> {
        Self::identified(Kind::Entity, iri)
    }

    pub fn data_service() -> Self {
        Self::minted(Kind::DataService)
    }

    pub fn data_service_with_iri(iri: &str) -> Result<Self> {
        Self::identified(Kind::DataService, iri)
    }

    /// An entity standing in for a failed production step. Label and value
    /// default to the `"ERROR"` sentinel so failures stay visible in the
    /// output graph even when the caller records nothing else.
    pub fn error() -> Self {
        let mut entity = Self::minted(Kind::ErrorEntity);
        entity.base.label = Some("ERROR".to_string());
        entity.value = Some(serde_json::Value::String("ERROR".to_string()));
        entity
    }

    fn minted(kind: Kind) -> Self {
        Self::assemble(Reporter::minted(None), kind)
    }

    fn identified(kind: Kind, iri: &str) -> Result<Self> {
        Ok(Self::assemble(
            Reporter::create_with_iri(kind, iri, false, None)?,
            kind,
        ))
    }

    fn assemble(base: Reporter, kind: Kind) -> Self {
        Self {
            base,
            kind,
            value: None,
            access_uri: None,
            service_parameters: None,
            serves_datasets: Vec::new(),
            was_used_by: Vec::new(),
            was_generated_by: Vec::new(),
            was_attributed_to: None,
            was_revision_of: None,
            external: false,
        }
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl ToGraph for Entity {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn reporter(&self) -> &Reporter {
        &self.base
    }

    fn emit(&self, graph: &mut ProvGraph, visited: &mut Visited) -> Result<()> {
        if !visited.insert(self.base.iri.clone()) {
            return Ok(());
        }
        self.base.emit_base(self.kind, graph);

        if let Some(value) = &self.value {
            graph.insert(&self.base.iri, prov::VALUE, &convert::json_literal(value));
        }
        if let Some(access_uri) = &self.access_uri {
            graph.insert(
                &self.base.iri,
                dcat::ACCESS_URL,
                &convert::named_node(access_uri)?,
            );
        }
        if let Some(parameters) = &self.service_parameters {
            graph.insert(
                &self.base.iri,
                provwf::SERVICE_PARAMETERS,
                &Literal::new_simple_literal(parameters),
            );
        }
        for dataset in &self.serves_datasets {
            dataset.emit(graph, visited)?;
            graph.insert(&self.base.iri, dcat::SERVES_DATASET, &dataset.base.iri);
        }

        for block in &self.was_used_by {
            block.emit(graph, visited)?;
            graph.insert(&block.base.iri, prov::USED, &self.base.iri);
        }
        for block in &self.was_generated_by {
            block.emit(graph, visited)?;
            graph.insert(&block.base.iri, prov::GENERATED, &self.base.iri);
        }
        if let Some(agent) = &self.was_attributed_to {
            agent.emit(graph, visited)?;
            graph.insert(&self.base.iri, prov::WAS_ATTRIBUTED_TO, &agent.base.iri);
        }
        if let Some(earlier) = &self.was_revision_of {
            earlier.emit(graph, visited)?;
            graph.insert(&self.base.iri, prov::WAS_REVISION_OF, &earlier.base.iri);
        }
        if self.external {
            graph.insert(&self.base.iri, provwf::EXTERNAL, &Literal::from(true));
        }
        Ok(())
    }
}

// --- tests -------------------------------------------------------------------
