//! The shared reporter base: identity, classification, and the emission
//! protocol every provenance-reporting type implements.
//!
//! A reporter is anything that can describe itself as PROV-O statements.
//! [`Reporter`] carries the state common to all of them (IRI, label, version,
//! creation time); [`Kind`] is the class dispatch table; [`ToGraph`] is the
//! recursive emission contract.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use oxigraph::model::vocab::{rdf, rdfs};
use oxigraph::model::{Literal, NamedNode, NamedNodeRef};
use uuid::Uuid;

use crate::convert;
use crate::error::{ProvWorkflowError, Result};
use crate::graph::ProvGraph;
use crate::namespace::{dcat, dcterms, prov, provwf, PWFS};
use crate::settings::Settings;

/// The built-in reporter classes and their ontology bindings.
///
/// Every concrete reporter names its kind; emission looks the class IRI and
/// the built-in ancestry up here instead of rewriting type statements after
/// the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Reporter,
    Agent,
    Person,
    Machine,
    Entity,
    DataService,
    ErrorEntity,
    Activity,
    Block,
    Workflow,
}

impl Kind {
    /// The ontology class instances of this kind are typed as.
    pub fn class_iri(self) -> NamedNodeRef<'static> {
        match self {
            Kind::Reporter => provwf::PROV_REPORTER,
            Kind::Agent => prov::AGENT,
            Kind::Person => prov::PERSON,
            Kind::Machine => provwf::MACHINE,
            Kind::Entity => prov::ENTITY,
            Kind::DataService => dcat::DATA_SERVICE,
            Kind::ErrorEntity => provwf::ERROR_ENTITY,
            Kind::Activity => prov::ACTIVITY,
            Kind::Block => provwf::BLOCK,
            Kind::Workflow => provwf::WORKFLOW,
        }
    }

    /// The immediate built-in ancestor, `None` for the root.
    pub fn parent(self) -> Option<Kind> {
        match self {
            Kind::Reporter => None,
            Kind::Agent | Kind::Entity | Kind::Activity => Some(Kind::Reporter),
            Kind::Person | Kind::Machine => Some(Kind::Agent),
            Kind::DataService | Kind::ErrorEntity => Some(Kind::Entity),
            Kind::Block | Kind::Workflow => Some(Kind::Activity),
        }
    }

    /// Whether callers may specialise this kind with their own class IRI.
    pub fn specialisable(self) -> bool {
        matches!(self, Kind::Block | Kind::Workflow)
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Reporter => "Reporter",
            Kind::Agent => "Agent",
            Kind::Person => "Person",
            Kind::Machine => "Machine",
            Kind::Entity => "Entity",
            Kind::DataService => "DataService",
            Kind::ErrorEntity => "ErrorEntity",
            Kind::Activity => "Activity",
            Kind::Block => "Block",
            Kind::Workflow => "Workflow",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check the specialisation rule at construction time.
///
/// Built-in construction must not carry a class IRI; specialised construction
/// must carry one, and it must parse as an absolute IRI. Returns the parsed
/// class IRI for the specialised case.
pub fn validate_specialisation(
    kind: Kind,
    specialised: bool,
    class_iri: Option<&str>,
) -> Result<Option<NamedNode>> {
    match (specialised, class_iri) {
        (false, None) => Ok(None),
        (false, Some(_)) => Err(ProvWorkflowError::SpecialisationTagForbidden {
            kind: kind.name(),
        }),
        (true, None) => Err(ProvWorkflowError::SpecialisationTagMissing { kind: kind.name() }),
        (true, Some(iri)) => {
            let parsed = NamedNode::new(iri).map_err(|source| {
                ProvWorkflowError::SpecialisationTagInvalid {
                    iri: iri.to_string(),
                    source,
                }
            })?;
            Ok(Some(parsed))
        }
    }
}

/// State shared by every provenance reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reporter {
    /// Stable identifier; minted under the instance namespace when the
    /// caller does not supply one.
    pub iri: NamedNode,
    pub label: Option<String>,
    /// Scope for the emitted statements when this reporter is the emission
    /// root. `None` means the default graph.
    pub named_graph_iri: Option<NamedNode>,
    /// Specialisation class, present only on specialised reporters.
    pub class_iri: Option<NamedNode>,
    /// Version of the software that produced this reporter; falls back to
    /// the instance IRI when no version was configured.
    pub version_iri: NamedNode,
    pub created: DateTime<Utc>,
}

impl Reporter {
    /// Build a base record with a freshly minted identifier.
    pub(crate) fn create(kind: Kind, specialised: bool, class_iri: Option<&str>) -> Result<Self> {
        let class_iri = validate_specialisation(kind, specialised, class_iri)?;
        Ok(Self::minted(class_iri))
    }

    /// Mint an identifier in the instance namespace. Infallible: the
    /// built-in constructors have no validation to run.
    pub(crate) fn minted(class_iri: Option<NamedNode>) -> Self {
        // PWFS plus a UUID is always a valid IRI.
        let iri = NamedNode::new_unchecked(format!("{PWFS}{}", Uuid::now_v7()));
        Self::assemble(iri, class_iri)
    }

    /// Build a base record around a caller-supplied identifier.
    pub(crate) fn create_with_iri(
        kind: Kind,
        iri: &str,
        specialised: bool,
        class_iri: Option<&str>,
    ) -> Result<Self> {
        let class_iri = validate_specialisation(kind, specialised, class_iri)?;
        let iri = convert::named_node(iri)?;
        Ok(Self::assemble(iri, class_iri))
    }

    fn assemble(iri: NamedNode, class_iri: Option<NamedNode>) -> Self {
        let version_iri = Settings::global().resolve_version_iri(&iri);
        Self {
            iri,
            label: None,
            named_graph_iri: None,
            class_iri,
            version_iri,
            created: Utc::now(),
        }
    }

    /// Emit the base layer: exactly one most-specific `rdf:type` statement
    /// (plus the subclass edge for specialisations), creation time, and the
    /// label when present.
    pub(crate) fn emit_base(&self, kind: Kind, graph: &mut ProvGraph) {
        match &self.class_iri {
            Some(class) => {
                graph.insert(&self.iri, rdf::TYPE, class);
                graph.insert(class, rdfs::SUB_CLASS_OF, kind.class_iri());
            }
            None => {
                graph.insert(&self.iri, rdf::TYPE, kind.class_iri());
            }
        }
        graph.insert(
            &self.iri,
            dcterms::CREATED,
            &convert::datetime_literal(&self.created),
        );
        if let Some(label) = &self.label {
            graph.insert(&self.iri, rdfs::LABEL, &Literal::new_simple_literal(label));
        }
    }
}

/// Identifiers already emitted in the current traversal.
///
/// Keyed by IRI so shared nodes (the same entity used by several blocks)
/// emit their statements once and traversal stays linear.
pub type Visited = HashSet<NamedNode>;

/// The recursive emission contract.
///
/// `emit` writes this reporter's statements plus those of every reporter
/// reachable from it into the supplied graph. [`ToGraph::prov_to_graph`] is
/// the top-level entry point callers use.
pub trait ToGraph {
    fn kind(&self) -> Kind;

    fn reporter(&self) -> &Reporter;

    fn emit(&self, graph: &mut ProvGraph, visited: &mut Visited) -> Result<()>;

    /// Emit into `graph`, or into a fresh graph scoped to this reporter's
    /// `named_graph_iri` when none is supplied.
    fn prov_to_graph(&self, graph: Option<ProvGraph>) -> Result<ProvGraph> {
        let mut graph = graph.unwrap_or_else(|| match &self.reporter().named_graph_iri {
            Some(scope) => ProvGraph::named(scope.clone()),
            None => ProvGraph::new(),
        });
        let mut visited = Visited::new();
        self.emit(&mut graph, &mut visited)?;
        Ok(graph)
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table_ancestry() {
        assert_eq!(Kind::Person.parent(), Some(Kind::Agent));
        assert_eq!(Kind::Agent.parent(), Some(Kind::Reporter));
        assert_eq!(Kind::DataService.parent(), Some(Kind::Entity));
        assert_eq!(Kind::ErrorEntity.parent(), Some(Kind::Entity));
        assert_eq!(Kind::Block.parent(), Some(Kind::Activity));
        assert_eq!(Kind::Workflow.parent(), Some(Kind::Activity));
        assert_eq!(Kind::Reporter.parent(), None);
    }

    #[test]
    fn only_activities_are_specialisable() {
        assert!(Kind::Block.specialisable());
        assert!(Kind::Workflow.specialisable());
        assert!(!Kind::Entity.specialisable());
        assert!(!Kind::Person.specialisable());
    }

    #[test]
    fn builtin_construction_rejects_class_iri() {
        let err = validate_specialisation(Kind::Block, false, Some("https://example.com/C"))
            .unwrap_err();
        assert!(matches!(
            err,
            ProvWorkflowError::SpecialisationTagForbidden { kind: "Block" }
        ));
    }

    #[test]
    fn specialised_construction_requires_class_iri() {
        let err = validate_specialisation(Kind::Workflow, true, None).unwrap_err();
        assert!(matches!(
            err,
            ProvWorkflowError::SpecialisationTagMissing { kind: "Workflow" }
        ));
    }

    #[test]
    fn specialisation_class_must_be_absolute() {
        let err = validate_specialisation(Kind::Block, true, Some("MyBlock")).unwrap_err();
        assert!(matches!(
            err,
            ProvWorkflowError::SpecialisationTagInvalid { ref iri, .. } if iri == "MyBlock"
        ));
    }

    #[test]
    fn valid_specialisation_parses() {
        let class = validate_specialisation(Kind::Block, true, Some("https://example.com/MyBlock"))
            .unwrap();
        assert_eq!(
            class,
            Some(NamedNode::new("https://example.com/MyBlock").unwrap())
        );
    }

    #[test]
    fn minted_iri_lives_in_instance_namespace() {
        let base = Reporter::create(Kind::Entity, false, None).unwrap();
        assert!(base.iri.as_str().starts_with(PWFS));
        let suffix = &base.iri.as_str()[PWFS.len()..];
        let parsed = Uuid::parse_str(suffix).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn base_layer_has_one_type_statement() {
        let base = Reporter::create(Kind::Entity, false, None).unwrap();
        let mut g = ProvGraph::new();
        base.emit_base(Kind::Entity, &mut g);
        let types: Vec<_> = g
            .iter()
            .filter(|q| q.predicate == rdf::TYPE)
            .collect();
        assert_eq!(types.len(), 1);
        assert!(g.contains(&base.iri, rdf::TYPE, prov::ENTITY));
    }

    #[test]
    fn specialised_base_layer_adds_subclass_edge() {
        let base = Reporter::create(Kind::Block, true, Some("https://example.com/MyBlock"))
            .unwrap();
        let mut g = ProvGraph::new();
        base.emit_base(Kind::Block, &mut g);
        let class = NamedNode::new("https://example.com/MyBlock").unwrap();
        assert!(g.contains(&base.iri, rdf::TYPE, &class));
        assert!(!g.contains(&base.iri, rdf::TYPE, provwf::BLOCK));
        assert!(g.contains(&class, rdfs::SUB_CLASS_OF, provwf::BLOCK));
    }

    #[test]
    fn label_and_created_are_emitted() {
        let mut base = Reporter::create(Kind::Agent, false, None).unwrap();
        base.label = Some("builder".to_string());
        let mut g = ProvGraph::new();
        base.emit_base(Kind::Agent, &mut g);
        assert!(g.contains(
            &base.iri,
            rdfs::LABEL,
            &Literal::new_simple_literal("builder")
        ));
        assert!(g.contains(
            &base.iri,
            dcterms::CREATED,
            &convert::datetime_literal(&base.created)
        ));
    }
}
