//! Agents: who or what a piece of provenance is attributed to.

use oxigraph::model::Literal;

use crate::error::Result;
use crate::graph::ProvGraph;
use crate::namespace::{prov, sdo};
use crate::reporter::{Kind, Reporter, ToGraph, Visited};

/// A `prov:Agent`, `prov:Person`, or `provwf:Machine`.
///
/// Construct with [`Agent::new`], [`Agent::person`], or [`Agent::machine`],
/// then fill in the public fields:
///
/// ```rust,ignore
/// let mut operator = Agent::person();
/// operator.base.label = Some("Pat".into());
/// operator.email = Some("pat@example.com".into());
///
/// let mut runner = Agent::machine();
/// runner.acted_on_behalf_of = Some(Box::new(operator));
/// ```
#[derive(Debug, Clone)]
pub struct Agent {
    pub base: Reporter,
    kind: Kind,
    /// Contact address, emitted as `sdo:email`. Usually set on persons.
    pub email: Option<String>,
    /// The agent this one was delegating for (`prov:actedOnBehalfOf`).
    pub acted_on_behalf_of: Option<Box<Agent>>,
}

impl Agent {
    pub fn new() -> Self {
        Self::minted(Kind::Agent)
    }

    pub fn person() -> Self {
        Self::minted(Kind::Person)
    }

    pub fn machine() -> Self {
        Self::minted(Kind::Machine)
    }

    /// An agent identified by an existing IRI rather than a minted one.
    pub fn with_iri(iri: &str) -> Result<Self> {
        Self::identified(Kind::Agent, iri)
    }

    pub fn person_with_iri(iri: &str) -> Result<Self> {
        Self::identified(Kind::Person, iri)
    }

    pub fn machine_with_iri(iri: &str) -> Result<Self> {
        Self::identified(Kind::Machine, iri)
    }

    fn minted(kind: Kind) -> Self {
        Self {
            base: Reporter::minted(None),
            kind,
            email: None,
            acted_on_behalf_of: None,
        }
    }

    fn identified(kind: Kind, iri: &str) -> Result<Self> {
        Ok(Self {
            base: Reporter::create_with_iri(kind, iri, false, None)?,
            kind,
            email: None,
            acted_on_behalf_of: None,
        })
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl ToGraph for Agent {
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
        if let Some(email) = &self.email {
            graph.insert(&self.base.iri, sdo::EMAIL, &Literal::new_simple_literal(email));
        }
        if let Some(delegator) = &self.acted_on_behalf_of {
            delegator.emit(graph, visited)?;
            graph.insert(&self.base.iri, prov::ACTED_ON_BEHALF_OF, &delegator.base.iri);
        }
        Ok(())
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use oxigraph::model::vocab::rdf;
    use crate::namespace::provwf;

    #[test]
    fn person_is_typed_and_mailed() {
        let mut person = Agent::person();
        person.email = Some("pat@example.com".to_string());
        let g = person.prov_to_graph(None).unwrap();
        assert!(g.contains(&person.base.iri, rdf::TYPE, prov::PERSON));
        assert!(g.contains(
            &person.base.iri,
            sdo::EMAIL,
            &Literal::new_simple_literal("pat@example.com")
        ));
    }

    #[test]
    fn machine_uses_workflow_ontology_class() {
        let machine = Agent::machine();
        let g = machine.prov_to_graph(None).unwrap();
        assert!(g.contains(&machine.base.iri, rdf::TYPE, provwf::MACHINE));
    }

    #[test]
    fn delegation_chain_is_followed() {
        let mut operator = Agent::person();
        operator.base.label = Some("Pat".to_string());
        let operator_iri = operator.base.iri.clone();
        let mut runner = Agent::machine();
        runner.acted_on_behalf_of = Some(Box::new(operator));

        let g = runner.prov_to_graph(None).unwrap();
        assert!(g.contains(&runner.base.iri, prov::ACTED_ON_BEHALF_OF, &operator_iri));
        assert!(g.contains(&operator_iri, rdf::TYPE, prov::PERSON));
    }

    #[test]
    fn caller_supplied_iri_must_be_absolute() {
        assert!(Agent::with_iri("not absolute").is_err());
        assert!(Agent::with_iri("https://example.com/agents/ci").is_ok());
    }
}
