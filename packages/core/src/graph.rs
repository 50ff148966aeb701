//! The statement graph reporters emit into.
//!
//! [`ProvGraph`] wraps an [`oxigraph::model::Dataset`] with the two things
//! every emitter needs: a fixed graph scope (default or named) applied to
//! each statement, and set semantics so revisiting a shared node is a no-op.
//! It also owns serialization, delegating the actual writing to
//! [`oxigraph::io::RdfSerializer`].

use std::collections::HashSet;

use oxigraph::io::{RdfFormat, RdfSerializer};
use oxigraph::model::{
    Dataset, GraphName, GraphNameRef, NamedNode, NamedNodeRef, QuadRef, Subject, SubjectRef, Term,
    TermRef,
};

use crate::error::Result;
use crate::namespace;

/// A set of provenance statements scoped to one graph name.
#[derive(Debug)]
pub struct ProvGraph {
    dataset: Dataset,
    graph_name: GraphName,
}

impl Default for ProvGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvGraph {
    /// An empty graph scoped to the default graph.
    pub fn new() -> Self {
        Self {
            dataset: Dataset::new(),
            graph_name: GraphName::DefaultGraph,
        }
    }

    /// An empty graph whose statements all land in the named graph `scope`.
    pub fn named(scope: NamedNode) -> Self {
        Self {
            dataset: Dataset::new(),
            graph_name: GraphName::NamedNode(scope),
        }
    }

    /// The scope statements are written into.
    pub fn scope(&self) -> &GraphName {
        &self.graph_name
    }

    /// Insert a statement. Returns `false` when it was already present.
    pub fn insert<'a>(
        &mut self,
        subject: impl Into<SubjectRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        let quad = QuadRef::new(
            subject.into(),
            predicate.into(),
            object.into(),
            self.graph_name.as_ref(),
        );
        self.dataset.insert(quad)
    }

    /// Remove a statement. Returns `false` when it was not present.
    pub fn remove<'a>(
        &mut self,
        subject: impl Into<SubjectRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        let quad = QuadRef::new(
            subject.into(),
            predicate.into(),
            object.into(),
            self.graph_name.as_ref(),
        );
        self.dataset.remove(quad)
    }

    pub fn contains<'a>(
        &self,
        subject: impl Into<SubjectRef<'a>>,
        predicate: impl Into<NamedNodeRef<'a>>,
        object: impl Into<TermRef<'a>>,
    ) -> bool {
        let quad = QuadRef::new(
            subject.into(),
            predicate.into(),
            object.into(),
            self.graph_name.as_ref(),
        );
        self.dataset.contains(quad)
    }

    /// All distinct objects of statements with the given predicate.
    pub fn objects_of(&self, predicate: NamedNodeRef<'_>) -> HashSet<Term> {
        self.dataset
            .iter()
            .filter(|quad| quad.predicate == predicate)
            .map(|quad| quad.object.into_owned())
            .collect()
    }

    /// All distinct subjects of statements matching predicate and object.
    pub fn subjects_with(&self, predicate: NamedNodeRef<'_>, object: TermRef<'_>) -> Vec<Subject> {
        let mut seen = HashSet::new();
        self.dataset
            .iter()
            .filter(|quad| quad.predicate == predicate && quad.object == object)
            .map(|quad| quad.subject.into_owned())
            .filter(|subject| seen.insert(subject.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = QuadRef<'_>> + '_ {
        self.dataset.iter()
    }

    /// Serialize as Turtle with the standard prefix bindings.
    ///
    /// Turtle has no named-graph syntax, so a named scope is projected onto
    /// the default graph. Use [`ProvGraph::to_trig`] to keep the scope.
    pub fn to_turtle(&self) -> Result<String> {
        let mut serializer =
            prefixed(RdfSerializer::from_format(RdfFormat::Turtle))?.for_writer(Vec::new());
        for quad in self.dataset.iter() {
            serializer.serialize_quad(QuadRef::new(
                quad.subject,
                quad.predicate,
                quad.object,
                GraphNameRef::DefaultGraph,
            ))?;
        }
        Ok(String::from_utf8_lossy(&serializer.finish()?).into_owned())
    }

    /// Serialize as TriG with the standard prefix bindings, scope intact.
    pub fn to_trig(&self) -> Result<String> {
        let mut serializer =
            prefixed(RdfSerializer::from_format(RdfFormat::TriG))?.for_writer(Vec::new());
        for quad in self.dataset.iter() {
            serializer.serialize_quad(quad)?;
        }
        Ok(String::from_utf8_lossy(&serializer.finish()?).into_owned())
    }
}

fn prefixed(mut serializer: RdfSerializer) -> Result<RdfSerializer> {
    for (name, ns) in namespace::PREFIXES {
        serializer = serializer.with_prefix(*name, *ns)?;
    }
    Ok(serializer)
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{prov, provwf};
    use oxigraph::model::Literal;

    fn iri(s: &str) -> NamedNode {
        NamedNode::new(s).unwrap()
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut g = ProvGraph::new();
        let s = iri("https://example.com/a");
        let o = iri("https://example.com/b");
        assert!(g.insert(&s, prov::USED, &o));
        assert!(!g.insert(&s, prov::USED, &o));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn remove_returns_presence() {
        let mut g = ProvGraph::new();
        let s = iri("https://example.com/a");
        let o = Literal::from(true);
        g.insert(&s, prov::VALUE, &o);
        assert!(g.remove(&s, prov::VALUE, &o));
        assert!(!g.remove(&s, prov::VALUE, &o));
        assert!(g.is_empty());
    }

    #[test]
    fn objects_of_collects_across_subjects() {
        let mut g = ProvGraph::new();
        let b1 = iri("https://example.com/b1");
        let b2 = iri("https://example.com/b2");
        let x = iri("https://example.com/x");
        let y = iri("https://example.com/y");
        g.insert(&b1, prov::USED, &x);
        g.insert(&b2, prov::USED, &x);
        g.insert(&b2, prov::USED, &y);
        let used = g.objects_of(prov::USED);
        assert_eq!(used.len(), 2);
        assert!(used.contains(&Term::from(x)));
        assert!(used.contains(&Term::from(y)));
    }

    #[test]
    fn subjects_with_matches_predicate_and_object() {
        let mut g = ProvGraph::new();
        let e = iri("https://example.com/e");
        let marker = Literal::from(true);
        g.insert(&e, provwf::EXTERNAL, &marker);
        let subjects = g.subjects_with(provwf::EXTERNAL, (&marker).into());
        assert_eq!(subjects, vec![Subject::from(e)]);
    }

    #[test]
    fn turtle_rendering_starts_with_prefixes() {
        let mut g = ProvGraph::new();
        g.insert(
            &iri("https://example.com/a"),
            prov::USED,
            &iri("https://example.com/b"),
        );
        let text = g.to_turtle().unwrap();
        assert!(text.starts_with("@prefix"), "got: {text}");
    }

    #[test]
    fn turtle_projects_named_scope_onto_default_graph() {
        let mut g = ProvGraph::named(iri("https://example.com/graphs/run-1"));
        g.insert(
            &iri("https://example.com/a"),
            prov::USED,
            &iri("https://example.com/b"),
        );
        let text = g.to_turtle().unwrap();
        assert!(!text.contains("run-1"), "scope leaked into Turtle: {text}");
        assert!(text.contains("used"));
    }

    #[test]
    fn trig_rendering_keeps_named_scope() {
        let mut g = ProvGraph::named(iri("https://example.com/graphs/run-1"));
        g.insert(
            &iri("https://example.com/a"),
            prov::USED,
            &iri("https://example.com/b"),
        );
        let text = g.to_trig().unwrap();
        assert!(text.contains('{'), "got: {text}");
        assert!(text.contains("run-1"));
    }
}
