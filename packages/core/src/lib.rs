//! Typed PROV-O provenance reporting.
//!
//! This crate builds provenance records as a small tree of typed reporters —
//! workflows made of blocks, the entities they consume and produce, and the
//! agents responsible — and converts that tree into an RDF statement graph
//! following [PROV-O](https://www.w3.org/TR/prov-o/), ready to serialize as
//! Turtle or TriG.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`workflow`] / [`block`] | Activities: [`Workflow`], [`Block`], boundary aggregation |
//! | [`entity`] | Data: [`Entity`], data services, error entities |
//! | [`agent`] | Responsibility: [`Agent`], persons, machines, delegation |
//! | [`reporter`] | Shared base, class dispatch, the [`ToGraph`] emission contract |
//! | [`graph`] | The [`ProvGraph`] statement set and its serializers |
//! | [`namespace`] | Vocabulary constants and prefix bindings |
//! | [`convert`] | IRI and literal normalization |
//! | [`settings`] | Process-wide configuration (version IRI) |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use provworkflow::{Block, Entity, ToGraph, Workflow};
//!
//! let mut input = Entity::new();
//! input.base.label = Some("source data".into());
//!
//! let mut step = Block::new();
//! step.used.push(input);
//! step.generated.push(Entity::new());
//! step.finish();
//!
//! let mut workflow = Workflow::new();
//! workflow.base.label = Some("nightly ingest".into());
//! workflow.blocks.push(step);
//! workflow.finish();
//!
//! let graph = workflow.prov_to_graph(None)?;
//! println!("{}", graph.to_turtle()?);
//! # Ok::<(), provworkflow::ProvWorkflowError>(())
//! ```

pub mod agent;
pub mod block;
pub mod convert;
pub mod entity;
pub mod error;
pub mod graph;
pub mod namespace;
pub mod reporter;
pub mod settings;
pub mod workflow;

pub use agent::Agent;
pub use block::Block;
pub use entity::Entity;
pub use error::{ProvWorkflowError, Result};
pub use graph::ProvGraph;
pub use reporter::{validate_specialisation, Kind, Reporter, ToGraph, Visited};
pub use settings::Settings;
pub use workflow::Workflow;
