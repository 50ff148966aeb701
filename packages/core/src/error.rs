use std::io;

use oxigraph::model::IriParseError;
use thiserror::Error;

/// Errors returned by reporter construction and graph emission.
#[derive(Debug, Error)]
pub enum ProvWorkflowError {
    /// A built-in reporter was given a specialisation class IRI. Only
    /// specialised construction may carry one.
    #[error("{kind} is a built-in class and must not carry a specialisation IRI")]
    SpecialisationTagForbidden { kind: &'static str },

    /// A specialised reporter was constructed without its class IRI.
    #[error("specialised {kind} construction requires a class IRI")]
    SpecialisationTagMissing { kind: &'static str },

    /// The specialisation class IRI is not an absolute scheme-prefixed IRI.
    #[error("specialisation class IRI {iri:?} is not an absolute IRI")]
    SpecialisationTagInvalid {
        iri: String,
        #[source]
        source: IriParseError,
    },

    /// A workflow with no blocks cannot be emitted.
    #[error("a workflow must contain at least one block before it can be emitted")]
    EmptyWorkflow,

    /// A caller-supplied value could not be normalized into an RDF term.
    #[error("cannot convert {value:?} into an IRI")]
    Conversion {
        value: String,
        #[source]
        source: IriParseError,
    },

    /// The delegated serializer failed to write.
    #[error("serialization failed")]
    Serialize(#[from] io::Error),

    /// A prefix binding handed to the serializer was rejected.
    #[error("invalid prefix binding")]
    Prefix(#[from] IriParseError),
}

pub type Result<T> = std::result::Result<T, ProvWorkflowError>;
