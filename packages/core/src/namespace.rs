//! Vocabulary constants for the ontologies the reporting layer writes into.
//!
//! Terms are grouped by namespace, mirroring `oxigraph::model::vocab`. All
//! IRIs here are known-valid at compile time, so `new_unchecked` is safe.

use oxigraph::model::NamedNodeRef;

/// Instance namespace: every reporter mints its identifier under this base.
pub const PWFS: &str = "https://data.kurrawong.ai/dataset/provworkflow/";

/// Prefix bindings applied to every serialization.
pub const PREFIXES: &[(&str, &str)] = &[
    ("prov", prov::NS),
    ("provwf", provwf::NS),
    ("pwfs", PWFS),
    ("dcterms", dcterms::NS),
    ("dcat", dcat::NS),
    ("sdo", sdo::NS),
    ("owl", owl::NS),
];

/// [W3C PROV-O](https://www.w3.org/TR/prov-o/) terms.
pub mod prov {
    use super::NamedNodeRef;

    pub const NS: &str = "http://www.w3.org/ns/prov#";

    pub const ENTITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Entity");
    pub const ACTIVITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Activity");
    pub const AGENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Agent");
    pub const PERSON: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Person");

    pub const USED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#used");
    pub const GENERATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#generated");
    pub const WAS_ASSOCIATED_WITH: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasAssociatedWith");
    pub const WAS_ATTRIBUTED_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasAttributedTo");
    pub const WAS_REVISION_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasRevisionOf");
    pub const ACTED_ON_BEHALF_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#actedOnBehalfOf");
    pub const STARTED_AT_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#startedAtTime");
    pub const ENDED_AT_TIME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#endedAtTime");
    pub const VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#value");
}

/// Workflow ontology terms (classes and properties PROV-O lacks).
pub mod provwf {
    use super::NamedNodeRef;

    pub const NS: &str = "https://data.kurrawong.ai/def/provworkflow/";

    pub const PROV_REPORTER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/ProvReporter");
    pub const WORKFLOW: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/Workflow");
    pub const BLOCK: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/Block");
    pub const MACHINE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/Machine");
    pub const ERROR_ENTITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/ErrorEntity");

    pub const HAD_BLOCK: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/hadBlock");
    pub const SERVICE_PARAMETERS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked(
        "https://data.kurrawong.ai/def/provworkflow/serviceParameters",
    );

    /// Transient marker placed on entities produced outside the workflow.
    /// Consumed (removed) during workflow re-homing; never serialized.
    pub const EXTERNAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.kurrawong.ai/def/provworkflow/external");
}

/// Dublin Core terms.
pub mod dcterms {
    use super::NamedNodeRef;

    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const CREATED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/created");
}

/// [DCAT](https://www.w3.org/TR/vocab-dcat/) terms for data services.
pub mod dcat {
    use super::NamedNodeRef;

    pub const NS: &str = "http://www.w3.org/ns/dcat#";

    pub const DATA_SERVICE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#DataService");
    pub const ACCESS_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#accessURL");
    pub const SERVES_DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#servesDataset");
}

/// schema.org terms.
pub mod sdo {
    use super::NamedNodeRef;

    pub const NS: &str = "https://schema.org/";

    pub const EMAIL: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("https://schema.org/email");
}

/// OWL terms.
pub mod owl {
    use super::NamedNodeRef;

    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    pub const VERSION_IRI: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#versionIRI");
}

// --- tests -------------------------------------------------------------------
