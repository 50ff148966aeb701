//! Process-wide reporting configuration.
//!
//! The only knob today is the version IRI recorded on activity reporters.
//! Deriving that IRI (from a release tag, a git describe, a build system) is
//! the caller's business; this layer just consumes the result. Settings are
//! resolved at reporter construction time, so installing them must happen
//! before the first reporter is built.

use std::env;
use std::sync::OnceLock;

use oxigraph::model::NamedNode;

/// Environment variable consulted when no settings were installed explicitly.
pub const VERSION_IRI_VAR: &str = "PROVWF_VERSION_IRI";

static GLOBAL: OnceLock<Settings> = OnceLock::new();

/// Reporting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Version IRI stamped on new reporters. `None` means each reporter
    /// falls back to its own instance IRI.
    pub version_iri: Option<NamedNode>,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// An absent or unparsable [`VERSION_IRI_VAR`] yields the default; a bad
    /// value never fails construction downstream.
    pub fn from_env() -> Self {
        let version_iri = env::var(VERSION_IRI_VAR)
            .ok()
            .and_then(|raw| NamedNode::new(raw).ok());
        Self { version_iri }
    }

    /// Install these settings process-wide. The first installation wins;
    /// later calls return `false` and leave the installed value untouched.
    pub fn install(self) -> bool {
        GLOBAL.set(self).is_ok()
    }

    /// The installed settings, falling back to the environment on first use.
    pub fn global() -> &'static Settings {
        GLOBAL.get_or_init(Settings::from_env)
    }

    /// Resolve the version IRI for a reporter whose instance IRI is `iri`.
    pub fn resolve_version_iri(&self, iri: &NamedNode) -> NamedNode {
        self.version_iri.clone().unwrap_or_else(|| iri.clone())
    }
}

// --- tests -------------------------------------------------------------------
