//! Persona catalog. Fixed set of experts, each mapped to a system instruction.
//!
//! Built once at startup and shared read-only (`Arc<PersonaCatalog>`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An expert the model is asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    Doctor,
    Lawyer,
    Engineer,
    DataScientist,
    ExpertGeography,
}

impl Persona {
    /// All personas, in selection order.
    pub const ALL: [Persona; 5] = [
        Persona::Doctor,
        Persona::Lawyer,
        Persona::Engineer,
        Persona::DataScientist,
        Persona::ExpertGeography,
    ];

    /// Stable key used by callers (e.g. "data-scientist").
    pub fn key(self) -> &'static str {
        match self {
            Persona::Doctor => "doctor",
            Persona::Lawyer => "lawyer",
            Persona::Engineer => "engineer",
            Persona::DataScientist => "data-scientist",
            Persona::ExpertGeography => "expert-geography",
        }
    }

    /// Human-readable label shown in the selection prompt.
    pub fn label(self) -> &'static str {
        match self {
            Persona::Doctor => "Doctor",
            Persona::Lawyer => "Lawyer",
            Persona::Engineer => "Engineer",
            Persona::DataScientist => "Data scientist",
            Persona::ExpertGeography => "Geography expert",
        }
    }

    /// Exact, case-sensitive key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    fn instruction(self) -> &'static str {
        match self {
            Persona::Doctor => {
                "You are an experienced medical doctor. Answer the user's question the way a \
                 careful physician would: explain possible causes in plain language, say when \
                 symptoms call for seeing a doctor in person, and never present a diagnosis as \
                 certain."
            }
            Persona::Lawyer => {
                "You are an experienced lawyer. Answer the user's question the way a practising \
                 attorney would: identify the legal issues, explain the general rules that apply, \
                 and point out where the answer depends on jurisdiction or on facts you do not have."
            }
            Persona::Engineer => {
                "You are a senior software engineer. Answer the user's question with practical, \
                 technically precise guidance, include short code examples where they help, and \
                 mention trade-offs between the options you suggest."
            }
            Persona::DataScientist => {
                "You are an experienced data scientist. Answer the user's question with sound \
                 statistical reasoning, suggest suitable methods and tools, and call out \
                 assumptions about the data that the answer relies on."
            }
            Persona::ExpertGeography => {
                "You are a geography expert. Answer the user's question accurately and concisely, \
                 covering physical and human geography as needed."
            }
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog row: persona and the instruction sent as the system message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaEntry {
    pub persona: Persona,
    pub instruction: String,
}

/// Immutable persona -> instruction mapping.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    entries: Vec<PersonaEntry>,
}

impl PersonaCatalog {
    /// The built-in catalog with every [`Persona`].
    pub fn builtin() -> Self {
        let entries = Persona::ALL
            .into_iter()
            .map(|persona| PersonaEntry {
                persona,
                instruction: persona.instruction().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Look up a persona by key. `None` if the key is not in the catalog.
    pub fn lookup(&self, key: &str) -> Option<&PersonaEntry> {
        let persona = Persona::from_key(key)?;
        self.entries.iter().find(|e| e.persona == persona)
    }

    /// Entries in selection order.
    pub fn entries(&self) -> &[PersonaEntry] {
        &self.entries
    }

    pub fn personas(&self) -> Vec<Persona> {
        self.entries.iter().map(|e| e.persona).collect()
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persona_has_an_entry() {
        let catalog = PersonaCatalog::builtin();
        assert_eq!(catalog.entries().len(), Persona::ALL.len());
        for persona in Persona::ALL {
            let entry = catalog.lookup(persona.key()).unwrap();
            assert_eq!(entry.persona, persona);
            assert!(!entry.instruction.trim().is_empty());
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = PersonaCatalog::builtin();
        assert!(catalog.lookup("unknown-key").is_none());
        assert!(catalog.lookup("Doctor").is_none());
        assert!(catalog.lookup(" doctor").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = Persona::ALL.iter().map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Persona::ALL.len());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Persona::DataScientist).unwrap();
        assert_eq!(json, "\"data-scientist\"");
        let parsed: Persona = serde_json::from_str("\"expert-geography\"").unwrap();
        assert_eq!(parsed, Persona::ExpertGeography);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(Persona::ExpertGeography.to_string(), "Geography expert");
    }
}
