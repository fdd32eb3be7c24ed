//! Tables de règles de traduction

pub mod general;
pub mod railway;
pub mod road;
pub mod survey;
pub mod text;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::Result;
use crate::record::SourceRecord;
use crate::types::{tags_from, TagMap};

pub use road::RoadRule;

/// Règle de calcul: tags dérivés des attributs de l'objet
pub type DerivedRule = fn(&dyn SourceRecord) -> Result<TagMap>;

/// Règle de la table générale
#[derive(Clone, Copy)]
pub enum Rule {
    /// Tags fixes, indépendants des attributs
    Tags(&'static [(&'static str, &'static str)]),
    /// Tags calculés depuis les attributs
    Derived(DerivedRule),
}

impl Rule {
    pub fn apply(&self, record: &dyn SourceRecord) -> Result<TagMap> {
        match self {
            Rule::Tags(pairs) => Ok(tags_from(pairs)),
            Rule::Derived(rule) => rule(record),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Tags(pairs) => f.debug_tuple("Tags").field(pairs).finish(),
            Rule::Derived(_) => f.write_str("Derived"),
        }
    }
}

/// Règle retenue pour un code de classe
#[derive(Debug, Clone, Copy)]
pub enum Selected {
    Road(RoadRuleRef),
    General(Rule),
}

/// Enveloppe d'une règle routière (les pointeurs de fonction n'ont pas de `Debug` lisible)
#[derive(Clone, Copy)]
pub struct RoadRuleRef(pub RoadRule);

impl fmt::Debug for RoadRuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoadRule")
    }
}

/// Table d'origine d'une règle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Road,
    Tags,
    Derived,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RuleKind::Road => "road",
            RuleKind::Tags => "tags",
            RuleKind::Derived => "derived",
        };
        f.write_str(label)
    }
}

/// Tables code -> règle, construites une fois puis en lecture seule
pub struct RuleTables {
    general: HashMap<u32, Rule>,
    road: HashMap<u32, RoadRule>,
}

impl RuleTables {
    /// Construit les tables; à code égal, la dernière déclaration l'emporte
    pub fn new() -> Self {
        Self::from_entries(general::GENERAL_RULES, road::ROAD_RULES)
    }

    pub fn from_entries(general: &[(u32, Rule)], road: &[(u32, RoadRule)]) -> Self {
        let mut tables = Self {
            general: HashMap::with_capacity(general.len()),
            road: HashMap::with_capacity(road.len()),
        };
        for &(code, rule) in general {
            tables.general.insert(code, rule);
        }
        for &(code, rule) in road {
            tables.road.insert(code, rule);
        }
        tables
    }

    /// Tables partagées du processus
    pub fn shared() -> &'static RuleTables {
        static TABLES: OnceLock<RuleTables> = OnceLock::new();
        TABLES.get_or_init(RuleTables::new)
    }

    /// Sélectionne la règle d'un code: table routière d'abord, puis générale
    pub fn select(&self, code: u32) -> Option<Selected> {
        if let Some(&rule) = self.road.get(&code) {
            return Some(Selected::Road(RoadRuleRef(rule)));
        }
        self.general.get(&code).map(|&rule| Selected::General(rule))
    }

    /// Sélection depuis un code brut; hors plage `u32`, le code est inconnu
    pub fn lookup(&self, code: i64) -> Option<Selected> {
        u32::try_from(code).ok().and_then(|code| self.select(code))
    }

    pub fn is_known(&self, code: i64) -> bool {
        self.lookup(code).is_some()
    }

    /// Type de la règle effectivement appliquée pour un code
    pub fn kind(&self, code: u32) -> Option<RuleKind> {
        self.select(code).map(|selected| match selected {
            Selected::Road(_) => RuleKind::Road,
            Selected::General(Rule::Tags(_)) => RuleKind::Tags,
            Selected::General(Rule::Derived(_)) => RuleKind::Derived,
        })
    }

    /// Codes connus, triés, avec le type de règle appliquée
    pub fn codes(&self) -> Vec<(u32, RuleKind)> {
        let mut codes: Vec<u32> = self
            .general
            .keys()
            .chain(self.road.keys())
            .copied()
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
            .into_iter()
            .filter_map(|code| self.kind(code).map(|kind| (code, kind)))
            .collect()
    }

    /// Codes présents dans les deux tables (entrée générale masquée)
    pub fn overridden_codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self
            .road
            .keys()
            .filter(|code| self.general.contains_key(code))
            .copied()
            .collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.codes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.road.is_empty()
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTables")
            .field("general", &self.general.len())
            .field("road", &self.road.len())
            .finish()
    }
}
