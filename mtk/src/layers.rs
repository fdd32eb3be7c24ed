//! Filtre d'admission des couches MTK
//!
//! Les couches de symboles, de légendes et de lignes de bord n'ont pas de
//! représentation OSM: elles sont écartées en bloc, avant tout objet.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::debug;

/// Couches écartées (nom exact, sensible à la casse)
pub const DENIED_LAYERS: &[&str] = &[
    // Symboles
    "Aidansymboli",
    "Eloperaisenaineksensymboli",
    "Hautausmaansymboli",
    "Hienonkivennaisaineksensymboli",
    "Kalliosymboli",
    "Kevytvaylanalikulkusymboli",
    "Lauttasymboli",
    "Lossisymboli",
    "Louhoksensymboli",
    "Niitynsymboli",
    "Putkijohdonsymboli",
    "Rautatiensahkoistyssymboli",
    "Rautatienkaytostapoistetunsymboli",
    "Sahkolinjansymboli",
    "Taytemaansymboli",
    "Varastoalueensymboli",
    "Virtavedenjuoksusuunta",
    // Lignes de bord et lignes techniques
    "Ampumaalueenreunaviiva",
    "Maastokuvionreuna",
    "Rakennusalueenreunaviiva",
    "Suojaalueenreunaviiva",
    "Suojelualueenreunaviiva",
    "Taajaanrakennetunalueenreuna",
    "Tekninenviiva",
    "Rajavyohykkeentakaraja",
    "Sisaistenaluevesienulkoraja",
    "Ulkojasisasaaristonraja",
    // Relief: cotes et lignes de pente
    "Korkeuskayrankorkeusarvo",
    "Korkeuskayranviettoviiva",
    "Apukayranviettoviiva",
    "Syvyyskayransyvyysarvo",
    "Syvyyskayranviettoviiva",
    // Légendes et numéros
    "Huomautepiste",
    "Aidanselite",
    "Altaanselite",
    "Hautausmaanselite",
    "Ilmaradanselite",
    "Kaatopaikanselite",
    "Kulkuvaylanselite",
    "Kunnanhallintorajanselite",
    "Louhoksenselite",
    "Maaaineksenottoalueenselite",
    "Metsanrajanselite",
    "Muistomerkinselite",
    "Nakotorninselite",
    "Puistonselite",
    "Taytemaanselite",
    "Turvalaitteenselite",
    "Urheilujavirkistysalueenselite",
    "Vedenottamonselite",
    "Vesiasteikonselite",
    "Autotiensiltanumero",
    "Autotienlauttanumero",
    "Paikallistiennumero",
    "Maantiennumero",
    "Valtatiennumero",
];

/// Filtre d'admission: liste fixe, éventuellement complétée par configuration
#[derive(Debug, Clone)]
pub struct LayerFilter {
    denied: HashSet<String>,
}

impl Default for LayerFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerFilter {
    pub fn new() -> Self {
        Self {
            denied: DENIED_LAYERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Ajoute des couches écartées en plus de la liste fixe
    pub fn with_denied<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denied.extend(layers.into_iter().map(Into::into));
        self
    }

    pub fn is_denied(&self, layer: &str) -> bool {
        self.denied.contains(layer)
    }

    /// Retourne la couche si elle doit être traitée, `None` sinon
    pub fn admit<'a>(&self, layer: &'a str) -> Option<&'a str> {
        if self.is_denied(layer) {
            debug!(layer, "Layer skipped");
            None
        } else {
            debug!(layer, "Layer admitted");
            Some(layer)
        }
    }

    /// Couches écartées, triées
    pub fn denied(&self) -> Vec<&str> {
        let mut layers: Vec<&str> = self.denied.iter().map(String::as_str).collect();
        layers.sort_unstable();
        layers
    }
}

/// Admission avec la liste fixe
pub fn admit(layer: &str) -> Option<&str> {
    static FILTER: OnceLock<LayerFilter> = OnceLock::new();
    FILTER.get_or_init(LayerFilter::new).admit(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_layer() {
        assert_eq!(admit("Maastokuvionreuna"), None);
        assert_eq!(admit("Sahkolinjansymboli"), None);
    }

    #[test]
    fn test_admitted_layer() {
        assert_eq!(admit("Tieviiva"), Some("Tieviiva"));
        assert_eq!(admit("Rautatie"), Some("Rautatie"));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(admit("maastokuvionreuna"), Some("maastokuvionreuna"));
        assert_eq!(admit("MAASTOKUVIONREUNA"), Some("MAASTOKUVIONREUNA"));
    }

    #[test]
    fn test_caption_layers_with_rules_are_admitted() {
        assert!(admit("Liikennealueenselite").is_some());
        assert!(admit("Rakennuksenselite").is_some());
    }

    #[test]
    fn test_extra_denied_layers() {
        let filter = LayerFilter::new().with_denied(["Puu"]);
        assert_eq!(filter.admit("Puu"), None);
        assert_eq!(filter.admit("Tieviiva"), Some("Tieviiva"));
        assert!(filter.is_denied("Maastokuvionreuna"));
    }

    #[test]
    fn test_denied_list_has_no_duplicates() {
        let filter = LayerFilter::new();
        assert_eq!(filter.denied().len(), DENIED_LAYERS.len());
    }
}
