//! Static lookup tables between HAL facet codes and French display labels.
//!
//! Two directions per facet: a name→code lookup used when building `fq`
//! filter clauses (unknown names yield `None` and are dropped by the
//! caller), and a code→label lookup used when rendering fetched records
//! (unknown codes fall back to the facet's "non défini" label).

/// Label for an unknown or missing domain code
pub const DOMAIN_UNDEFINED: &str = "Domaine non défini";
/// Label for an unknown or missing document type code
pub const DOC_TYPE_UNDEFINED: &str = "Type non défini";

/// Filter names accepted from the user, mapped to HAL `domain_s` codes.
/// Several names may share a code ("Santé" files under sciences du vivant).
const DOMAIN_CODES: &[(&str, &str)] = &[
    ("Mathématiques", "math"),
    ("Informatique", "info"),
    ("Physique", "phys"),
    ("Chimie", "chim"),
    ("Sciences du vivant", "sdv"),
    ("Santé", "sdv"),
    ("Sciences de l'environnement", "sde"),
    ("Sciences humaines et sociales", "shs"),
    ("Sciences de l'ingénieur", "spi"),
    ("Sciences cognitives", "scco"),
    ("Planète et Univers", "sdu"),
    ("Statistiques", "stat"),
];

const DOMAIN_LABELS: &[(&str, &str)] = &[
    ("math", "Mathématiques"),
    ("info", "Informatique"),
    ("phys", "Physique"),
    ("chim", "Chimie"),
    ("sdv", "Sciences du vivant"),
    ("sde", "Sciences de l'environnement"),
    ("shs", "Sciences humaines et sociales"),
    ("spi", "Sciences de l'ingénieur"),
    ("scco", "Sciences cognitives"),
    ("sdu", "Planète et Univers"),
    ("stat", "Statistiques"),
];

/// Filter names accepted from the user, mapped to HAL `docType_s` codes
const DOC_TYPE_CODES: &[(&str, &str)] = &[
    ("Article de revue", "ART"),
    ("Communication", "COMM"),
    ("Poster", "POSTER"),
    ("Ouvrage", "OUV"),
    ("Chapitre d'ouvrage", "COUV"),
    ("Thèse", "THESE"),
    ("HDR", "HDR"),
    ("Rapport", "REPORT"),
    ("Brevet", "PATENT"),
    ("Pré-publication", "UNDEFINED"),
    ("Logiciel", "SOFTWARE"),
    ("Mémoire", "MEM"),
];

const DOC_TYPE_LABELS: &[(&str, &str)] = &[
    ("ART", "Article de revue"),
    ("COMM", "Communication"),
    ("POSTER", "Poster"),
    ("OUV", "Ouvrage"),
    ("COUV", "Chapitre d'ouvrage"),
    ("THESE", "Thèse"),
    ("HDR", "HDR"),
    ("REPORT", "Rapport"),
    ("PATENT", "Brevet"),
    ("UNDEFINED", "Pré-publication"),
    ("SOFTWARE", "Logiciel"),
    ("MEM", "Mémoire"),
];

/// Map a domain display name to its HAL facet code
pub fn domain_code(name: &str) -> Option<&'static str> {
    DOMAIN_CODES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Map a HAL domain code to its display label.
///
/// HAL emits hierarchical codes ("shs.eco"); the lookup keys on the root
/// segment. Unknown codes fall back to [`DOMAIN_UNDEFINED`].
pub fn domain_label(code: &str) -> &'static str {
    let root = code.split('.').next().unwrap_or(code);
    DOMAIN_LABELS
        .iter()
        .find(|(c, _)| *c == root)
        .map(|(_, label)| *label)
        .unwrap_or(DOMAIN_UNDEFINED)
}

/// Map a document type display name to its HAL facet code
pub fn doc_type_code(name: &str) -> Option<&'static str> {
    DOC_TYPE_CODES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Map a HAL document type code to its display label, falling back to
/// [`DOC_TYPE_UNDEFINED`] for unknown codes
pub fn doc_type_label(code: &str) -> &'static str {
    DOC_TYPE_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(DOC_TYPE_UNDEFINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_code_known() {
        assert_eq!(domain_code("Informatique"), Some("info"));
        assert_eq!(domain_code("Santé"), Some("sdv"));
    }

    #[test]
    fn test_domain_code_unknown_is_none() {
        assert_eq!(domain_code("Alchimie"), None);
        assert_eq!(domain_code("informatique"), None); // names are exact
    }

    #[test]
    fn test_domain_label_roundtrip_and_fallback() {
        assert_eq!(domain_label("math"), "Mathématiques");
        assert_eq!(domain_label("shs.eco"), "Sciences humaines et sociales");
        assert_eq!(domain_label("xyz"), DOMAIN_UNDEFINED);
    }

    #[test]
    fn test_doc_type_lookups() {
        assert_eq!(doc_type_code("Article de revue"), Some("ART"));
        assert_eq!(doc_type_code("Roman"), None);
        assert_eq!(doc_type_label("THESE"), "Thèse");
        assert_eq!(doc_type_label("???"), DOC_TYPE_UNDEFINED);
    }
}
