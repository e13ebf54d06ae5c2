//! Deterministic CSV filename encoding.

use crate::utils::filename_safe;

/// Build the export filename from the active filters.
///
/// Segments are appended in a fixed order — domain, period, document type —
/// and absent filters are simply omitted:
/// `all_data_Sante_2020-2024_Article_de_revue.csv`. The period segment is
/// taken untouched; domain and type go through [`filename_safe`].
pub fn build_filename(
    period: Option<&str>,
    domain: Option<&str>,
    type_filter: Option<&str>,
) -> String {
    let mut parts = vec!["all_data".to_string()];

    if let Some(domain) = domain {
        parts.push(filename_safe(domain));
    }
    if let Some(period) = period {
        parts.push(period.to_string());
    }
    if let Some(type_filter) = type_filter {
        parts.push(filename_safe(type_filter));
    }

    format!("{}.csv", parts.join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_segments() {
        assert_eq!(
            build_filename(Some("2020-2024"), Some("Santé"), Some("Article de revue")),
            "all_data_Sante_2020-2024_Article_de_revue.csv"
        );
    }

    #[test]
    fn test_domain_and_period_only() {
        assert_eq!(
            build_filename(Some("2020-2024"), Some("Santé"), None),
            "all_data_Sante_2020-2024.csv"
        );
    }

    #[test]
    fn test_no_filters() {
        assert_eq!(build_filename(None, None, None), "all_data.csv");
    }

    #[test]
    fn test_only_accent_subset_substituted() {
        // é, è, à are substituted; other non-ASCII characters pass through.
        assert_eq!(
            build_filename(None, Some("Planète"), None),
            "all_data_Planete.csv"
        );
        assert_eq!(build_filename(None, Some("Sûreté"), None), "all_data_Sûrete.csv");
    }
}
