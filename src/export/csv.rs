//! CSV persistence of publication records.

use std::path::Path;

use crate::models::PublicationRecord;

use super::ExportError;

/// Column headers of the exported table, in writing order
pub const CSV_HEADERS: [&str; 11] = [
    "Nom",
    "Prenom",
    "IdHAL de l'Auteur",
    "IdHAL des auteurs de la publication",
    "Titre",
    "Docid",
    "Année de Publication",
    "Type de Document",
    "Domaine",
    "Mots-clés",
    "Laboratoire de Recherche",
];

/// Write the record table to `path`, header row first.
///
/// Rows keep the fetch order; list-valued cells are "; "-joined.
pub fn write_records(path: &Path, records: &[PublicationRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(row(record))?;
    }
    writer.flush()?;
    Ok(())
}

fn row(record: &PublicationRecord) -> [String; 11] {
    [
        record.family_name.clone(),
        record.given_name.clone(),
        record.author_id.clone(),
        record.co_author_ids_joined(),
        record.title.clone(),
        record.docid.clone(),
        record.publication_year.clone(),
        record.doc_type.clone(),
        record.domain.clone(),
        record.keywords_joined(),
        record.lab_name.clone(),
    ]
}
