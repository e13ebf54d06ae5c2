//! Static dashboard page embedding the generated chart files.

use std::path::{Path, PathBuf};

use super::ExportError;

/// Chart files the dashboard embeds, in page order
pub const CHART_FILES: [&str; 7] = [
    "pubs_by_year.html",
    "type_distribution.html",
    "keywords_distribution.html",
    "domain_distribution.html",
    "top_authors.html",
    "structures_stacked.html",
    "publication_trends.html",
];

/// Write `dashboard.html` into `html_dir`, creating the directory if
/// needed, and return the path of the written file.
///
/// The chart files are referenced relatively, so they are expected to sit
/// next to the dashboard page.
pub fn write_dashboard(html_dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(html_dir)?;
    let path = html_dir.join("dashboard.html");
    std::fs::write(&path, render())?;
    Ok(path)
}

fn render() -> String {
    let iframes: String = CHART_FILES
        .iter()
        .map(|file| format!("    <iframe src=\"{file}\"></iframe>\n"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <title>Dashboard de Publications</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        iframe {{ width: 100%; height: 500px; border: none; margin-bottom: 20px; }}
        h1 {{ text-align: center; color: #333; }}
    </style>
</head>
<body>
    <h1>Dashboard de Visualisation des Publications</h1>
{iframes}</body>
</html>
"#
    )
}
