//! Retrieval of the published sheet text
//!
//! The dashboard reads one published CSV link (a spreadsheet tab exported
//! by its host). Retrieval is a thin collaborator around the HTTP client:
//! it hands the raw text to the ingestion core and knows nothing about
//! the schema. A local file source exists for offline use and tests.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::Settings;
use crate::error::{PainelError, PainelResult};

/// Where the sheet text comes from for this invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Published CSV link, fetched over HTTP
    Url(String),
    /// Local CSV export
    File(PathBuf),
}

impl DataSource {
    /// Resolve the source for this invocation
    ///
    /// Precedence: explicit `--file`, then explicit `--url`, then the
    /// configured sheet link. With none of the three, the user is told to
    /// configure a link first.
    pub fn resolve(
        url: Option<String>,
        file: Option<PathBuf>,
        settings: &Settings,
    ) -> PainelResult<Self> {
        if let Some(path) = file {
            return Ok(Self::File(path));
        }
        if let Some(url) = url {
            return Ok(Self::Url(url));
        }
        if let Some(url) = &settings.sheet_url {
            return Ok(Self::Url(url.clone()));
        }

        Err(PainelError::Config(
            "no sheet link configured; run 'painel init --url <published CSV link>' \
             or pass --url/--file"
                .into(),
        ))
    }

    /// Load the raw sheet text from this source
    pub fn load(&self) -> PainelResult<String> {
        match self {
            Self::Url(url) => fetch_published_csv(url),
            Self::File(path) => std::fs::read_to_string(path).map_err(|e| {
                PainelError::Io(format!("Failed to read {}: {}", path.display(), e))
            }),
        }
    }

}

/// Download the published CSV, bypassing intermediary caches
///
/// Any transport failure or non-success status aborts the refresh; the
/// caller keeps whatever dataset it was already showing.
fn fetch_published_csv(url: &str) -> PainelResult<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| PainelError::Fetch(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .map_err(|e| PainelError::Fetch(format!("Failed to download the sheet: {}", e)))?;

    if !response.status().is_success() {
        return Err(PainelError::Fetch(format!(
            "Sheet download failed with status {}; check that the tab is published",
            response.status()
        )));
    }

    response
        .text()
        .map_err(|e| PainelError::Fetch(format!("Failed to read the sheet body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_prefers_file_over_url() {
        let settings = Settings::default();
        let source = DataSource::resolve(
            Some("https://example.com/csv".into()),
            Some(PathBuf::from("sheet.csv")),
            &settings,
        )
        .unwrap();
        assert_eq!(source, DataSource::File(PathBuf::from("sheet.csv")));
    }

    #[test]
    fn test_resolve_prefers_flag_url_over_settings() {
        let settings = Settings {
            sheet_url: Some("https://configured.example/csv".into()),
            ..Settings::default()
        };
        let source =
            DataSource::resolve(Some("https://flag.example/csv".into()), None, &settings).unwrap();
        assert_eq!(source, DataSource::Url("https://flag.example/csv".into()));
    }

    #[test]
    fn test_resolve_falls_back_to_settings() {
        let settings = Settings {
            sheet_url: Some("https://configured.example/csv".into()),
            ..Settings::default()
        };
        let source = DataSource::resolve(None, None, &settings).unwrap();
        assert_eq!(
            source,
            DataSource::Url("https://configured.example/csv".into())
        );
    }

    #[test]
    fn test_resolve_without_any_source_is_a_config_error() {
        let err = DataSource::resolve(None, None, &Settings::default()).unwrap_err();
        assert!(matches!(err, PainelError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "mes,despesas\nJan,10").unwrap();

        let source = DataSource::File(file.path().to_path_buf());
        let text = source.load().unwrap();
        assert!(text.starts_with("mes,despesas"));
    }

    #[test]
    fn test_load_from_missing_file_is_an_io_error() {
        let source = DataSource::File(PathBuf::from("/nonexistent/sheet.csv"));
        assert!(matches!(source.load().unwrap_err(), PainelError::Io(_)));
    }
}
