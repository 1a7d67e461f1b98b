//! Target-language lookup for the language selector

use reqwest::Method;
use tracing::debug;

use crate::core::client::ApiRequester;
use crate::core::errors::{DeeplError, Result};
use crate::core::models::{Language, LanguageOption};

/// Fetch the target-language catalog, sorted by display name.
///
/// The catalog order is not guaranteed, so entries are sorted by name
/// (case-sensitive, stable for equal names).
pub async fn get_supported_languages<R>(requester: &R) -> Result<Vec<LanguageOption>>
where
    R: ApiRequester + ?Sized,
{
    let response = requester
        .request(Method::GET, "/languages", &[("type", "target".to_string())])
        .await?;

    let languages: Vec<Language> =
        serde_json::from_value(response).map_err(|e| DeeplError::InvalidResponseError {
            message: e.to_string(),
        })?;
    debug!("Fetched {} target languages", languages.len());

    Ok(sort_languages(languages))
}

/// Convert catalog entries to options ordered by display name
pub fn sort_languages(languages: Vec<Language>) -> Vec<LanguageOption> {
    let mut options: Vec<LanguageOption> = languages.into_iter().map(LanguageOption::from).collect();
    options.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::Mutex;

    struct CatalogRequester {
        catalog: Value,
        calls: Mutex<Vec<(String, Vec<(&'static str, String)>)>>,
    }

    #[async_trait]
    impl ApiRequester for CatalogRequester {
        async fn request(
            &self,
            _method: Method,
            endpoint: &str,
            query: &[(&'static str, String)],
        ) -> Result<Value> {
            self.calls.lock().await.push((endpoint.to_string(), query.to_vec()));
            Ok(self.catalog.clone())
        }
    }

    fn language(code: &str, name: &str) -> Language {
        Language {
            language: code.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_languages_sorted_by_name() {
        let requester = CatalogRequester {
            catalog: json!([
                { "language": "FR", "name": "French" },
                { "language": "EN", "name": "English" },
                { "language": "AL", "name": "Albanian" }
            ]),
            calls: Mutex::new(Vec::new()),
        };

        let options = get_supported_languages(&requester).await.unwrap();
        let names: Vec<&str> = options.iter().map(|o| o.display_name.as_str()).collect();
        assert_eq!(names, vec!["Albanian", "English", "French"]);
        assert_eq!(options[0].code, "AL");

        let calls = requester.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/languages");
        assert_eq!(calls[0].1, vec![("type", "target".to_string())]);
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let options = sort_languages(vec![
            language("x", "alpha"),
            language("y", "Beta"),
            language("z", "Alpha"),
        ]);
        let names: Vec<&str> = options.iter().map(|o| o.display_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "alpha"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let options = sort_languages(vec![
            language("EN-US", "English"),
            language("DE", "German"),
            language("EN-GB", "English"),
        ]);
        let codes: Vec<&str> = options.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["EN-US", "EN-GB", "DE"]);
    }

    #[tokio::test]
    async fn test_malformed_catalog() {
        let requester = CatalogRequester {
            catalog: json!({ "message": "oops" }),
            calls: Mutex::new(Vec::new()),
        };
        let err = get_supported_languages(&requester).await.unwrap_err();
        assert!(matches!(err, DeeplError::InvalidResponseError { .. }));
    }
}
