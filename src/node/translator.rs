//! Mapping between item parameters and the `/translate` endpoint

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::core::client::ApiRequester;
use crate::core::errors::{DeeplError, Result};
use crate::core::models::{
    ItemParameters, LanguageOperation, NodeInput, NodeOperation, TranslationRequest,
    TranslationResponse, TranslationResult,
};

/// Regional English variants the API only accepts as target languages
const REGIONAL_ENGLISH: &[&str] = &["EN-GB", "EN-US"];

/// Collapse regional English source codes to `EN`
pub fn normalize_source_lang(source_lang: &str) -> &str {
    if REGIONAL_ENGLISH.contains(&source_lang) {
        "EN"
    } else {
        source_lang
    }
}

/// Build the outbound request for one item
pub fn build_request(params: &ItemParameters) -> Result<TranslationRequest> {
    if params.text.is_empty() {
        return Err(DeeplError::MissingField {
            field: "text".to_string(),
        });
    }
    if params.translate_to.is_empty() {
        return Err(DeeplError::MissingField {
            field: "translateTo".to_string(),
        });
    }

    let request = TranslationRequest::new(params.text.as_str(), params.translate_to.as_str());
    Ok(match &params.additional_fields.source_lang {
        Some(source_lang) => request.with_source_lang(normalize_source_lang(source_lang)),
        None => request,
    })
}

/// Send a built request through the injected requester
pub async fn issue_request<R>(requester: &R, request: &TranslationRequest) -> Result<Value>
where
    R: ApiRequester + ?Sized,
{
    requester
        .request(Method::GET, "/translate", &request.to_query())
        .await
}

/// Pair the first translation in `response` with input item `index`
pub fn parse_response(response: Value, index: usize) -> Result<TranslationResult> {
    let response: TranslationResponse =
        serde_json::from_value(response).map_err(|e| DeeplError::InvalidResponseError {
            message: e.to_string(),
        })?;

    let output_json = response
        .translations
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(DeeplError::EmptyTranslation)?;

    Ok(TranslationResult {
        output_json,
        source_item_index: index,
    })
}

/// Run the operation selected by the item's parameters
pub async fn execute_item<R>(requester: &R, index: usize, input: &NodeInput) -> Result<TranslationResult>
where
    R: ApiRequester + ?Sized,
{
    match input.parameters.operation()? {
        NodeOperation::Language(LanguageOperation::Translate) => {
            let request = build_request(&input.parameters)?;
            debug!("Translating item {} to {}", index, request.target_lang);
            let response = issue_request(requester, &request).await?;
            parse_response(response, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regional_english_collapses() {
        for code in ["EN-GB", "EN-US"] {
            let params = ItemParameters::translate("Hello", "DE").with_source_lang(code);
            let request = build_request(&params).unwrap();
            assert_eq!(request.source_lang.as_deref(), Some("EN"));
        }
    }

    #[test]
    fn test_other_source_codes_pass_through() {
        for code in ["EN", "DE", "PT-BR", "en-gb", "XX"] {
            let params = ItemParameters::translate("Hello", "FR").with_source_lang(code);
            let request = build_request(&params).unwrap();
            assert_eq!(request.source_lang.as_deref(), Some(code));
        }
    }

    #[test]
    fn test_absent_source_is_omitted() {
        let request = build_request(&ItemParameters::translate("Hello", "FR")).unwrap();
        assert_eq!(request, TranslationRequest::new("Hello", "FR"));
        assert!(request.to_query().iter().all(|(key, _)| *key != "source_lang"));
    }

    #[test]
    fn test_target_is_verbatim() {
        let request = build_request(&ItemParameters::translate("Hello", "EN-GB")).unwrap();
        assert_eq!(request.target_lang, "EN-GB");
    }

    #[test]
    fn test_missing_fields() {
        let err = build_request(&ItemParameters::translate("", "FR")).unwrap_err();
        assert!(matches!(err, DeeplError::MissingField { field } if field == "text"));

        let err = build_request(&ItemParameters::translate("Hello", "")).unwrap_err();
        assert!(matches!(err, DeeplError::MissingField { field } if field == "translateTo"));
    }

    #[test]
    fn test_build_request_is_idempotent() {
        let params = ItemParameters::translate("Hello", "FR").with_source_lang("EN-US");
        assert_eq!(build_request(&params).unwrap(), build_request(&params).unwrap());
    }

    #[test]
    fn test_parse_response_takes_first() {
        let result = parse_response(json!({ "translations": [{ "text": "Bonjour" }] }), 2).unwrap();
        assert_eq!(result.output_json, json!({ "text": "Bonjour" }));
        assert_eq!(result.source_item_index, 2);

        let result = parse_response(
            json!({ "translations": [
                { "text": "Hallo", "detected_source_language": "EN" },
                { "text": "Tschüss", "detected_source_language": "EN" }
            ] }),
            0,
        )
        .unwrap();
        assert_eq!(result.output_json["text"], "Hallo");
    }

    #[test]
    fn test_parse_response_empty() {
        let err = parse_response(json!({ "translations": [] }), 0).unwrap_err();
        assert!(matches!(err, DeeplError::EmptyTranslation));

        let err = parse_response(json!({}), 0).unwrap_err();
        assert!(matches!(err, DeeplError::EmptyTranslation));

        let err = parse_response(json!({ "translations": null }), 0).unwrap_err();
        assert!(matches!(err, DeeplError::EmptyTranslation));
    }

    #[test]
    fn test_parse_response_malformed() {
        let err = parse_response(json!("Internal Server Error"), 0).unwrap_err();
        assert!(matches!(err, DeeplError::InvalidResponseError { .. }));
    }
}
