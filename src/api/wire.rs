//! Request and response bodies exchanged with the service.

use serde::{Deserialize, Serialize};

use crate::model::{ContentCustomization, LayoutCustomization, Theme};

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest<'a> {
    pub topic: &'a str,
    pub content_customization: &'a ContentCustomization,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePresentationRequest<'a> {
    pub content: &'a str,
    pub layout_customization: &'a LayoutCustomization,
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePresentationResponse {
    pub output_file: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DownloadRequest<'a> {
    pub filepath: &'a str,
}

/// Login response. Older deployments name the field differently.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "accessToken")]
    pub access_token_camel: Option<String>,
}

impl TokenResponse {
    pub fn into_token(self) -> Option<String> {
        self.access_token
            .or(self.token)
            .or(self.access_token_camel)
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlideRange;

    #[test]
    fn test_generate_request_shape() {
        let customization = ContentCustomization::default();
        let body = GenerateContentRequest {
            topic: "Rust",
            content_customization: &customization,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["topic"], "Rust");
        assert_eq!(json["content_customization"]["tone"], "professional");
    }

    #[test]
    fn test_create_request_shape() {
        let layout = LayoutCustomization {
            slide_range: SlideRange::SixToNine,
            ..LayoutCustomization::default()
        };
        let body = CreatePresentationRequest {
            content: "# Slides",
            layout_customization: &layout,
            theme: layout.theme,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["theme"], "madison-lilac");
        assert_eq!(json["layout_customization"]["slide_range"], "6-9");
        assert_eq!(json["layout_customization"]["theme"], "madison-lilac");
    }

    #[test]
    fn test_token_field_fallbacks() {
        let r: TokenResponse = serde_json::from_str(r#"{"access_token":"a"}"#).unwrap();
        assert_eq!(r.into_token().as_deref(), Some("a"));

        let r: TokenResponse = serde_json::from_str(r#"{"token":"b"}"#).unwrap();
        assert_eq!(r.into_token().as_deref(), Some("b"));

        let r: TokenResponse = serde_json::from_str(r#"{"accessToken":"c"}"#).unwrap();
        assert_eq!(r.into_token().as_deref(), Some("c"));

        let r: TokenResponse = serde_json::from_str(r#"{"token_type":"bearer"}"#).unwrap();
        assert_eq!(r.into_token(), None);
    }
}
