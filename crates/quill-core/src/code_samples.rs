//! Request snippets shown next to each operation in the API reference.

use crate::domain::ApiOperation;
use crate::error::DomainError;

const METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Syntax-highlighting language of a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLanguage {
    Bash,
    JavaScript,
}

impl SampleLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleLanguage::Bash => "bash",
            SampleLanguage::JavaScript => "js",
        }
    }
}

/// One tab of the code sample panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    pub key: &'static str,
    pub label: &'static str,
    pub language: SampleLanguage,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSamples {
    pub default_tab: &'static str,
    pub tabs: Vec<CodeSample>,
}

impl CodeSamples {
    /// Build the cURL and NodeJS samples for `method path` on `base_url`.
    pub fn build(
        base_url: &str,
        method: &str,
        path: &str,
        operation: &ApiOperation,
    ) -> Result<Self, DomainError> {
        let method = method.to_ascii_uppercase();
        if !METHODS.contains(&method.as_str()) {
            return Err(DomainError::Validation(format!(
                "unsupported HTTP method: {method}"
            )));
        }
        if !path.starts_with('/') {
            return Err(DomainError::Validation(format!(
                "operation path must start with '/': {path}"
            )));
        }

        let url = format!("{}{}", base_url.trim_end_matches('/'), path);

        Ok(Self {
            default_tab: "curl",
            tabs: vec![
                CodeSample {
                    key: "curl",
                    label: "cURL",
                    language: SampleLanguage::Bash,
                    code: curl_command(&method, &url, operation)?,
                },
                CodeSample {
                    key: "nodejs",
                    label: "NodeJS",
                    language: SampleLanguage::JavaScript,
                    code: nodejs_command(&method, operation)?,
                },
            ],
        })
    }

    pub fn tab(&self, key: &str) -> Option<&CodeSample> {
        self.tabs.iter().find(|t| t.key == key)
    }
}

fn curl_command(method: &str, url: &str, operation: &ApiOperation) -> Result<String, DomainError> {
    let mut lines = vec![
        format!("curl -X {method} {url}"),
        "-H \"Accept: application/json\"".to_string(),
        "-H \"Authorization: Bearer <token>\"".to_string(),
    ];

    if let Some(body) = &operation.request_body_example {
        let json = serde_json::to_string(body).map_err(|e| DomainError::Internal(e.to_string()))?;
        lines.push("-H \"Content-Type: application/json\"".to_string());
        lines.push(format!("-d '{}'", json.replace('\'', "'\\''")));
    }

    Ok(lines.join(" \\\n  "))
}

fn nodejs_command(method: &str, operation: &ApiOperation) -> Result<String, DomainError> {
    let resource = operation
        .tags
        .first()
        .map(|tag| camel_case(tag))
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| "api".to_string());
    let action = operation
        .operation_id
        .as_deref()
        .and_then(|id| id.rsplit(':').next())
        .map(camel_case)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| method.to_ascii_lowercase());
    let arguments = match &operation.request_body_example {
        Some(body) => {
            serde_json::to_string_pretty(body).map_err(|e| DomainError::Internal(e.to_string()))?
        }
        None => String::new(),
    };

    Ok(format!(
        "import {{ Client }} from '@quill/sdk'\n\
         \n\
         const client = new Client({{\n  accessToken: process.env.ACCESS_TOKEN,\n}})\n\
         \n\
         const result = await client.{resource}.{action}({arguments})\n"
    ))
}

fn camel_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let words = value.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty());
    for (i, word) in words.enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_posts() -> ApiOperation {
        ApiOperation {
            operation_id: Some("posts:list_posts".to_string()),
            summary: Some("List posts".to_string()),
            tags: vec!["Posts".to_string()],
            request_body_example: None,
        }
    }

    #[test]
    fn test_curl_sample_targets_full_url() {
        let samples =
            CodeSamples::build("https://api.example.com/", "get", "/v1/posts", &list_posts())
                .unwrap();

        assert_eq!(samples.default_tab, "curl");
        let curl = samples.tab("curl").unwrap();
        assert_eq!(curl.language.as_str(), "bash");
        assert_eq!(
            curl.code,
            "curl -X GET https://api.example.com/v1/posts \\\n  \
             -H \"Accept: application/json\" \\\n  \
             -H \"Authorization: Bearer <token>\""
        );
    }

    #[test]
    fn test_curl_sample_with_body() {
        let operation = ApiOperation {
            request_body_example: Some(serde_json::json!({ "title": "It's live" })),
            ..list_posts()
        };
        let samples =
            CodeSamples::build("https://api.example.com", "POST", "/v1/posts", &operation).unwrap();

        let curl = &samples.tab("curl").unwrap().code;
        assert!(curl.contains("-H \"Content-Type: application/json\""));
        assert!(curl.ends_with("-d '{\"title\":\"It'\\''s live\"}'"));
    }

    #[test]
    fn test_nodejs_sample_uses_tag_and_operation_id() {
        let samples =
            CodeSamples::build("https://api.example.com", "GET", "/v1/posts", &list_posts())
                .unwrap();

        let node = samples.tab("nodejs").unwrap();
        assert_eq!(node.language.as_str(), "js");
        assert!(node.code.contains("const result = await client.posts.listPosts()"));
        assert!(node.code.contains("process.env.ACCESS_TOKEN"));
    }

    #[test]
    fn test_nodejs_sample_defaults_without_metadata() {
        let samples = CodeSamples::build(
            "https://api.example.com",
            "DELETE",
            "/v1/posts/1",
            &ApiOperation::default(),
        )
        .unwrap();

        let node = samples.tab("nodejs").unwrap();
        assert!(node.code.contains("await client.api.delete()"));
    }

    #[test]
    fn test_rejects_unknown_method_and_relative_path() {
        let op = list_posts();
        assert!(matches!(
            CodeSamples::build("https://x", "FETCH", "/v1", &op),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CodeSamples::build("https://x", "GET", "v1", &op),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_not_doubled() {
        let op = list_posts();
        for base in ["https://api.example.com", "https://api.example.com/"] {
            let samples = CodeSamples::build(base, "get", "/v1/posts", &op).unwrap();
            let curl = &samples.tab("curl").unwrap().code;
            assert!(curl.starts_with("curl -X GET https://api.example.com/v1/posts \\"));
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("list_posts"), "listPosts");
        assert_eq!(camel_case("Subscription Tiers"), "subscriptionTiers");
        assert_eq!(camel_case("listPosts"), "listPosts");
        assert_eq!(camel_case(""), "");
    }
}
