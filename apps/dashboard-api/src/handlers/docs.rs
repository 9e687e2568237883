//! API reference code samples.

use actix_web::{HttpResponse, web};

use quill_core::code_samples::CodeSamples;
use quill_shared::ApiResponse;
use quill_shared::dto::{CodeSampleResponse, CodeSamplesRequest, CodeSamplesResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/docs/code-samples
pub async fn code_samples(
    state: web::Data<AppState>,
    body: web::Json<CodeSamplesRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let samples =
        CodeSamples::build(&state.api_base_url, &req.method, &req.path, &req.operation)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CodeSamplesResponse {
        default_tab: samples.default_tab.to_string(),
        tabs: samples
            .tabs
            .into_iter()
            .map(|tab| CodeSampleResponse {
                key: tab.key.to_string(),
                label: tab.label.to_string(),
                language: tab.language.as_str().to_string(),
                code: tab.code,
            })
            .collect(),
    })))
}
