use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::app::Workbench;
use crate::error::TahlilError;
use crate::pipelines::fill_mask::pipeline::MaskCompleter;
use crate::pipelines::ner::pipeline::EntityRecognizer;
use crate::translate::{TargetLanguage, Translator};

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target: TargetLanguage,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct Health<'a> {
    status: &'a str,
    ner_model: &'a str,
    mask_token: &'a str,
}

fn failure(err: TahlilError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    if err.is_invalid_input() {
        HttpResponse::UnprocessableEntity().json(body)
    } else {
        error!(error = %err, "request failed");
        HttpResponse::InternalServerError().json(body)
    }
}

/// The single RTL page.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../assets/index.html"))
}

pub async fn health<R, C, T>(bench: web::Data<Workbench<R, C, T>>) -> HttpResponse
where
    R: EntityRecognizer + 'static,
    C: MaskCompleter + 'static,
    T: Translator + 'static,
{
    HttpResponse::Ok().json(Health {
        status: "ok",
        ner_model: bench.ner_model_id(),
        mask_token: bench.mask_token(),
    })
}

pub async fn recognize<R, C, T>(
    bench: web::Data<Workbench<R, C, T>>,
    req: web::Json<TextRequest>,
) -> HttpResponse
where
    R: EntityRecognizer + 'static,
    C: MaskCompleter + 'static,
    T: Translator + 'static,
{
    // Inference is one synchronous call per user action.
    match bench.recognize(&req.text) {
        Ok(Some(report)) => HttpResponse::Ok().json(report),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(err) => failure(err),
    }
}

pub async fn complete<R, C, T>(
    bench: web::Data<Workbench<R, C, T>>,
    req: web::Json<TextRequest>,
) -> HttpResponse
where
    R: EntityRecognizer + 'static,
    C: MaskCompleter + 'static,
    T: Translator + 'static,
{
    match bench.complete(&req.text) {
        Ok(Some(candidates)) => HttpResponse::Ok().json(candidates),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(err) => failure(err),
    }
}

pub async fn translate<R, C, T>(
    bench: web::Data<Workbench<R, C, T>>,
    req: web::Json<TranslateRequest>,
) -> HttpResponse
where
    R: EntityRecognizer + 'static,
    C: MaskCompleter + 'static,
    T: Translator + 'static,
{
    match bench.translate(&req.text, req.target).await {
        Ok(Some(report)) => HttpResponse::Ok().json(report),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(err) => failure(err),
    }
}
