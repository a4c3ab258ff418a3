use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tahlil::api;
use tahlil::app::Workbench;
use tahlil::config::AppConfig;
use tahlil::models::{BertFillMaskModel, BertNerModel};
use tahlil::pipelines::fill_mask::{FillMaskPipeline, FillMaskPipelineBuilder};
use tahlil::pipelines::ner::{NerPipeline, NerPipelineBuilder};
use tahlil::translate::HttpTranslator;

type Ner = NerPipeline<BertNerModel>;
type FillMask = FillMaskPipeline<BertFillMaskModel>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    // Model handles are built once here and shared read-only for the process
    // lifetime; the NER builder applies the primary-then-fallback policy.
    let ner = NerPipelineBuilder::new(config.ner_primary.as_str())
        .fallback(config.ner_fallback.as_str())
        .build::<BertNerModel>()
        .map_err(into_io)?;
    let fill_mask = FillMaskPipelineBuilder::new(config.fill_mask_model.as_str())
        .mask_token(config.mask_token.as_str())
        .build::<BertFillMaskModel>()
        .map_err(into_io)?;
    let translator = HttpTranslator::new(
        config.translate_endpoint.as_str(),
        config.translate_api_key.clone(),
    );

    info!(
        ner = ner.model_id(),
        fill_mask = fill_mask.model_id(),
        translate = translator.endpoint(),
        "collaborators initialized"
    );

    let bench = web::Data::new(Workbench::new(ner, fill_mask, translator));

    info!(addr = %config.bind_addr, "listening");
    HttpServer::new(move || {
        App::new()
            .app_data(bench.clone())
            .configure(api::routes::<Ner, FillMask, HttpTranslator>)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}

fn into_io(err: tahlil::TahlilError) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
