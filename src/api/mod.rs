//! HTTP surface: one RTL page plus three JSON endpoints wrapping the
//! orchestrator. Collaborator failures become inline `{"error": …}` bodies;
//! the process never terminates on a request error.

pub mod handlers;

use actix_web::web;

use crate::pipelines::fill_mask::pipeline::MaskCompleter;
use crate::pipelines::ner::pipeline::EntityRecognizer;
use crate::translate::Translator;

/// Register the page and the API routes for a concrete workbench type.
pub fn routes<R, C, T>(cfg: &mut web::ServiceConfig)
where
    R: EntityRecognizer + 'static,
    C: MaskCompleter + 'static,
    T: Translator + 'static,
{
    cfg.service(web::resource("/").route(web::get().to(handlers::index)))
        .service(web::resource("/api/health").route(web::get().to(handlers::health::<R, C, T>)))
        .service(web::resource("/api/ner").route(web::post().to(handlers::recognize::<R, C, T>)))
        .service(
            web::resource("/api/complete").route(web::post().to(handlers::complete::<R, C, T>)),
        )
        .service(
            web::resource("/api/translate").route(web::post().to(handlers::translate::<R, C, T>)),
        );
}
