use actix_web::{HttpResponse, Responder, get, web};

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{ApiResponse, service_error_response};
use crate::services::quotes::{latest_quote, random_quote};

#[get("/api/v2/quote/{route}/{type}")]
pub async fn get_quote(
    path: web::Path<(String, String)>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let (route, category) = path.into_inner();

    let result = match route.as_str() {
        "random" => random_quote(&category, repo.get_ref()),
        "latest" => latest_quote(&category, repo.get_ref()),
        _ => {
            return HttpResponse::BadRequest().json(ApiResponse::error("invalid route parameter"));
        }
    };

    match result {
        Ok(quote) => {
            let message = match route.as_str() {
                "random" => "have a random quote",
                _ => "have the latest quote",
            };
            HttpResponse::Ok().json(ApiResponse::quote(message, quote.text.as_str()))
        }
        Err(err) => service_error_response(err, config.debug),
    }
}
