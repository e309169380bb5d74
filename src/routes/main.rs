use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::routes::ApiResponse;

/// Legacy query-string form of the quote endpoint, kept for old clients.
#[derive(Deserialize, Debug)]
pub struct LegacyQuoteQuery {
    route: Option<String>,
    #[serde(rename = "type")]
    category: Option<String>,
}

#[get("/")]
pub async fn index(query: web::Query<LegacyQuoteQuery>) -> impl Responder {
    // Redirect /?route={route}&type={type} to /api/v2/quote/{route}/{type}.
    if let (Some(route), Some(category)) = (&query.route, &query.category) {
        if !route.is_empty() && !category.is_empty() {
            return HttpResponse::MovedPermanently()
                .insert_header((
                    header::LOCATION,
                    format!("/api/v2/quote/{route}/{category}"),
                ))
                .finish();
        }
    }

    HttpResponse::Ok().json(ApiResponse::default_response())
}

/// Fallback for unmatched paths and methods.
pub async fn default_response() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::default_response())
}
