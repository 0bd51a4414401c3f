use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use crate::models::{ErrorResponse, MatchDealRequest};
use crate::routes::{matches::validation_error, AppState};

/// Configure investor lookup routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/investors", web::get().to(list_investors))
        .route("/investors/{id}", web::get().to(get_investor))
        .route("/investors/{id}/score", web::post().to(score_investor));
}

/// Optional preference filters for the investor listing
#[derive(Debug, Deserialize)]
pub struct InvestorFilter {
    #[serde(rename = "assetType")]
    pub asset_type: Option<String>,
    pub market: Option<String>,
}

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Investor not found".to_string(),
        message: format!("No investor with id '{}'", id),
        status_code: 404,
        field: None,
    })
}

/// List investor profiles
///
/// GET /api/v1/investors?assetType={assetType}&market={market}
///
/// Both filters are optional and case-insensitive.
async fn list_investors(
    state: web::Data<AppState>,
    query: web::Query<InvestorFilter>,
) -> impl Responder {
    let investors: Vec<_> = state
        .registry
        .iter()
        .filter(|c| {
            query
                .asset_type
                .as_deref()
                .map_or(true, |asset_type| c.accepts_asset_type(asset_type))
        })
        .filter(|c| {
            query
                .market
                .as_deref()
                .map_or(true, |market| c.accepts_market(market))
        })
        .map(|c| &c.profile)
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "investors": investors,
        "count": investors.len(),
    }))
}

/// Fetch a single investor profile
///
/// GET /api/v1/investors/{id}
async fn get_investor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match state.registry.get(&id) {
        Some(investor) => HttpResponse::Ok().json(&investor.profile),
        None => not_found(&id),
    }
}

/// Score a deal against one investor
///
/// POST /api/v1/investors/{id}/score
async fn score_investor(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<MatchDealRequest>,
) -> impl Responder {
    let id = path.into_inner();

    let Some(investor) = state.registry.get(&id) else {
        return not_found(&id);
    };

    let deal = match req.to_deal() {
        Ok(deal) => deal,
        Err(e) => {
            tracing::info!("Rejected deal payload for investor {}: {}", id, e);
            return validation_error(&e);
        }
    };

    let result = state.matcher.score(&deal, investor);
    tracing::debug!("Scored investor {}: {}", id, result.match_score);

    HttpResponse::Ok().json(result)
}
