use actix_web::{web, HttpResponse, Responder};
use crate::models::{DealError, ErrorResponse, HealthResponse, MatchDealRequest, MatchDealResponse};
use crate::routes::AppState;

/// Configure health and deal matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/deals/match", web::post().to(match_deal));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        investors: state.registry.len(),
    })
}

/// Build the 400 body for a rejected deal payload
pub(crate) fn validation_error(err: &DealError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: err.to_string(),
        status_code: 400,
        field: Some(err.field().to_string()),
    })
}

/// Match a deal against every investor
///
/// POST /api/v1/deals/match
///
/// Request body:
/// ```json
/// {
///   "assetType": "multifamily",
///   "market": "Chicago",
///   "investmentAmount": 4000000,
///   "expectedReturn": 9,
///   "riskProfile": "moderate"
/// }
/// ```
async fn match_deal(
    state: web::Data<AppState>,
    req: web::Json<MatchDealRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let deal = match req.to_deal() {
        Ok(deal) => deal,
        Err(e) => {
            tracing::info!("Rejected deal payload: {}", e);
            return validation_error(&e);
        }
    };

    tracing::debug!(
        "Matching deal: asset_type={}, market={}, amount={}, return={}, risk={}",
        deal.asset_type,
        deal.market,
        deal.investment_amount,
        deal.expected_return,
        deal.risk_profile
    );

    let outcome = state.matcher.match_deal(&deal, state.registry.as_ref());

    tracing::info!(
        "Returning {} matches for {} deal in {} ({} good of {} investors)",
        outcome.matches.len(),
        deal.asset_type,
        deal.market,
        outcome.total_matches,
        outcome.total_investors
    );

    HttpResponse::Ok().json(MatchDealResponse {
        deal: req.normalized(&deal),
        matches: outcome.matches,
        total_matches: outcome.total_matches,
    })
}
