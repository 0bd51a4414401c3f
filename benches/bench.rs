// Criterion benchmarks for Capmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use capmatch::core::{calculate_match_score, InvestorCriteria, Matcher};
use capmatch::models::{Deal, InvestorProfile, RiskProfile, ScoringWeights};

const ASSET_TYPES: [&str; 5] = ["multifamily", "office", "industrial", "retail", "hospitality"];
const MARKETS: [&str; 5] = ["Chicago", "Austin", "Boston", "Miami", "Denver"];

fn create_investor(id: usize) -> InvestorCriteria {
    let risk = match id % 3 {
        0 => RiskProfile::Low,
        1 => RiskProfile::Moderate,
        _ => RiskProfile::High,
    };
    InvestorCriteria::new(InvestorProfile {
        id: id.to_string(),
        name: format!("Investor {}", id),
        minimum_investment: 1_000_000.0 * (1 + id % 10) as f64,
        maximum_investment: 50_000_000.0,
        preferred_asset_types: vec![
            ASSET_TYPES[id % 5].to_string(),
            ASSET_TYPES[(id + 2) % 5].to_string(),
        ],
        preferred_markets: vec![MARKETS[id % 5].to_string(), MARKETS[(id + 1) % 5].to_string()],
        minimum_return_expectation: 6.0 + (id % 8) as f64,
        risk_profile: risk,
        investment_horizon: "5 years".to_string(),
    })
}

fn create_deal() -> Deal {
    Deal {
        asset_type: "multifamily".to_string(),
        market: "Chicago".to_string(),
        investment_amount: 4_000_000.0,
        expected_return: 9.0,
        risk_profile: RiskProfile::Moderate,
    }
}

fn bench_match_score(c: &mut Criterion) {
    let deal = create_deal();
    let investor = create_investor(0);
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&deal), black_box(&investor), &weights));
    });
}

fn bench_match_deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_deal");
    let matcher = Matcher::with_default_weights();
    let deal = create_deal();

    for size in [10, 100, 1000].iter() {
        let investors: Vec<InvestorCriteria> = (0..*size).map(create_investor).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| matcher.match_deal(black_box(&deal), black_box(&investors)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_match_deal);
criterion_main!(benches);
