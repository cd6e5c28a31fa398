use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hotel_recommender::{
    build_catalog, recommend,
    pipeline::{normalize, CityScope, FeatureEncoder},
    ranking::{CosineRanker, Ranker},
    HotelRecord, UserPreference,
};

const AMENITIES: [&str; 14] = [
    "Free Wi-Fi", "Breakfast", "Parking", "Pool", "Gym", "Restaurant", "Pet-friendly",
    "Spa", "Bar", "Air-conditioned", "Kitchen", "Airport shuttle", "Beach access", "Hot tub",
];

fn create_test_records(hotels: usize) -> Vec<HotelRecord> {
    (0..hotels)
        .flat_map(|i| {
            let city = if i % 4 == 0 { "Rome" } else { "Paris" };
            let amenities: Vec<&str> = AMENITIES
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % 3 != 0)
                .map(|(_, a)| *a)
                .take(9)
                .collect();
            let row = HotelRecord::new(format!("Hotel {}", i), city)
                .with_rating(3.0 + (i % 20) as f64 / 10.0)
                .with_price(80.0 + (i % 50) as f64 * 5.0)
                .with_amenities(amenities);
            [row.clone(), row]
        })
        .collect()
}

fn bench_catalog(c: &mut Criterion) {
    let records = create_test_records(5_000);

    c.bench_function("build_catalog_10k_rows", |b| {
        b.iter(|| black_box(build_catalog(&records).unwrap()));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let records_1k = create_test_records(1_000);
    let records_10k = create_test_records(10_000);
    let catalog_1k = build_catalog(&records_1k).unwrap();
    let catalog_10k = build_catalog(&records_10k).unwrap();
    let pref = UserPreference::from_toggles(&[true, false, true, true, false, false, true, false, false, true]);

    c.bench_function("recommend_1k_hotels", |b| {
        b.iter(|| black_box(recommend(&records_1k, &catalog_1k, "paris", &pref).unwrap()));
    });

    c.bench_function("recommend_10k_hotels", |b| {
        b.iter(|| black_box(recommend(&records_10k, &catalog_10k, "paris", &pref).unwrap()));
    });
}

fn bench_cosine_ranking(c: &mut Criterion) {
    let records = create_test_records(10_000);
    let catalog = build_catalog(&records).unwrap();
    let CityScope::Hotels(hotels) = normalize(&records, "Paris") else {
        panic!("no hotels");
    };
    let encoded = FeatureEncoder::new(&catalog).encode_all(hotels);
    let ranker = CosineRanker::new();
    let pref = UserPreference::from_toggles(&[true; 10]);

    c.bench_function("cosine_rank_7500", |b| {
        b.iter(|| black_box(ranker.rank(&pref, &encoded).unwrap()));
    });
}

criterion_group!(benches, bench_catalog, bench_recommend, bench_cosine_ranking);
criterion_main!(benches);
