use chrono::{Duration, Utc};
use stay_core::{
    core::{
        compute_quote,
        search::{search, PropertyFilter, SortOrder},
    },
    domain::Property,
    init,
    utils::build_info,
};

#[test]
fn booking_core_smoke() {
    init();

    let properties = vec![
        Property::new("Garden Flat", 75.0).with_location("Kumasi"),
        Property::new("Harbour Loft", 140.0).with_location("Takoradi"),
    ];
    let results = search(&properties, &PropertyFilter::default(), SortOrder::PriceHigh);
    assert_eq!(results[0].title, "Harbour Loft");

    let today = Utc::now().date_naive();
    let quote = compute_quote(
        today,
        today + Duration::days(2),
        results[0].price_per_night,
    )
    .unwrap();
    assert_eq!(quote.total_price, 280.0);

    assert!(build_info::current().summary().starts_with("stay_core "));
}
