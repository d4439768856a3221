//! Integration tests for the extraction pipeline using fixture payloads.

use laptop_specs::compare::{compare_processors, compare_ram, Verdict};
use laptop_specs::{ExtractionStats, Extractor, RawProductPayload};

const PRODUCTS_FIXTURE: &str = include_str!("fixtures/raw_products.json");

fn load_fixture() -> Vec<RawProductPayload> {
    serde_json::from_str(PRODUCTS_FIXTURE).unwrap()
}

#[test]
fn test_extract_fixture_batch() {
    let payloads = load_fixture();
    let (products, stats) = Extractor::new().extract_batch(&payloads);

    assert_eq!(products.len(), 4);
    assert_eq!(stats.processed, 4);
    assert!(stats.fields_found > 0);
}

#[test]
fn test_title_only_gaming_laptop() {
    let payloads = load_fixture();
    let (products, _) = Extractor::new().extract_batch(&payloads);
    let asus = &products[0];

    // everything comes from the title; the stored brand is "Unknown"
    assert_eq!(asus.brand, "ASUS");
    assert_eq!(asus.model.as_deref(), Some("ROG Strix G15"));
    assert_eq!(asus.processor.as_deref(), Some("AMD Ryzen 9 6900HX"));
    assert_eq!(asus.ram.as_deref(), Some("16GB"));
    assert_eq!(asus.storage.as_deref(), Some("1TB SSD"));
    assert!(asus.graphics.as_deref().unwrap().contains("RTX 3070"));

    // display specs come from the bullet points
    assert_eq!(asus.screen_size.as_deref(), Some("15.6\""));
    assert_eq!(asus.screen_resolution.as_deref(), Some("Full HD"));
    assert_eq!(asus.refresh_rate.as_deref(), Some("300Hz"));

    assert_eq!(asus.price, Some(1399.99));
    assert_eq!(asus.rating, Some(4.6));
}

#[test]
fn test_structured_details_take_precedence() {
    let payloads = load_fixture();
    let (products, _) = Extractor::new().extract_batch(&payloads);
    let thinkpad = &products[1];

    assert_eq!(thinkpad.brand, "Lenovo");
    assert_eq!(thinkpad.processor.as_deref(), Some("Intel Core i7-1185G7"));
    assert_eq!(thinkpad.ram.as_deref(), Some("16GB LPDDR4"));
    assert_eq!(thinkpad.storage.as_deref(), Some("512GB SSD"));
    assert_eq!(thinkpad.screen_size.as_deref(), Some("14\""));
    assert_eq!(thinkpad.screen_resolution.as_deref(), Some("1920 x 1200"));
    assert_eq!(thinkpad.weight.as_deref(), Some("2.49 lbs"));

    // nested price object and "out of 5 stars" rating text both resolve
    assert_eq!(thinkpad.price, Some(1649.0));
    assert_eq!(thinkpad.rating, Some(4.5));
}

#[test]
fn test_tb_typo_corrected_with_warning() {
    let payloads = load_fixture();
    let mut stats = ExtractionStats::new();
    let budget = Extractor::new().extract_with_stats(&payloads[2], &mut stats);

    assert_eq!(budget.storage.as_deref(), Some("512GB SSD"));
    assert!(budget.warnings.iter().any(|w| w.contains("Corrected from TB")));
    assert_eq!(stats.corrections, 1);

    // the rest of the listing still extracts normally
    assert_eq!(budget.brand, "CHUWI");
    assert_eq!(budget.processor.as_deref(), Some("Intel Celeron N4020"));
    assert_eq!(budget.ram.as_deref(), Some("4GB"));
    assert_eq!(budget.screen_resolution.as_deref(), Some("HD"));
    assert_eq!(budget.weight.as_deref(), Some("3.8 lbs"));
}

#[test]
fn test_bare_m_series_shorthand_expanded() {
    let payloads = load_fixture();
    let (products, _) = Extractor::new().extract_batch(&payloads);
    let macbook = &products[3];

    // reseller stored brand loses to the "macbook" title vocabulary
    assert_eq!(macbook.brand, "Apple");
    assert_eq!(macbook.model.as_deref(), Some("MacBook Air 13.6"));
    // bare "M2 chip" expands to the full vendor form
    assert_eq!(macbook.processor.as_deref(), Some("Apple M2"));
    assert_eq!(macbook.storage.as_deref(), Some("256GB SSD"));
    assert_eq!(macbook.screen_resolution.as_deref(), Some("Retina"));
    assert_eq!(macbook.battery_life.as_deref(), Some("18 hours"));
    assert_eq!(macbook.price, Some(1099.0));
    assert_eq!(macbook.rating, Some(4.8));
}

#[test]
fn test_extraction_is_idempotent_across_runs() {
    let payloads = load_fixture();
    let extractor = Extractor::new();

    let (first, first_stats) = extractor.extract_batch(&payloads);
    let (second, second_stats) = extractor.extract_batch(&payloads);

    assert_eq!(first_stats, second_stats);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.processor, b.processor);
        assert_eq!(a.ram, b.ram);
        assert_eq!(a.storage, b.storage);
        assert_eq!(a.graphics, b.graphics);
        assert_eq!(a.brand, b.brand);
        assert_eq!(a.model, b.model);
    }
}

#[test]
fn test_scores_usable_for_ranking() {
    let payloads = load_fixture();
    let (products, _) = Extractor::new().extract_batch(&payloads);

    let gaming = &products[0];
    let budget = &products[2];

    assert!(gaming.processor_score() > budget.processor_score());
    assert!(gaming.ram_score() > budget.ram_score());
    assert!(gaming.storage_score() > budget.storage_score());
}

#[test]
fn test_head_to_head_verdicts() {
    let payloads = load_fixture();
    let (products, _) = Extractor::new().extract_batch(&payloads);

    let gaming = &products[0];
    let budget = &products[2];

    assert_eq!(
        compare_processors(
            gaming.processor.as_deref().unwrap(),
            budget.processor.as_deref().unwrap()
        ),
        Verdict::Better
    );
    assert_eq!(
        compare_ram(gaming.ram.as_deref().unwrap(), budget.ram.as_deref().unwrap()),
        Verdict::Better
    );
}

#[test]
fn test_ultra_outranks_classic_tiers() {
    assert_eq!(compare_processors("Intel Core Ultra 7", "Intel Core Ultra 5"), Verdict::Better);
    assert_eq!(compare_processors("Intel Core Ultra 5", "Intel Core i9"), Verdict::Better);
}

#[test]
fn test_ram_comparison_contract() {
    assert_eq!(compare_ram("16GB", "8GB"), Verdict::Better);
    assert_eq!(compare_ram("abc", "8GB"), Verdict::Unknown);
}
