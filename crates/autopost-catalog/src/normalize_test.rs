use super::*;

fn make_variant(id: i64, price: &str, position: Option<i32>, qty: Option<i64>) -> ShopifyVariant {
    ShopifyVariant {
        id,
        title: "Default Title".to_owned(),
        sku: Some(format!("SKU-{id}")),
        price: price.to_owned(),
        available: true,
        position,
        inventory_quantity: qty,
    }
}

fn make_product(variants: Vec<ShopifyVariant>) -> ShopifyProduct {
    ShopifyProduct {
        id: 4_242,
        title: "Hoodie Essential Black".to_owned(),
        handle: "hoodie-essential-black".to_owned(),
        product_type: Some("Hoodies".to_owned()),
        tags: vec!["invierno".to_owned()],
        variants,
    }
}

#[test]
fn normalizes_basic_fields() {
    let product = make_product(vec![make_variant(1, "49990.00", Some(1), Some(89))]);
    let normalized = normalize_product(product).unwrap();
    assert_eq!(normalized.id, 4_242);
    assert_eq!(normalized.name, "Hoodie Essential Black");
    assert_eq!(normalized.sku, "SKU-1");
    assert_eq!(normalized.price, 49_990);
    assert_eq!(normalized.stock, 89);
    assert_eq!(normalized.category.as_deref(), Some("Hoodies"));
    assert!(normalized.color.is_none());
}

#[test]
fn price_comes_from_position_one_variant() {
    let product = make_product(vec![
        make_variant(1, "100.00", Some(2), None),
        make_variant(2, "200.00", Some(1), None),
    ]);
    assert_eq!(normalize_product(product).unwrap().price, 200);
}

#[test]
fn price_falls_back_to_first_variant_without_positions() {
    let product = make_product(vec![
        make_variant(1, "100.00", None, None),
        make_variant(2, "200.00", None, None),
    ]);
    assert_eq!(normalize_product(product).unwrap().price, 100);
}

#[test]
fn fractional_price_rounds_half_up() {
    let product = make_product(vec![make_variant(1, "12.50", Some(1), None)]);
    assert_eq!(normalize_product(product).unwrap().price, 13);
    let product = make_product(vec![make_variant(1, "12.49", Some(1), None)]);
    assert_eq!(normalize_product(product).unwrap().price, 12);
}

#[test]
fn stock_sums_available_variants_and_clamps_oversold() {
    let mut unavailable = make_variant(3, "10.00", None, Some(500));
    unavailable.available = false;
    let product = make_product(vec![
        make_variant(1, "10.00", Some(1), Some(40)),
        make_variant(2, "10.00", Some(2), Some(-5)),
        unavailable,
    ]);
    assert_eq!(normalize_product(product).unwrap().stock, 40);
}

#[test]
fn stock_is_zero_without_inventory_data() {
    let product = make_product(vec![make_variant(1, "10.00", Some(1), None)]);
    assert_eq!(normalize_product(product).unwrap().stock, 0);
}

#[test]
fn blank_sku_falls_back_to_handle() {
    let mut variant = make_variant(1, "10.00", Some(1), None);
    variant.sku = Some("  ".to_owned());
    let product = make_product(vec![variant]);
    assert_eq!(normalize_product(product).unwrap().sku, "HOODIE-ESSENTIAL-BLACK");
}

#[test]
fn empty_product_type_is_no_category() {
    let mut product = make_product(vec![make_variant(1, "10.00", Some(1), None)]);
    product.product_type = Some(String::new());
    assert!(normalize_product(product).unwrap().category.is_none());
}

#[test]
fn rejects_product_without_variants() {
    let err = normalize_product(make_product(vec![])).unwrap_err();
    assert!(
        matches!(err, CatalogError::Normalization { ref reason, .. } if reason.contains("no variants")),
        "got: {err:?}"
    );
}

#[test]
fn rejects_unparseable_price() {
    let product = make_product(vec![make_variant(1, "free", Some(1), None)]);
    assert!(matches!(
        normalize_product(product),
        Err(CatalogError::Normalization { .. })
    ));
}

#[test]
fn rejects_negative_price() {
    let product = make_product(vec![make_variant(1, "-3.00", Some(1), None)]);
    assert!(matches!(
        normalize_product(product),
        Err(CatalogError::Normalization { .. })
    ));
}

#[test]
fn rejects_zero_price() {
    for raw in ["0.00", "0.4"] {
        let product = make_product(vec![make_variant(1, raw, Some(1), Some(5))]);
        match normalize_product(product) {
            Err(CatalogError::Normalization { source_product_id, reason }) => {
                assert_eq!(source_product_id, "4242");
                assert!(reason.contains("must be positive"), "reason: {reason}");
            }
            other => panic!("expected normalization error for {raw}, got {other:?}"),
        }
    }
}
