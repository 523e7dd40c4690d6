use autopost_core::{Product, SelectionStrategy};

/// Orders the catalog for selection under `strategy`.
///
/// Highest stock comes first; products with equal stock keep their catalog
/// order. Strategies without an ordering of their own rank the same way.
/// The input is never modified.
#[must_use]
pub fn rank(catalog: &[Product], strategy: SelectionStrategy) -> Vec<Product> {
    match strategy {
        SelectionStrategy::StockDescending => {}
        SelectionStrategy::NewestFirst
        | SelectionStrategy::HighestMargin
        | SelectionStrategy::Mixed => {
            tracing::debug!(%strategy, "no dedicated ordering, ranking by stock");
        }
    }
    by_stock_descending(catalog)
}

fn by_stock_descending(catalog: &[Product]) -> Vec<Product> {
    let mut ranked = catalog.to_vec();
    // sort_by is stable, so ties stay in catalog order.
    ranked.sort_by(|a, b| b.stock.cmp(&a.stock));
    ranked
}
