//! Display formatting for prices and stock counts.
//!
//! Both formatters work on the exact integer value and round half-up to one
//! decimal, so `29_950` is `$30.0k` and `29_949` is `$29.9k`.

/// Formats an integer price as thousands with one decimal, e.g.
/// `29_990` → `"$30.0k"`.
#[must_use]
pub fn format_price(price: u64) -> String {
    format!("${}k", thousands_one_decimal(price))
}

/// Formats a stock count; counts above 999 use the same `N.Nk` form as
/// prices (without the currency symbol).
#[must_use]
pub fn format_stock(stock: u32) -> String {
    if stock > 999 {
        format!("{}k", thousands_one_decimal(u64::from(stock)))
    } else {
        stock.to_string()
    }
}

fn thousands_one_decimal(value: u64) -> String {
    let tenths = value.saturating_add(50) / 100;
    format!("{}.{}", tenths / 10, tenths % 10)
}
