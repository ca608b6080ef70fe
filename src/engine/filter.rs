//! Preference filtering over the catalog.
//!
//! Pure functions: no I/O, no errors. Malformed product fields were already
//! defaulted at ingestion; here a missing size list fails a strict size
//! filter and a missing price fails any finite ceiling.

use crate::domain::{PreferenceSet, Product};
use tracing::debug;

/// Return the products matching `prefs`, preserving catalog order.
pub fn filter(catalog: &[Product], prefs: &PreferenceSet) -> Vec<Product> {
    let genders = normalized_genders(prefs);
    let deck: Vec<Product> = catalog
        .iter()
        .filter(|p| {
            matches_size(p, prefs)
                && matches_category(p, prefs)
                && gender_passes(&p.gender, &genders)
                && matches_price(p, prefs)
        })
        .cloned()
        .collect();

    debug!(
        "Filtered catalog: kept {} of {} products",
        deck.len(),
        catalog.len()
    );
    deck
}

/// True if `product` passes every rule.
pub fn matches(product: &Product, prefs: &PreferenceSet) -> bool {
    matches_size(product, prefs)
        && matches_category(product, prefs)
        && matches_gender(product, prefs)
        && matches_price(product, prefs)
}

/// Product size tokens must share at least one entry with `prefs.sizes`.
pub fn matches_size(product: &Product, prefs: &PreferenceSet) -> bool {
    if prefs.sizes.is_empty() {
        return true;
    }
    product
        .size_tokens()
        .iter()
        .any(|token| prefs.sizes.iter().any(|s| s == token))
}

/// Exact, case-sensitive category membership.
pub fn matches_category(product: &Product, prefs: &PreferenceSet) -> bool {
    if prefs.categories.is_empty() {
        return true;
    }
    product
        .category
        .as_deref()
        .is_some_and(|c| prefs.categories.iter().any(|pc| pc == c))
}

/// Case-insensitive gender match with catalog-side aliases.
///
/// `"Unisex"` always passes. Catalog `"Men"`/`"Women"` map onto preference
/// `"Male"`/`"Female"`; the reverse mapping does not apply.
pub fn matches_gender(product: &Product, prefs: &PreferenceSet) -> bool {
    gender_passes(&product.gender, &normalized_genders(prefs))
}

/// Price at or below the ceiling. A missing price only passes when the
/// ceiling is unbounded too.
pub fn matches_price(product: &Product, prefs: &PreferenceSet) -> bool {
    match (prefs.max_price, product.price) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(max), Some(price)) => price <= max,
    }
}

fn normalized_genders(prefs: &PreferenceSet) -> Vec<String> {
    prefs.genders.iter().map(|g| g.trim().to_lowercase()).collect()
}

fn gender_passes(gender: &str, accepted: &[String]) -> bool {
    if accepted.is_empty() {
        return true;
    }
    let gender = gender.trim().to_lowercase();
    let accepts = |g: &str| accepted.iter().any(|a| a == g);
    match gender.as_str() {
        "unisex" => true,
        g if accepts(g) => true,
        "men" => accepts("male"),
        "women" => accepts("female"),
        _ => false,
    }
}
