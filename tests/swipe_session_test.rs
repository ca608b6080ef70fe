use styleswipe::domain::{Decimal, PreferenceSet, Product, ProductId};
use styleswipe::engine::{SessionStatus, SwipeDirection, SwipeOutcome, SwipeSession};
use styleswipe::store::FavoritesStore;

fn deck(names: &[&str]) -> Vec<Product> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Product::new(ProductId::new(i as u64), *name)
                .with_sizes("M")
                .with_price(Decimal::from(10 * (i as u32 + 1)))
        })
        .collect()
}

#[test]
fn test_walkthrough_to_exhaustion() {
    let mut session = SwipeSession::new();
    let mut favorites = FavoritesStore::new();
    session.reset(deck(&["Tee", "Boots", "Cap"]));

    let outcomes: Vec<SwipeOutcome> = [
        SwipeDirection::Right,
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Right,
    ]
    .into_iter()
    .map(|d| session.swipe(d, &mut favorites))
    .collect();

    assert!(matches!(outcomes[0], SwipeOutcome::Liked { .. }));
    assert_eq!(outcomes[1], SwipeOutcome::Disliked { product: ProductId::new(1) });
    assert!(matches!(outcomes[2], SwipeOutcome::Liked { .. }));
    assert_eq!(outcomes[3], SwipeOutcome::Ignored);

    assert_eq!(session.status(), SessionStatus::Exhausted);
    assert_eq!(session.cursor(), 3);
    assert_eq!(session.remaining(), 0);

    let liked: Vec<&str> = favorites.list().iter().map(|e| e.product.name.as_str()).collect();
    assert_eq!(liked, vec!["Tee", "Cap"]);
}

#[test]
fn test_cursor_never_passes_deck_length() {
    let mut session = SwipeSession::new();
    let mut favorites = FavoritesStore::new();
    session.reset(deck(&["Tee"]));

    for _ in 0..5 {
        session.swipe(SwipeDirection::Left, &mut favorites);
        assert!(session.cursor() <= session.deck().len());
    }
    assert!(session.is_exhausted());
    assert!(session.current().is_none());
}

#[test]
fn test_swipes_ignored_before_catalog_loads() {
    let mut session = SwipeSession::new();
    let mut favorites = FavoritesStore::new();

    assert_eq!(session.status(), SessionStatus::Loading);
    assert_eq!(session.swipe(SwipeDirection::Right, &mut favorites), SwipeOutcome::Ignored);
    assert!(favorites.is_empty());
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_refilter_with_no_matches() {
    let mut session = SwipeSession::new();
    let mut favorites = FavoritesStore::new();
    let catalog = deck(&["Tee", "Boots"]);

    session.refilter(&catalog, &PreferenceSet::unconstrained().with_sizes(&["XXL"]));
    assert_eq!(session.status(), SessionStatus::NoMatches);
    assert!(session.current().is_none());
    assert_eq!(session.swipe(SwipeDirection::Left, &mut favorites), SwipeOutcome::Ignored);
}

#[test]
fn test_refilter_rewinds_exhausted_session() {
    let mut session = SwipeSession::new();
    let mut favorites = FavoritesStore::new();
    let catalog = deck(&["Tee", "Boots"]);

    session.refilter(&catalog, &PreferenceSet::unconstrained());
    session.swipe(SwipeDirection::Left, &mut favorites);
    session.swipe(SwipeDirection::Left, &mut favorites);
    assert!(session.is_exhausted());

    let cheap = PreferenceSet::unconstrained().with_max_price(Some(Decimal::from(10)));
    session.refilter(&catalog, &cheap);
    assert_eq!(session.status(), SessionStatus::Ready);
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.current().map(|p| p.name.as_str()), Some("Tee"));
    assert_eq!(session.remaining(), 1);
}

#[test]
fn test_liking_same_product_twice_keeps_both_entries() {
    let mut session = SwipeSession::new();
    let mut favorites = FavoritesStore::new();
    let catalog = deck(&["Tee"]);

    session.refilter(&catalog, &PreferenceSet::unconstrained());
    let first = session.swipe_right(&mut favorites).unwrap();
    session.refilter(&catalog, &PreferenceSet::unconstrained());
    let second = session.swipe_right(&mut favorites).unwrap();

    assert_ne!(first, second);
    assert_eq!(favorites.len(), 2);
}
