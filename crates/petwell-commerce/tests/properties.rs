//! Property tests for variant resolution and catalog filtering.

use petwell_commerce::prelude::*;
use proptest::prelude::*;

/// price, compare-at, stock (`None` = unlimited)
type Slot = Option<(i64, Option<i64>, Option<u32>)>;

fn slot() -> impl Strategy<Value = Slot> {
    prop::option::of((
        1i64..5_000,
        prop::option::of(1i64..8_000),
        prop::option::of(0u32..3),
    ))
}

/// A product with up to three options, a random subset of the combinations
/// as variants, and a random partial selection.
fn product_and_picks() -> impl Strategy<Value = (Product, Vec<Option<usize>>)> {
    prop::collection::vec(1usize..=3, 1..=3).prop_flat_map(|counts| {
        let combos: usize = counts.iter().product();
        let picks: Vec<_> = counts
            .iter()
            .map(|&n| prop::option::of(0..n))
            .collect();
        (
            Just(counts),
            prop::collection::vec(slot(), combos),
            picks,
        )
            .prop_map(|(counts, slots, picks)| (build_product(&counts, &slots), picks))
    })
}

fn option_name(i: usize) -> String {
    format!("O{}", i)
}

fn value_name(j: usize) -> String {
    format!("v{}", j)
}

fn build_product(counts: &[usize], slots: &[Slot]) -> Product {
    let usd = |cents| Money::new(cents, Currency::USD);
    let mut product = Product::new("prop", "Prop Product", "prop-product", usd(999));
    for (i, &n) in counts.iter().enumerate() {
        product = product.with_option(ProductOption::new(
            option_name(i),
            (0..n).map(value_name),
        ));
    }
    for (combo, slot) in slots.iter().enumerate() {
        let Some((price, compare_at, stock)) = *slot else {
            continue;
        };
        let mut variant = ProductVariant::new(format!("var-{}", combo), usd(price)).with_stock(
            match stock {
                Some(n) => Stock::Limited(n),
                None => Stock::Unlimited,
            },
        );
        if let Some(compare_at) = compare_at {
            variant = variant.with_compare_at(usd(compare_at));
        }
        let mut rest = combo;
        for (i, &n) in counts.iter().enumerate() {
            variant = variant.with_option(option_name(i), value_name(rest % n));
            rest /= n;
        }
        product = product.with_variant(variant);
    }
    product
}

fn selection_from(picks: &[Option<usize>]) -> Selection {
    picks
        .iter()
        .enumerate()
        .filter_map(|(i, pick)| pick.map(|j| (option_name(i), value_name(j))))
        .collect()
}

fn tagged_products() -> impl Strategy<Value = Vec<Product>> {
    let tag = prop::sample::select(vec!["dog", "cat", "puppy", "adult", "senior", "kitten"]);
    prop::collection::vec(prop::collection::vec(tag, 0..4), 0..12).prop_map(|tag_sets| {
        tag_sets
            .into_iter()
            .enumerate()
            .map(|(i, tags)| {
                let id = format!("p{}", i);
                Product::new(id.as_str(), id.as_str(), id.as_str(), Money::new(100, Currency::USD))
                    .with_tags(tags)
            })
            .collect()
    })
}

fn facet() -> impl Strategy<Value = Facet> {
    prop::sample::select(vec!["all", "dog", "cat", "puppy", "senior", "bird"]).prop_map(Facet::parse)
}

proptest! {
    #[test]
    fn test_can_add_iff_every_choice_is_available((product, picks) in product_and_picks()) {
        let selection = selection_from(&picks);
        let resolver = VariantResolver::new(&product);

        let complete = picks.iter().all(Option::is_some);
        let all_available = selection
            .iter()
            .all(|(option, value)| resolver.is_option_value_available(option, value, &selection));

        prop_assert_eq!(resolver.can_add_to_cart(&selection), complete && all_available);
    }

    #[test]
    fn test_matched_variant_carries_the_selection((product, picks) in product_and_picks()) {
        let selection = selection_from(&picks);
        let resolver = VariantResolver::new(&product);

        let first = resolver.matching_variant(&selection).map(|v| v.id.clone());
        let again = resolver.matching_variant(&selection).map(|v| v.id.clone());
        prop_assert_eq!(&first, &again);

        if let Some(variant) = resolver.matching_variant(&selection) {
            for (option, value) in selection.iter() {
                prop_assert_eq!(variant.value_of(option), Some(value));
            }
        }
    }

    #[test]
    fn test_availability_ignores_own_choice((product, picks) in product_and_picks()) {
        let selection = selection_from(&picks);
        let resolver = VariantResolver::new(&product);

        for option in &product.options {
            let mut without = selection.clone();
            without.remove(&option.name);
            for value in &option.values {
                let mut switched = selection.clone();
                switched.set(option.name.as_str(), value.as_str());
                let expected = resolver.is_option_value_available(&option.name, value, &without);
                prop_assert_eq!(
                    resolver.is_option_value_available(&option.name, value, &selection),
                    expected
                );
                prop_assert_eq!(
                    resolver.is_option_value_available(&option.name, value, &switched),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_discount_present_only_below_compare_at((product, picks) in product_and_picks()) {
        let selection = selection_from(&picks);
        let resolver = VariantResolver::new(&product);
        let target = resolver.priced_target(&selection);

        let price = target.price.amount_cents as i128;
        match target.compare_at.map(|m| m.amount_cents as i128) {
            Some(compare_at) if compare_at > price => {
                let pct = resolver.discount_percentage(&selection);
                prop_assert!(pct.is_some());
                let pct = pct.unwrap_or_default() as i128;
                // Within half a percent of the exact ratio.
                let diff = (pct * compare_at - 100 * (compare_at - price)).abs();
                prop_assert!(diff * 2 <= compare_at);
            }
            _ => prop_assert_eq!(resolver.discount_percentage(&selection), None),
        }
    }

    #[test]
    fn test_option_change_is_idempotent((product, picks) in product_and_picks()) {
        let mut card = ProductCard::new(&product);
        for (i, pick) in picks.iter().enumerate() {
            if let Some(j) = pick {
                prop_assert!(card.handle_option_change(&option_name(i), &value_name(*j)));
            }
        }
        let before = card.view();
        for (i, pick) in picks.iter().enumerate() {
            if let Some(j) = pick {
                card.handle_option_change(&option_name(i), &value_name(*j));
            }
        }
        prop_assert_eq!(card.view(), before);
    }

    #[test]
    fn test_tag_filter_is_idempotent(
        products in tagged_products(),
        pet in facet(),
        stage in facet(),
    ) {
        let once: Vec<Product> = filter_by_tags(&products, &pet, &stage)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_by_tags(&once, &pet, &stage);
        prop_assert_eq!(twice.len(), once.len());

        for product in &once {
            prop_assert!(pet.matches(product) && stage.matches(product));
        }
    }

    #[test]
    fn test_all_facets_keep_everything_in_order(products in tagged_products()) {
        let kept = filter_by_tags(&products, &Facet::All, &Facet::All);
        let kept_ids: Vec<&ProductId> = kept.iter().map(|p| &p.id).collect();
        let ids: Vec<&ProductId> = products.iter().map(|p| &p.id).collect();
        prop_assert_eq!(kept_ids, ids);
    }
}
