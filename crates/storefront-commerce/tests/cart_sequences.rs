use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use storefront_commerce::prelude::*;

/// Catalog prices carry sub-cent digits, like sale prices from the API.
const PRICES: [f64; 6] = [1.25, 957.5775, 0.125, 19.99, 3.3333, 40.0];

#[derive(Clone, Debug)]
enum Op {
    Add { product: usize, quantity: u32 },
    SetQuantity { product: usize, quantity: i64 },
    Remove { product: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    let product = 0..PRICES.len();
    prop_oneof![
        (product.clone(), 1u32..=4).prop_map(|(product, quantity)| Op::Add { product, quantity }),
        (product.clone(), -2i64..=4)
            .prop_map(|(product, quantity)| Op::SetQuantity { product, quantity }),
        product.prop_map(|product| Op::Remove { product }),
    ]
}

fn catalog() -> Vec<Product> {
    PRICES
        .iter()
        .enumerate()
        .map(|(i, price)| {
            let id = i as u64 + 1;
            Product::new(id, format!("Item {}", id), Money::from_decimal(*price))
        })
        .collect()
}

proptest! {
    #[test]
    fn operation_sequences_keep_ids_unique_and_match_model(
        ops in prop::collection::vec(arb_op(), 0..200)
    ) {
        let products = catalog();
        let mut cart = Cart::new();
        // Reference model: id -> quantity, plus first-insertion order.
        let mut model: HashMap<ProductId, i64> = HashMap::new();
        let mut order: Vec<ProductId> = Vec::new();

        for op in ops {
            match op {
                Op::Add { product, quantity } => {
                    let product = &products[product];
                    cart.add(product, quantity);
                    if !model.contains_key(&product.id) {
                        order.push(product.id);
                    }
                    *model.entry(product.id).or_insert(0) += i64::from(quantity);
                }
                Op::SetQuantity { product, quantity } => {
                    let id = products[product].id;
                    let changed = cart.set_quantity(id, quantity);
                    prop_assert_eq!(changed, model.contains_key(&id));
                    if model.contains_key(&id) {
                        if quantity < 1 {
                            model.remove(&id);
                            order.retain(|o| *o != id);
                        } else {
                            model.insert(id, quantity);
                        }
                    }
                }
                Op::Remove { product } => {
                    let id = products[product].id;
                    prop_assert_eq!(cart.remove(id), model.remove(&id).is_some());
                    order.retain(|o| *o != id);
                }
            }

            let ids: Vec<ProductId> = cart.items().iter().map(|i| i.id).collect();
            let unique: HashSet<ProductId> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len(), "duplicate id in cart");
            prop_assert_eq!(&ids, &order, "insertion order diverged");
            prop_assert!(cart.items().iter().all(|i| i.quantity >= 1));

            let expected_count: i64 = model.values().sum();
            prop_assert_eq!(cart.total_count() as i64, expected_count);

            // Sum of unscaled price times quantity, rounded once.
            let expected_micros: i64 = model
                .iter()
                .map(|(id, q)| (PRICES[id.get() as usize - 1] * 1_000_000.0).round() as i64 * q)
                .sum();
            prop_assert_eq!(cart.total_price(), Money::from_micros(expected_micros));
        }
    }
}

#[test]
fn add_twice_scenario() {
    let mut cart = Cart::new();
    let p = Product::new(1, "Widget", Money::from_decimal(10.0));

    cart.add(&p, 1);
    cart.add(&p, 2);

    assert_eq!(cart.len(), 1);
    let item = &cart.items()[0];
    assert_eq!(item.id, ProductId::new(1));
    assert_eq!(item.quantity, 3);
    assert_eq!(cart.total_price().display_amount(), "30.00");
}

#[test]
fn sub_cent_prices_round_only_the_total() {
    let sale: Product = serde_json::from_str(r#"{"id": 7, "name": "Sofa", "price": 957.5775}"#).unwrap();
    let mut cart = Cart::new();
    cart.add(&sale, 3);
    assert_eq!(cart.total_price().display(), "$2872.73");

    let token: Product = serde_json::from_str(r#"{"id": 8, "name": "Token", "price": 0.125}"#).unwrap();
    let mut cart = Cart::new();
    cart.add(&token, 4);
    assert_eq!(cart.total_price().display(), "$0.50");
}
