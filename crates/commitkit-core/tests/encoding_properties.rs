//! Property tests for the canonical encoding and the hasher.

use commitkit_core::prelude::*;
use proptest::prelude::*;

fn registry() -> EnumRegistry {
    EnumRegistry::new()
        .with("Direction", ["North", "South", "East", "West"])
        .unwrap()
        .with("Slot", ["Empty", "Filled"])
        .unwrap()
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Unit),
        any::<u64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        any::<[u8; 32]>().prop_map(|b| Value::from(Bytes32::new(b))),
        "[a-z]{0,12}".prop_map(Value::from),
        prop::sample::select(vec!["North", "South", "East", "West"])
            .prop_map(|v| Value::unit_variant("Direction", v)),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4).prop_map(Value::Record),
            (prop::sample::select(vec!["Empty", "Filled"]), inner)
                .prop_map(|(name, payload)| Value::variant("Slot", name, payload)),
        ]
    })
}

proptest! {
    #[test]
    fn encoding_is_deterministic(v in value()) {
        let reg = registry();
        let r = Resolver::with_base(None, &reg);
        prop_assert_eq!(encode_with(&v, &r).unwrap(), encode_with(&v, &r).unwrap());
    }

    #[test]
    fn sequence_length_is_sum_of_elements(a in value(), b in value()) {
        let reg = registry();
        let r = Resolver::with_base(None, &reg);
        let ea = encode_with(&a, &r).unwrap();
        let eb = encode_with(&b, &r).unwrap();
        let seq = encode_with(&Value::seq([a, b]), &r).unwrap();
        prop_assert_eq!(seq.len(), ea.len() + eb.len());
        let mut concat = ea;
        concat.extend(eb);
        prop_assert_eq!(seq, concat);
    }

    #[test]
    fn hasher_equals_hash_of_concatenation(values in prop::collection::vec(value(), 0..6)) {
        let reg = registry();
        let mut h = Hasher::with_context(reg.clone());
        for v in &values {
            h.update(v).unwrap();
        }
        let direct = encode_many(values.iter(), Some(&reg)).unwrap();
        prop_assert_eq!(h.get_bytes(), direct.as_slice());
        prop_assert_eq!(h.finalize(), sha256(&direct));
    }

    #[test]
    fn clone_isolation(first in value(), extra in value()) {
        let reg = registry();
        let mut h1 = Hasher::with_context(reg);
        h1.update(&first).unwrap();
        let mut h2 = h1.clone();
        let snapshot = h2.finalize();
        h1.update(&extra).unwrap();
        prop_assert_eq!(h2.finalize(), snapshot);

        let h1_snapshot = h1.finalize();
        h2.update(&extra).unwrap().update(&first).unwrap();
        prop_assert_eq!(h1.finalize(), h1_snapshot);
        prop_assert!(h2.get_bytes().starts_with(h1.get_bytes()));
        prop_assert_eq!(h1.reset().finalize(), sha256(&[]));
    }

    #[test]
    fn u64_roundtrips_big_endian(n in any::<u64>()) {
        let bytes = encode(&Value::from(n), None).unwrap();
        prop_assert_eq!(bytes.len(), 8);
        prop_assert_eq!(u64::from_be_bytes(bytes.try_into().unwrap()), n);
    }
}

#[test]
fn direction_discriminants_follow_declaration_order() {
    let reg = registry();
    let r = Resolver::with_base(None, &reg);
    for (i, name) in ["North", "South", "East", "West"].iter().enumerate() {
        let bytes = encode_with(&Value::unit_variant("Direction", *name), &r).unwrap();
        assert_eq!(bytes, [i as u8]);
    }
}
