use halo2_base::halo2_proofs::halo2curves::{bn256::Fr, ff::PrimeField};

use crate::{errors::DomainError, poseidon::Poseidon, poseidon_hash, scalar::scalar_from_hex};

fn fr(hex: &str) -> Fr {
    scalar_from_hex(hex).unwrap()
}

#[test]
fn test_t3_matches_circomlib() {
    let hash = Poseidon::t3()
        .hash(&[Fr::from_u128(1), Fr::from_u128(2)])
        .unwrap();
    assert_eq!(
        hash,
        fr("0x115cc0f5e7d690413df64c6b9662e9cf2a3617f2743245519e19607a4417189a")
    );
}

#[test]
fn test_t3_zero_leaf() {
    let hash = Poseidon::t3().hash(&[Fr::zero(), Fr::zero()]).unwrap();
    assert_eq!(
        hash,
        fr("0x2098f5fb9e239eab3ceac3f27b81e481dc3124d55ffed523a839ee8446b64864")
    );
}

#[test]
fn test_t4_matches_circomlib() {
    let hash = Poseidon::t4()
        .hash(&[Fr::from_u128(1), Fr::from_u128(2), Fr::from_u128(3)])
        .unwrap();
    assert_eq!(
        hash,
        fr("0x0e7732d89e6939c0ff03d5e58dab6302f3230e269dc5b968f725df34ab36d732")
    );
    assert_eq!(
        hash,
        Fr::from_str_vartime(
            "6542985608222806190361240322586112750744169038454362455181422643027100751666"
        )
        .unwrap()
    );
}

#[test]
fn test_t4_zero_inputs() {
    let hash = Poseidon::t4()
        .hash(&[Fr::zero(), Fr::zero(), Fr::zero()])
        .unwrap();
    assert_eq!(
        hash,
        fr("0x0bc188d27dcceadc1dcfb6af0a7af08fe2864eecec96c5ae7cee6db31ba599aa")
    );
}

#[test]
fn test_instances_shape() {
    assert_eq!(Poseidon::t3().width(), 3);
    assert_eq!(Poseidon::t3().arity(), 2);
    assert_eq!(Poseidon::t4().width(), 4);
    assert_eq!(Poseidon::t4().arity(), 3);
}

#[test]
fn test_wrong_arity_fails() {
    let inputs = [Fr::from_u128(1), Fr::from_u128(2), Fr::from_u128(3)];
    assert_eq!(
        Poseidon::t3().hash(&inputs),
        Err(DomainError::UnsupportedArity(3))
    );
    assert_eq!(
        Poseidon::t4().hash(&inputs[..2]),
        Err(DomainError::UnsupportedArity(2))
    );
    assert_eq!(
        poseidon_hash(&[Fr::from_u128(1)]),
        Err(DomainError::UnsupportedArity(1))
    );
    assert_eq!(poseidon_hash(&[]), Err(DomainError::UnsupportedArity(0)));
}

#[test]
fn test_poseidon_hash_dispatches_on_length() {
    let two = [Fr::from_u128(1), Fr::from_u128(2)];
    let three = [Fr::from_u128(1), Fr::from_u128(2), Fr::from_u128(3)];
    assert_eq!(poseidon_hash(&two), Poseidon::t3().hash(&two));
    assert_eq!(poseidon_hash(&three), Poseidon::t4().hash(&three));
}

#[test]
fn test_order_matters() {
    let a = Fr::from_u128(1);
    let b = Fr::from_u128(2);
    assert_ne!(
        Poseidon::t3().hash(&[a, b]).unwrap(),
        Poseidon::t3().hash(&[b, a]).unwrap()
    );
}

#[test]
fn test_shared_across_threads() {
    let expected = Poseidon::t3()
        .hash(&[Fr::from_u128(1), Fr::from_u128(2)])
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                Poseidon::t3()
                    .hash(&[Fr::from_u128(1), Fr::from_u128(2)])
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
