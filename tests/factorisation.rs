use cantor::{
    factorise_term, factorise_term_successor, factors, subtract, terms, BigUint, Ordinal,
    OrdinalFactors, Pow, SubtractError,
};
use num_traits::One;

fn w() -> Ordinal {
    Ordinal::omega()
}

fn pairs(factors: &[(Ordinal, u64)]) -> Vec<(Ordinal, BigUint)> {
    factors.iter().map(|(base, exponent)| (base.clone(), BigUint::from(*exponent))).collect()
}

fn multiply(factors: &[(Ordinal, BigUint)]) -> Ordinal {
    factors.iter().map(|(base, exponent)| base.pow(exponent)).product()
}

fn assert_prime_bases(factors: &[(Ordinal, BigUint)]) {
    for (base, _) in factors {
        assert!(base.is_finite() || base.is_prime(), "{base} is not prime");
    }
}

/// Limit factors come first in strictly descending order, followed by a single run of
/// successor and finite factors, and no two neighbours share a base.
fn assert_canonical_order(factors: &OrdinalFactors) {
    let is_successor = |base: &Ordinal| base.is_finite() || base.is_successor();
    let split = factors
        .iter()
        .position(|(base, _)| is_successor(base))
        .unwrap_or(factors.len());
    let (limits, successors) = factors.as_slice().split_at(split);
    assert!(
        successors.iter().all(|(base, _)| is_successor(base)),
        "{factors} mixes limit and successor factors"
    );
    assert!(
        limits.windows(2).all(|pair| pair[0].0 > pair[1].0),
        "{factors} has limit factors out of order"
    );
    assert!(
        successors.windows(2).all(|pair| pair[0].0 != pair[1].0),
        "{factors} has ungrouped successor factors"
    );
}

#[test]
fn test_subtract() {
    let cases = [
        (Ordinal::from(7), Ordinal::from(3)),
        (w(), Ordinal::from(3)),
        (w() + 1, Ordinal::from(3)),
        (w().pow(2), Ordinal::one()),
        (w().pow(2) * 5, Ordinal::from(3)),
        (w() + 1, w()),
        (w().pow(3), w().pow(2)),
        (w().pow(3), w()),
        (w().pow(3), w() + 1),
        (w().pow(3) + w().pow(2), w()),
        (w().pow(3) + w().pow(2) + 1, w()),
        (w().pow(3) + 1, w().pow(3)),
        (w().pow(3) + w(), w().pow(3) + 5),
        (w().pow(3) + w() + 1, w().pow(3) + 5),
        (w().pow(3) * 4, w().pow(3) * 2),
        (w().pow(3) * 4 + w().pow(2), w().pow(3) * 2),
        (w().pow(3) * 4 + w().pow(2), w().pow(3) * 2 + w() + 1),
    ];
    for (a, b) in cases {
        let difference = subtract(&a, &b).unwrap();
        assert_eq!(&b + &difference, a, "{b} + ({difference}) != {a}");
    }

    assert_eq!(subtract(&Ordinal::from(7), &Ordinal::from(3)), Ok(Ordinal::from(4)));
    assert_eq!(subtract(&(w() + 1), &w()), Ok(Ordinal::one()));
    assert_eq!(subtract(&(w() + 3), &(w() + 1)), Ok(Ordinal::from(2)));
    assert_eq!(subtract(&(w() * 2), &(w() + 1)), Ok(w()));
    assert_eq!(
        subtract(&(w().pow(3) + w().pow(2)), &w()),
        Ok(w().pow(3) + w().pow(2))
    );
    assert_eq!(
        subtract(&(w().pow(3) * 4 + w().pow(2)), &(w().pow(3) * 2)),
        Ok(w().pow(3) * 2 + w().pow(2))
    );

    assert_eq!(
        subtract(&w(), &w()),
        Err(SubtractError { minuend: w(), subtrahend: w() })
    );
    assert!(subtract(&Ordinal::from(3), &w()).is_err());
    assert!(subtract(&Ordinal::ZERO, &Ordinal::ZERO).is_err());
    assert_eq!(
        subtract(&Ordinal::from(3), &(w() + 1)).unwrap_err().to_string(),
        "cannot subtract w + 1 from 3: the minuend must be strictly greater"
    );
}

#[test]
fn test_terms() {
    assert!(terms(&Ordinal::ZERO).is_empty());
    assert_eq!(terms(&Ordinal::from(5)), vec![Ordinal::from(5)]);
    assert_eq!(terms(&(w() * 3)), vec![w() * 3]);
    assert_eq!(
        terms(&(w().pow(w().pow(w())) + w().pow(3) + w() * 7 + 9)),
        vec![w().pow(w().pow(w())), w().pow(3), w() * 7, Ordinal::from(9)]
    );
    assert_eq!(terms(&(w().pow(2) + w())), vec![w().pow(2), w()]);

    let a = w().pow(w() + 1) * 3 + w().pow(5) + 12;
    assert_eq!(terms(&a).into_iter().sum::<Ordinal>(), a);
}

#[test]
fn test_factorise_term() {
    let cases = [
        w(),
        w() * 7,
        w().pow(2),
        w().pow(w() + 1),
        w().pow(w() + 1) * 9,
        w().pow(w().pow(2)),
        w().pow(w().pow(2) + w() * 3),
        w().pow(w().pow(w()) + w() * 3 + 6),
        w().pow(w().pow(w()) + w() * 3 + 6) * 19,
        w().pow(w().pow(w().pow(2)) * 2 + w() * 3 + 6) * 19,
        w().pow(w().pow(w() + 1) + w() + 6) * 19,
        w().pow(w() * 2),
        w().pow(w() * 3 + 1),
        w().pow(w().pow(w()) * 8 + w() * 3 + 1),
    ];
    for a in cases {
        let fs = factorise_term(a.as_cnf().unwrap());
        assert_eq!(multiply(&fs), a, "factors of {a} do not multiply back");
        assert_prime_bases(&fs);
    }

    let a = w().pow(w().pow(w()) * 7 + w() * 3 + 2) * 5;
    assert_eq!(
        factorise_term(a.as_cnf().unwrap()),
        pairs(&[
            (w().pow(w().pow(w())), 7),
            (w().pow(w()), 3),
            (w(), 2),
            (Ordinal::from(5), 1),
        ])
    );
    // the addend plays no part
    let a = w().pow(3) * 2 + w() + 4;
    assert_eq!(factorise_term(a.as_cnf().unwrap()), pairs(&[(w(), 3), (Ordinal::from(2), 1)]));
}

#[test]
fn test_factorise_term_successor() {
    let cases = [
        w(),
        w() * 3,
        w().pow(5),
        w().pow(3) * 7,
        w().pow(w() * 3),
        w().pow(w() * 3) * 2,
    ];
    for a in cases {
        let fs = factorise_term_successor(a.as_cnf().unwrap());
        assert_eq!(multiply(&fs), &a + 1, "factors of {a} + 1 do not multiply back");
        assert_prime_bases(&fs);
    }

    let a = w().pow(3) * 7;
    assert_eq!(
        factorise_term_successor(a.as_cnf().unwrap()),
        pairs(&[(w().pow(3) + 1, 1), (Ordinal::from(7), 1)])
    );
}

#[test]
fn test_factors() {
    let cases = [
        w(),
        w() + 1,
        w() + 2,
        w() * 5 + 16,
        w().pow(2),
        w().pow(2) * 17 + 3,
        w().pow(4) * 8,
        w().pow(w()),
        w().pow(w()) + 1,
        w().pow(w()) + w(),
        w().pow(w() + 1),
        w().pow(w() + 1) * 5,
        w().pow(w() + 1) + 1,
        w().pow(w() + 1) * 8 + 1,
        w().pow(w().pow(2)) + w().pow(w()),
        w().pow(w().pow(2)) + w().pow(w()) + w().pow(3),
        w().pow(w().pow(2)) + w().pow(w()) + w().pow(3) * 7,
        w().pow(w().pow(2)) + w().pow(w()) + 1,
        w().pow(w().pow(2)) + w().pow(w()) + 21,
        w().pow(w().pow(2)) + w().pow(w()) * 7 + 21,
        w().pow(w().pow(2)) * 13 + w().pow(w()) * 7 + 21,
        w().pow(w().pow(w())) + w().pow(w().pow(2)) + w().pow(w() * 7) + 21,
        w().pow(w().pow(w())) * 4 + w().pow(w().pow(2)) + w().pow(w() * 7) + 21,
        w().pow(w().pow(w() * 4)) + w().pow(w() + 1) + w().pow(w()) + 13,
        w().pow(w().pow(w() * 4)) + w().pow(w().pow(2) + 1) * 7 + w().pow(w()) + 13,
        w().pow(w().pow(w() * 4 + 2)) * 11 + w().pow(w().pow(2) + w() + 1) * 7 + w().pow(w()) + 13,
        (w() + 1).pow(3),
        (w().pow(2) + 1).pow(5),
    ];
    for a in cases {
        let fs = factors(&a);
        assert_prime_bases(fs.as_slice());
        assert_eq!(fs.product(), a, "{fs} is not a factorisation of {a}");
        assert_canonical_order(&fs);
    }
}

#[test]
fn test_factors_exact() {
    assert_eq!(factors(&Ordinal::ZERO).into_vec(), pairs(&[(Ordinal::ZERO, 1)]));
    assert_eq!(factors(&Ordinal::one()).into_vec(), pairs(&[(Ordinal::one(), 1)]));
    assert_eq!(factors(&Ordinal::from(12)).into_vec(), pairs(&[(Ordinal::from(12), 1)]));
    assert_eq!(factors(&w()).into_vec(), pairs(&[(w(), 1)]));
    assert_eq!(factors(&(w() + 1)).into_vec(), pairs(&[(w() + 1, 1)]));
    assert_eq!(
        factors(&(w() + 2)).into_vec(),
        pairs(&[(Ordinal::from(2), 1), (w() + 1, 1)])
    );
    assert_eq!(
        factors(&(w() * 5 + 16)).into_vec(),
        pairs(&[(Ordinal::from(16), 1), (w() + 1, 1), (Ordinal::from(5), 1)])
    );
    assert_eq!(
        factors(&(w().pow(4) * 8)).into_vec(),
        pairs(&[(w(), 4), (Ordinal::from(8), 1)])
    );
    assert_eq!(
        factors(&(w().pow(w()) + w())).into_vec(),
        pairs(&[(w(), 1), (w().pow(w()) + 1, 1)])
    );
    assert_eq!(
        factors(&(w().pow(w() + 1) * 5)).into_vec(),
        pairs(&[(w().pow(w()), 1), (w(), 1), (Ordinal::from(5), 1)])
    );
    assert_eq!(
        factors(&(w().pow(w() + 1) * 8 + 1)).into_vec(),
        pairs(&[(w().pow(w() + 1) + 1, 1), (Ordinal::from(8), 1)])
    );
    assert_eq!(
        factors(&(w().pow(2) + 1).pow(5)).into_vec(),
        pairs(&[(w().pow(2) + 1, 5)])
    );

    // Exponents and coefficients beyond u64
    let big = BigUint::one() << 70u32;
    let a = Ordinal::new(Ordinal::from(big.clone()), 3u64, 0).unwrap();
    assert_eq!(
        factors(&a).into_vec(),
        vec![(w(), big.clone()), (Ordinal::from(3), BigUint::one())]
    );
    let a = Ordinal::new(w() + 2, big.clone(), 0).unwrap();
    assert_eq!(
        factors(&a).into_vec(),
        vec![
            (w().pow(w()), BigUint::one()),
            (w(), BigUint::from(2u64)),
            (Ordinal::from(big), BigUint::one()),
        ]
    );
    assert_eq!(factors(&a).product(), a);

    // w**2 + w == w * (w + 1)
    let a = w().pow(2) + w();
    let fs = a.factors();
    assert_eq!(fs.len(), 2);
    assert!(fs.contains(&w()));
    assert!(fs.contains(&(w() + 1)));
    assert!(!fs.contains(&Ordinal::from(2)));
    assert_eq!(fs[0], (w(), BigUint::one()));
    assert_eq!(fs.get(1), Some(&(w() + 1, BigUint::one())));
    assert_eq!(fs.get(2), None);
    assert!(fs.iter().all(|(base, _)| base.is_prime()));
    assert_eq!(fs.product(), a);
}

#[test]
fn test_factors_grouping() {
    let fs = OrdinalFactors::new(pairs(&[
        (w(), 1),
        (w(), 2),
        (w() + 1, 0),
        (Ordinal::from(3), 1),
        (w() + 1, 1),
        (w() + 1, 1),
    ]));
    assert_eq!(fs.as_slice(), pairs(&[(w(), 3), (Ordinal::from(3), 1), (w() + 1, 2)]).as_slice());
    assert_eq!(fs.product(), w().pow(3) * 3 * (w() + 1).pow(2));

    let collected: OrdinalFactors = pairs(&[(w(), 1), (w(), 1)]).into_iter().collect();
    assert_eq!(collected, OrdinalFactors::from(pairs(&[(w(), 2)])));
    assert_eq!(Vec::from(collected), pairs(&[(w(), 2)]));

    let empty = OrdinalFactors::default();
    assert!(empty.is_empty());
    assert_eq!(empty.product(), 1);
    assert_eq!(empty.to_string(), "[]");

    let owned: Vec<(Ordinal, BigUint)> = factors(&(w() + 2)).into_iter().collect();
    assert_eq!(owned, pairs(&[(Ordinal::from(2), 1), (w() + 1, 1)]));
    let mut bases = Vec::new();
    for (base, _) in &factors(&(w() + 2)) {
        bases.push(base.clone());
    }
    assert_eq!(bases, vec![Ordinal::from(2), w() + 1]);
}
