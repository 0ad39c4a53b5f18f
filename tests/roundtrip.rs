use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use godelnum::{Language, VarClass, decode, encode};

fn power(base: u64, exp: u64) -> BigUint {
    Pow::pow(BigUint::from(base), exp)
}

#[test]
fn empty_input_identity() {
    assert_eq!(encode("").unwrap(), BigUint::zero());
    assert_eq!(decode(&BigUint::zero()).unwrap(), "");
}

#[test]
fn the_book_example() {
    // 0=0 encodes position codes 6, 5, 6 on primes 2, 3, 5.
    let expected = power(2, 6) * power(3, 5) * power(5, 6);
    let number = encode("0=0").unwrap();
    assert_eq!(number, expected);
    assert_eq!(decode(&number).unwrap(), "0=0");
}

#[test]
fn the_second_book_example() {
    let text = "(∃pPx)(x=sy)";
    let number = encode(text).unwrap();
    assert_eq!(decode(&number).unwrap(), text);
}

#[test]
fn variable_codes_follow_first_seen_order() {
    // x and its repeat share 13; y and z get 17 and 19.
    let expected = power(2, 13) * power(3, 17) * power(5, 13) * power(7, 19);
    let number = encode("xyxz").unwrap();
    assert_eq!(number, expected);
    assert_eq!(decode(&number).unwrap(), "xyxz");
}

#[test]
fn classes_assign_primes_independently() {
    // Each class starts from prime 13 for its own first variable.
    let expected = power(2, 13) * power(3, 13 * 13) * power(5, 13u64 * 13 * 13);
    let number = encode("xpP").unwrap();
    assert_eq!(number, expected);
    assert_eq!(decode(&number).unwrap(), "xpP");
}

#[test]
fn ticked_variables_survive_the_cycle() {
    // Four distinct numerical variables exhaust the pool and cycle into x`.
    let text = "xyzx`=x";
    let number = encode(text).unwrap();
    assert_eq!(decode(&number).unwrap(), text);
}

#[test]
fn full_constant_alphabet_roundtrips() {
    let text = "~∨⊃∃=0s(),+×";
    let number = encode(text).unwrap();
    assert_eq!(decode(&number).unwrap(), text);
}

/// Build a random string whose variables are introduced in the canonical
/// pool order, so decoding reproduces it exactly.
fn canonical_string(rng: &mut impl Rng, len: usize) -> String {
    let lang = Language::default();
    let signs: Vec<char> = lang.signs().signs().collect();
    let classes = [VarClass::Numerical, VarClass::Sentential, VarClass::Predicate];
    let mut names: [Vec<String>; 3] = Default::default();
    let mut text = String::new();

    for _ in 0..len {
        if rng.random_bool(0.5) {
            text.push(signs[rng.random_range(0..signs.len())]);
            continue;
        }
        let which = rng.random_range(0..3);
        let pool = lang.pool(classes[which]);
        if names[which].is_empty() || rng.random_bool(0.4) {
            // Introduce the next variable of this class.
            let n = names[which].len();
            let mut name = String::new();
            name.push(pool[n % pool.len()]);
            for _ in 0..n / pool.len() {
                name.push(lang.tick());
            }
            names[which].push(name.clone());
            text.push_str(&name);
        } else {
            let name = &names[which][rng.random_range(0..names[which].len())];
            text.push_str(name);
        }
    }
    text
}

#[test]
fn randomized_canonical_roundtrips() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x60DE1);
    for _ in 0..30 {
        let len = rng.random_range(1..=8);
        let text = canonical_string(&mut rng, len);
        let number = encode(&text).unwrap();
        assert_eq!(decode(&number).unwrap(), text, "string was {text:?}");
    }
}

#[test]
fn randomized_encodings_are_stable_under_decode() {
    // For arbitrary valid strings the decoded form may rename variables, but
    // re-encoding it must land on the same number.
    let mut rng = ChaCha20Rng::seed_from_u64(0xBEEF);
    let alphabet: Vec<char> = "~∨⊃∃=0s(),+×xyzpqrPQR".chars().collect();
    for _ in 0..30 {
        let len = rng.random_range(1..=8);
        let mut text = String::new();
        for _ in 0..len {
            text.push(alphabet[rng.random_range(0..alphabet.len())]);
        }
        let number = encode(&text).unwrap();
        let decoded = decode(&number).unwrap();
        assert_eq!(encode(&decoded).unwrap(), number, "string was {text:?}");
    }
}

#[test]
fn one_is_a_godel_number_of_nothing() {
    // factor(1) is empty, so 1 decodes like an empty factorization.
    assert_eq!(decode(&BigUint::one()).unwrap(), "");
}
