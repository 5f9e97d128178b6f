//! Galois Field GF(256) arithmetic for Shamir's Secret Sharing
//!
//! Uses the irreducible polynomial x^8 + x^4 + x^3 + x + 1 (0x11B),
//! the same field as AES. Log/exp tables are built with generator 3
//! (multiplying the running value by 2 and XORing it back in), so every
//! nonzero element appears exactly once in the exp cycle.

/// Log and exp tables, built once at compile time.
///
/// `EXP[i] = 3^i` for i in 0..255, repeated a second time so that
/// `EXP[log_a + log_b]` never needs a modulo. `LOG[0]` is unused.
const TABLES: ([u8; 510], [u8; 256]) = build_tables();

const fn build_tables() -> ([u8; 510], [u8; 256]) {
    let mut exp = [0u8; 510];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        exp[i + 255] = x as u8;
        log[x as usize] = i as u8;
        // x *= 3 in the field: x*3 = (x*2) ^ x, reducing mod 0x11b
        let mut x2 = x << 1;
        if x2 & 0x100 != 0 {
            x2 ^= 0x11b;
        }
        x = x2 ^ x;
        i += 1;
    }
    (exp, log)
}

const EXP: [u8; 510] = TABLES.0;
const LOG: [u8; 256] = TABLES.1;

/// Add two elements in GF(256) (XOR)
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Subtract two elements in GF(256) (same as add in characteristic 2)
#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply two elements in GF(256)
#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    EXP[LOG[a as usize] as usize + LOG[b as usize] as usize]
}

/// Divide two elements in GF(256)
#[inline]
pub fn gf_div(a: u8, b: u8) -> u8 {
    assert!(b != 0, "Division by zero in GF(256)");
    if a == 0 {
        return 0;
    }
    // Add 255 to keep the exponent non-negative
    EXP[LOG[a as usize] as usize + 255 - LOG[b as usize] as usize]
}

/// Compute the inverse of an element in GF(256)
#[inline]
pub fn gf_inv(a: u8) -> u8 {
    assert!(a != 0, "Inverse of zero in GF(256)");
    EXP[255 - LOG[a as usize] as usize]
}

/// Raise an element to a small non-negative power by repeated multiplication
pub fn gf_pow(base: u8, exp: u32) -> u8 {
    let mut result = 1u8;
    for _ in 0..exp {
        result = gf_mul(result, base);
    }
    result
}

/// Evaluate a polynomial at a given x value
/// coefficients[0] is the constant term, coefficients[n-1] is the highest degree
pub fn poly_eval(coefficients: &[u8], x: u8) -> u8 {
    if coefficients.is_empty() {
        return 0;
    }

    // Horner's method
    let mut result = 0u8;
    for &coef in coefficients.iter().rev() {
        result = gf_add(gf_mul(result, x), coef);
    }
    result
}

/// Lagrange interpolation to recover the secret at x=0
/// shares: slice of (x, y) where x is the share index and y is the share value
pub fn lagrange_interpolate(shares: &[(u8, u8)]) -> u8 {
    let mut secret = 0u8;

    for (i, &(xi, yi)) in shares.iter().enumerate() {
        let mut numerator = 1u8;
        let mut denominator = 1u8;

        for (j, &(xj, _)) in shares.iter().enumerate() {
            if i != j {
                // numerator *= (0 - xj) = xj (negation is identity in GF(2^n))
                numerator = gf_mul(numerator, xj);
                // denominator *= (xi - xj)
                denominator = gf_mul(denominator, gf_sub(xi, xj));
            }
        }

        // Lagrange basis polynomial Li(0) = numerator / denominator
        let li = gf_div(numerator, denominator);
        secret = gf_add(secret, gf_mul(yi, li));
    }

    secret
}
