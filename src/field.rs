//! Extension-field elements GF(pᵏ), their exp/log tables, and the factory that finds a
//! primitive element and an irreducible modulus for a given (p, k).

use crate::error::{Error, Result};
use crate::poly::{FieldElement, Polynomial};
use crate::scalar::PrimeScalar;

/// Little-endian base-`p` digits of `n`, padded/truncated to length `k`.
fn to_vector(mut n: u32, p: u32, k: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(k as usize);
    for _ in 0..k {
        out.push(n % p);
        n /= p;
    }
    out
}

fn to_integer(v: &[u32], p: u32) -> u32 {
    v.iter().rev().fold(0u32, |acc, &d| acc * p + d)
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Slow reference polynomial multiply modulo `modulus`, used only to build the
/// exp/log tables (after which all multiplication goes through them).
fn reference_multiply(a: u32, b: u32, p: u32, k: u32, modulus: &Polynomial<PrimeScalar>) -> u32 {
    let av: Vec<PrimeScalar> = to_vector(a, p, k).into_iter().map(|d| PrimeScalar::new(d, p)).collect();
    let bv: Vec<PrimeScalar> = to_vector(b, p, k).into_iter().map(|d| PrimeScalar::new(d, p)).collect();

    let pa = Polynomial::new(av);
    let pb = Polynomial::new(bv);
    let product = pa.mul(&pb);

    let reduced = product.rem(modulus).expect("modulus is monic, never divides by zero");

    let mut digits = vec![0u32; k as usize];
    for (i, c) in reduced.coefs().iter().enumerate() {
        if i < digits.len() {
            digits[i] = c.value();
        }
    }
    to_integer(&digits, p)
}

/// An immutable GF(pᵏ) field descriptor: the prime, extension degree, irreducible
/// modulus, primitive element, and the exp/log tables built from them.
#[derive(Debug)]
pub struct Field {
    p: u32,
    k: u32,
    order: u32,
    modulus: Polynomial<PrimeScalar>,
    alpha: u32,
    exp_table: Vec<u32>,
    log_table: Vec<Option<u32>>,
}

impl Field {
    /// Build a field from an explicit (p, k, α, irreducible modulus) tuple, validating
    /// the primitive-cycle invariant along the way.
    pub fn new(p: u32, k: u32, alpha: u32, modulus_coefs: Vec<u32>) -> Result<Field> {
        if !is_prime(p) || k < 1 {
            return Err(Error::InvalidField);
        }
        if modulus_coefs.len() != k as usize + 1 || modulus_coefs[k as usize] != 1 {
            return Err(Error::InvalidField);
        }

        let order = p.checked_pow(k).ok_or(Error::InvalidField)?;
        if alpha == 0 || alpha >= order {
            return Err(Error::InvalidField);
        }

        let modulus = Polynomial::new(
            modulus_coefs.into_iter().map(|d| PrimeScalar::new(d, p)).collect(),
        );

        let mut exp_table = vec![0u32; (order - 1) as usize];
        let mut log_table: Vec<Option<u32>> = vec![None; order as usize];
        let mut seen = vec![false; order as usize];

        let mut x = 1u32;
        for i in 0..(order - 1) {
            if seen[x as usize] {
                return Err(Error::InvalidField);
            }
            seen[x as usize] = true;
            exp_table[i as usize] = x;
            log_table[x as usize] = Some(i);

            x = reference_multiply(x, alpha, p, k, &modulus);
        }

        if x != 1 {
            return Err(Error::InvalidField);
        }
        if seen[1..].iter().filter(|&&b| b).count() != (order - 1) as usize {
            return Err(Error::InvalidField);
        }

        Ok(Field {
            p,
            k,
            order,
            modulus,
            alpha,
            exp_table,
            log_table,
        })
    }

    /// Search for a primitive element and irreducible modulus for GF(pᵏ), trying
    /// candidate monic degree-k polynomials and candidate elements in turn. A pair is
    /// accepted iff the cycle it generates visits every non-zero residue exactly once
    /// — which also certifies the polynomial irreducible (see C4 in the design doc).
    pub fn search(p: u32, k: u32) -> Result<Field> {
        if !is_prime(p) || k < 1 {
            return Err(Error::InvalidField);
        }
        let order = p.checked_pow(k).ok_or(Error::InvalidField)?;

        let mut low_digits = vec![0u32; k as usize];
        loop {
            let mut coefs = low_digits.clone();
            coefs.push(1);

            for alpha in 1..order {
                if let Ok(field) = Field::new(p, k, alpha, coefs.clone()) {
                    return Ok(field);
                }
            }

            if !next_combo(&mut low_digits, p) {
                break;
            }
        }

        Err(Error::InvalidField)
    }

    pub fn p(&self) -> u32 {
        self.p
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn alpha(&self) -> Element {
        Element { field: self, value: self.alpha }
    }

    fn log(&self, value: u32) -> Result<u32> {
        self.log_table[value as usize].ok_or(Error::DivByZero)
    }

    fn exp(&self, power: u32) -> u32 {
        self.exp_table[(power % (self.order - 1)) as usize]
    }
}

fn next_combo(digits: &mut [u32], p: u32) -> bool {
    for d in digits.iter_mut() {
        *d += 1;
        if *d < p {
            return true;
        }
        *d = 0;
    }
    false
}

/// An element of GF(pᵏ), carrying a reference to the field it belongs to (design
/// option (ii) in the design doc: descriptor-reference plus integer value).
#[derive(Copy, Clone, Debug)]
pub struct Element<'f> {
    field: &'f Field,
    value: u32,
}

impl<'f> Element<'f> {
    pub fn from_integer(field: &'f Field, value: u32) -> Self {
        Element { field, value: value % field.order }
    }

    pub fn zero(field: &'f Field) -> Self {
        Element { field, value: 0 }
    }

    pub fn one(field: &'f Field) -> Self {
        Element { field, value: 1 }
    }

    pub fn field(&self) -> &'f Field {
        self.field
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn to_vector(&self) -> Vec<u32> {
        to_vector(self.value, self.field.p, self.field.k)
    }

    /// `self^n`, via the discrete log when non-zero.
    pub fn pow(&self, n: u32) -> Self {
        if self.is_zero() {
            return *self;
        }
        let p = self.field.log(self.value).unwrap();
        Element::from_integer(self.field, self.field.exp((p as u64 * n as u64 % (self.field.order - 1) as u64) as u32))
    }

    pub fn add(&self, rhs: &Self) -> Self {
        let a = self.to_vector();
        let b = rhs.to_vector();
        let sum: Vec<u32> = a.iter().zip(b.iter()).map(|(&x, &y)| (x + y) % self.field.p).collect();
        Element::from_integer(self.field, to_integer(&sum, self.field.p))
    }

    pub fn neg(&self) -> Self {
        let v: Vec<u32> = self
            .to_vector()
            .into_iter()
            .map(|d| if d == 0 { 0 } else { self.field.p - d })
            .collect();
        Element::from_integer(self.field, to_integer(&v, self.field.p))
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Element::zero(self.field);
        }
        let la = self.field.log(self.value).unwrap();
        let lb = self.field.log(rhs.value).unwrap();
        let sum = (la + lb) % (self.field.order - 1);
        Element::from_integer(self.field, self.field.exp(sum))
    }

    pub fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivByZero);
        }
        let la = self.field.log(self.value).unwrap();
        let order1 = self.field.order - 1;
        let neg = (order1 - la % order1) % order1;
        Ok(Element::from_integer(self.field, self.field.exp(neg)))
    }

    pub fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        if self.is_zero() {
            return Ok(Element::zero(self.field));
        }
        Ok(self.mul(&rhs.inv()?))
    }
}

impl<'f> PartialEq for Element<'f> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<'f> FieldElement for Element<'f> {
    fn is_zero(&self) -> bool {
        Element::is_zero(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        Element::add(self, rhs)
    }
    fn sub(&self, rhs: &Self) -> Self {
        Element::sub(self, rhs)
    }
    fn neg(&self) -> Self {
        Element::neg(self)
    }
    fn mul(&self, rhs: &Self) -> Self {
        Element::mul(self, rhs)
    }
    fn inv(&self) -> Result<Self> {
        Element::inv(self)
    }
    fn div(&self, rhs: &Self) -> Result<Self> {
        Element::div(self, rhs)
    }
}

/// Find the minimal polynomial of `beta` over GF(2ᵏ): the smallest binary-coefficient
/// polynomial of degree ≤ k having `beta` as a root. Used to build BCH generators.
pub fn minimal_polynomial<'f>(field: &'f Field, beta: Element<'f>) -> Polynomial<Element<'f>> {
    assert_eq!(field.p, 2, "minimal polynomials over ℤ/pℤ, p != 2, are not needed by this core");

    for deg in 1..=field.k as usize {
        let combos = 1u32 << deg;
        for mask in 0..combos {
            let mut coefs = Vec::with_capacity(deg + 1);
            for b in 0..deg {
                coefs.push(if (mask >> b) & 1 == 1 {
                    Element::one(field)
                } else {
                    Element::zero(field)
                });
            }
            coefs.push(Element::one(field));

            let poly = Polynomial::new(coefs);
            if poly.eval(&beta).is_zero() {
                return poly;
            }
        }
    }

    unreachable!("a minimal polynomial of degree <= k always exists")
}

#[cfg(test)]
mod test {
    use super::*;

    fn gf256() -> Field {
        // x^8 + x^4 + x^3 + x^2 + 1 (0x11d), alpha = 2.
        Field::new(2, 8, 2, vec![1, 0, 1, 1, 1, 0, 0, 0, 1]).unwrap()
    }

    #[test]
    fn test_table_consistency() {
        let f = gf256();
        for n in 1..f.order() {
            let i = f.log(n).unwrap();
            assert_eq!(f.exp(i), n);
        }
        for i in 0..(f.order() - 1) {
            let n = f.exp(i);
            assert_eq!(f.log(n).unwrap(), i);
        }
        assert_eq!(f.exp(0), 1);
        assert_eq!(f.exp(f.order() - 1), f.exp(0));
    }

    #[test]
    fn test_algebraic_laws() {
        let f = gf256();
        let a = Element::from_integer(&f, 37);
        let b = Element::from_integer(&f, 201);

        assert_eq!(a.mul(&b), b.mul(&a));
        assert_eq!(a.mul(&a.inv().unwrap()), Element::one(&f));
        assert_eq!(a.inv().unwrap().inv().unwrap(), a);
        assert_eq!(a.mul(&b).div(&b).unwrap(), a);
        assert_eq!(a.mul(&b).div(&a).unwrap(), b);
        assert!(a.mul(&Element::zero(&f)).is_zero());
        assert_eq!(Element::zero(&f).div(&a).unwrap(), Element::zero(&f));
        assert_eq!(a.sub(&b).add(&b), a);
        assert_eq!(a.neg().add(&b), b.sub(&a));
    }

    #[test]
    fn test_primitive_cycle() {
        let f = gf256();
        let mut seen = std::collections::HashSet::new();
        let mut x = Element::one(&f);
        for _ in 0..f.order() - 1 {
            assert!(seen.insert(x.value()));
            x = x.mul(&f.alpha());
        }
        assert_eq!(x, Element::one(&f));
    }

    #[test]
    fn test_search_finds_fields() {
        for &(p, k) in &[(2u32, 8u32), (3, 5), (5, 3), (7, 3), (11, 2)] {
            let field = Field::search(p, k).expect("search should find a valid field");
            assert_eq!(field.p(), p);
            assert_eq!(field.k(), k);
        }
    }

    #[test]
    fn test_minimal_polynomial_roots() {
        let f = gf256();
        let beta = f.alpha();
        let m = minimal_polynomial(&f, beta);
        assert!(m.eval(&beta).is_zero());
    }
}
