use super::ordered_ops;
use itertools::Itertools;
use num_traits::{One, Zero};
use std::fmt::Write;

pub trait Coefficient:
    core::fmt::Debug
    + PartialEq
    + Clone
    + std::ops::AddAssign
    + std::ops::SubAssign
    + num_traits::Zero
    + num_traits::One
{
}

pub trait Exponent:
    core::fmt::Debug
    + Eq
    + Ord
    + Clone
    + std::ops::AddAssign
    + num_traits::Unsigned
    + num_traits::Zero
    + num_traits::One
{
}

impl Coefficient for i32 {}
impl Exponent for u32 {}

/// A coefficient paired with the power of x it multiplies.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Term<C, P> {
    coefficient: C,
    exponent: P,
}

impl<C, P> Term<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    pub fn new(coefficient: C, exponent: P) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }

    pub fn new_constant(coefficient: C) -> Self {
        Term {
            coefficient,
            exponent: P::zero(),
        }
    }

    pub fn get_coefficient(&self) -> &C {
        &self.coefficient
    }

    pub fn get_exponent(&self) -> &P {
        &self.exponent
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Polynomial<C, P> {
    // Terms are sorted in decreasing order of exponent, and no term
    // has a zero coefficient. An empty vector is the zero polynomial.
    terms: Vec<Term<C, P>>,
}

impl<C, P> Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    /// Bulk-loads a polynomial, taking the vector as its entire new
    /// content.
    ///
    /// Terms are stored exactly as given: nothing here re-sorts,
    /// merges duplicate exponents, or drops zero coefficients. Callers
    /// must supply strictly decreasing exponents and non-zero
    /// coefficients, or every operation downstream is off the rails.
    pub fn from_terms(terms: Vec<Term<C, P>>) -> Self {
        Polynomial { terms }
    }

    pub fn new_constant(value: C) -> Self {
        Polynomial {
            terms: if value.is_zero() {
                // No terms means zero implicitly
                Vec::new()
            } else {
                vec![Term::new_constant(value)]
            },
        }
    }

    pub fn new_monomial_term(coefficient: C, exponent: P) -> Self {
        Polynomial {
            terms: if coefficient.is_zero() {
                Vec::new()
            } else {
                vec![Term::new(coefficient, exponent)]
            },
        }
    }

    pub fn get_terms(&self) -> &[Term<C, P>] {
        &self.terms[..]
    }

    pub fn is_constant(&self) -> bool {
        match self.terms.get(0) {
            None => true,
            Some(t) => t.exponent.is_zero(),
        }
    }

    /// Exponent of the leading term. `None` for the zero polynomial.
    pub fn degree(&self) -> Option<&P> {
        self.terms.get(0).map(|t| &t.exponent)
    }

    fn sum_terms(
        a: impl Iterator<Item = Term<C, P>>,
        b: impl Iterator<Item = Term<C, P>>,
    ) -> Vec<Term<C, P>> {
        ordered_ops::sum(
            a,
            b,
            |x, y| y.exponent.cmp(&x.exponent),
            |mut x, y| {
                x.coefficient += y.coefficient;
                if x.coefficient.is_zero() {
                    None
                } else {
                    Some(x)
                }
            },
        )
    }
}

impl<C, P> Polynomial<C, P>
where
    C: Coefficient + Into<f64>,
    P: Exponent + Into<f64>,
{
    /// Evaluates the polynomial at `x`, with `f64` power semantics:
    /// `x^0 == 1` for every `x`, zero included.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| {
                let coefficient: f64 = t.coefficient.clone().into();
                coefficient * x.powf(t.exponent.clone().into())
            })
            .sum()
    }
}

impl<C, P> num_traits::Zero for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    fn zero() -> Self {
        Polynomial { terms: Vec::new() }
    }

    fn is_zero(&self) -> bool {
        // For safety, test the non-normalized case:
        for t in self.terms.iter() {
            if !t.coefficient.is_zero() {
                return false;
            }
        }

        true
    }
}

impl<C, P> std::ops::Add for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn add(self, rhs: Polynomial<C, P>) -> Self::Output {
        Self {
            terms: Self::sum_terms(self.terms.into_iter(), rhs.terms.into_iter()),
        }
    }
}

impl<C, P> std::ops::Add<C> for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn add(mut self, rhs: C) -> Self::Output {
        if rhs.is_zero() {
            return self;
        }

        match self.terms.last_mut() {
            Some(last) if last.exponent.is_zero() => {
                last.coefficient += rhs;
                if last.coefficient.is_zero() {
                    self.terms.pop();
                }
            }
            _ => self.terms.push(Term::new_constant(rhs)),
        }

        self
    }
}

impl<C, P> std::ops::Neg for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Self;

    fn neg(mut self) -> Self {
        for term in self.terms.iter_mut() {
            let tmp = std::mem::replace(&mut term.coefficient, C::zero());
            term.coefficient -= tmp;
        }
        self
    }
}

impl<C, P> std::ops::Sub for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn sub(self, rhs: Polynomial<C, P>) -> Self::Output {
        self + (-rhs)
    }
}

impl<C, P> std::ops::Sub<C> for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn sub(self, rhs: C) -> Self::Output {
        let mut neg = C::zero();
        neg -= rhs;
        self + neg
    }
}

impl<C, P> std::ops::Mul for &Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn mul(self, rhs: &Polynomial<C, P>) -> Self::Output {
        let mut result = Polynomial::zero();

        for a in self.terms.iter() {
            // Distributing a single left term over rhs keeps the
            // product list in decreasing exponent order, so it merges
            // like any well-formed polynomial.
            let distributed: Vec<_> = rhs
                .terms
                .iter()
                .filter_map(|b| {
                    let mut exponent = a.exponent.clone();
                    exponent += b.exponent.clone();

                    let coefficient = a.coefficient.clone() * b.coefficient.clone();
                    if coefficient.is_zero() {
                        None
                    } else {
                        Some(Term {
                            coefficient,
                            exponent,
                        })
                    }
                })
                .collect();

            result.terms =
                Polynomial::sum_terms(result.terms.into_iter(), distributed.into_iter());
        }

        result
    }
}

impl<C, P> std::ops::Mul for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn mul(self, rhs: Polynomial<C, P>) -> Self::Output {
        &self * &rhs
    }
}

impl<C, P> std::ops::Mul<C> for &Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn mul(self, rhs: C) -> Self::Output {
        self * &Polynomial::new_constant(rhs)
    }
}

impl<C, P> num_traits::pow::Pow<u32> for Polynomial<C, P>
where
    C: Coefficient,
    P: Exponent,
{
    type Output = Polynomial<C, P>;

    fn pow(mut self, mut rhs: u32) -> Self {
        let mut ret = Polynomial::new_constant(C::one());

        while rhs != 0 {
            if rhs & 1 == 1 {
                ret = ret * self.clone();
            }

            rhs >>= 1;
            if rhs != 0 {
                self = self.clone() * self;
            }
        }

        ret
    }
}

impl<C, P> std::fmt::Display for Term<C, P>
where
    C: Coefficient + std::fmt::Display,
    P: Exponent + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.exponent.is_zero() {
            write!(f, "{}", self.coefficient)
        } else if self.exponent.is_one() {
            write!(f, "{}x", self.coefficient)
        } else {
            write!(f, "{}x^{}", self.coefficient, self.exponent)
        }
    }
}

impl<C, P> std::fmt::Display for Polynomial<C, P>
where
    C: Coefficient + std::fmt::Display,
    P: Exponent + std::fmt::Display,
{
    /// Renders terms in storage order, joined by `" + "`. A negative
    /// coefficient carries its own sign in the numeral, so a
    /// difference shows as e.g. `2x^3 + -4x + 5`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return f.write_char('0');
        }

        write!(f, "{}", self.terms.iter().format(" + "))
    }
}
