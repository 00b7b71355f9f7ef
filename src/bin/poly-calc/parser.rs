use std::{fmt::Display, str::FromStr};

use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use polynomial_algebra::polynomial::{Polynomial, Term};

#[derive(Parser)]
#[grammar = "bin/poly-calc/term_list.pest"]
struct TermListParser;

pub type Poly = Polynomial<i32, u32>;

/// Parses one polynomial in the `n c1 e1 c2 e2 ...` format, rejecting
/// anything left over after the declared term count.
pub fn parse_term_list(input: &str) -> Result<Poly, String> {
    let mut integers = integers(input)?;
    let polynomial = parse_polynomial(&mut integers)?;
    reject_trailing(integers)?;

    Ok(polynomial)
}

/// Parses two polynomials back to back from the same token stream,
/// the layout of a non-interactive input file.
pub fn parse_term_list_pair(input: &str) -> Result<(Poly, Poly), String> {
    let mut integers = integers(input)?;
    let a = parse_polynomial(&mut integers)?;
    let b = parse_polynomial(&mut integers)?;
    reject_trailing(integers)?;

    Ok((a, b))
}

fn integers(input: &str) -> Result<impl Iterator<Item = Pair<'_, Rule>>, String> {
    let list = TermListParser::parse(Rule::term_list, input)
        .map_err(|err| format!("Parsing failed: {}", err))?
        .next()
        .unwrap();

    Ok(list
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::integer))
}

fn parse_polynomial<'a>(
    integers: &mut impl Iterator<Item = Pair<'a, Rule>>,
) -> Result<Poly, String> {
    let count: usize = next_integer(integers, "term count")?;

    let mut terms = Vec::with_capacity(count);
    for i in 0..count {
        let coefficient = next_integer(integers, &format!("coefficient of term {}", i))?;
        let exponent = next_integer(integers, &format!("exponent of term {}", i))?;
        terms.push(Term::new(coefficient, exponent));
    }

    // Terms are loaded exactly as written; the decreasing-exponent
    // convention of the format is not enforced here.
    Ok(Poly::from_terms(terms))
}

fn next_integer<'a, T>(
    integers: &mut impl Iterator<Item = Pair<'a, Rule>>,
    what: &str,
) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let pair = integers
        .next()
        .ok_or_else(|| format!("Missing {}.", what))?;

    pair.as_str()
        .parse()
        .map_err(|err| format!("Failed to parse {} \"{}\": {}", what, pair.as_str(), err))
}

fn reject_trailing<'a>(mut integers: impl Iterator<Item = Pair<'a, Rule>>) -> Result<(), String> {
    match integers.next() {
        Some(extra) => Err(format!(
            "Unexpected input after the last term: \"{}\".",
            extra.as_str()
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_term_list() {
        let p = parse_term_list("3  2 3  -4 1  5 0").unwrap();

        assert_eq!(p.to_string(), "2x^3 + -4x + 5");
    }

    #[test]
    fn parses_across_lines() {
        let p = parse_term_list("2\n3 2\n5 0\n").unwrap();

        assert_eq!(p.to_string(), "3x^2 + 5");
    }

    #[test]
    fn parses_empty_polynomial() {
        let p = parse_term_list("0").unwrap();

        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn parses_pair() {
        let (a, b) = parse_term_list_pair("2 3 2 5 0  2 2 2 -5 0").unwrap();

        assert_eq!(a.to_string(), "3x^2 + 5");
        assert_eq!(b.to_string(), "2x^2 + -5");
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(parse_term_list("2 1 2").is_err());
        assert!(parse_term_list("").is_err());
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert!(parse_term_list("1 a 2").is_err());
    }

    #[test]
    fn rejects_negative_exponent() {
        assert!(parse_term_list("1 4 -2").is_err());
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(parse_term_list("1 4 2 9").is_err());
    }
}
