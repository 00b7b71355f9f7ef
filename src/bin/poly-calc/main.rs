mod parser;

use std::io::{BufRead, Write};

use clap::Parser;

use parser::Poly;

/// Interactive sparse polynomial calculator.
///
/// Reads two polynomials in the `n c1 e1 c2 e2 ...` term-list format
/// (term count, then coefficient/exponent pairs in decreasing exponent
/// order) and prints the operands, their sum, difference, product, and
/// the first operand evaluated at a sample point.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read both term lists from this file instead of prompting
    input_file: Option<String>,

    /// Point the first polynomial is evaluated at
    #[arg(short, long, default_value_t = 2.0)]
    eval_point: f64,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (a, b) = match &args.input_file {
        Some(filename) => {
            let contents = std::fs::read_to_string(filename)
                .map_err(|why| format!("Could not read file \"{}\": {}", filename, why))?;
            parser::parse_term_list_pair(&contents)?
        }
        None => {
            let stdin = std::io::stdin();
            let mut lines = stdin.lock().lines();

            let a = prompt_polynomial(&mut lines, "first")?;
            let b = prompt_polynomial(&mut lines, "second")?;
            (a, b)
        }
    };

    println!("\na(x) = {}", a);
    println!("b(x) = {}", b);

    println!("\na + b = {}", a.clone() + b.clone());
    println!("a - b = {}", a.clone() - b.clone());
    println!("a * b = {}", &a * &b);

    let x = args.eval_point;
    println!("\na({}) = {}", x, a.evaluate(x));

    Ok(())
}

fn prompt_polynomial(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    which: &str,
) -> Result<Poly, String> {
    print!("Enter the {} polynomial (n c1 e1 c2 e2 ...): ", which);
    std::io::stdout()
        .flush()
        .map_err(|why| format!("Could not flush stdout: {}", why))?;

    let line = lines
        .next()
        .ok_or_else(|| format!("Missing input for the {} polynomial.", which))?
        .map_err(|why| format!("Could not read input: {}", why))?;

    parser::parse_term_list(&line)
}
