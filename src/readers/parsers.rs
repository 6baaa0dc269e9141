//! Nom parsers for the plain text mesh description
//!
//! Each parser handles a single, already trimmed, line. Inline comments are
//! stripped by the reader before anything gets here.

// internal modules
use crate::mesh::{Axis, MaterialFraction};

// external crates
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, space0, space1, u32 as uint};
use nom::combinator::{all_consuming, map, value};
use nom::multi::{separated_list0, separated_list1};
use nom::number::complete::double;
use nom::sequence::{preceded, separated_pair, terminated, tuple};
use nom::IResult;

/// Single axis designator, case insensitive
fn axis(i: &str) -> IResult<&str, Axis> {
    alt((
        value(Axis::X, tag_no_case("x")),
        value(Axis::Y, tag_no_case("y")),
        value(Axis::Z, tag_no_case("z")),
    ))(i)
}

/// Coarse divisions e.g. `x 0.0 10.0 20.0`
pub fn divisions(i: &str) -> IResult<&str, (Axis, Vec<f64>)> {
    all_consuming(tuple((
        terminated(axis, space1),
        terminated(separated_list1(space1, double), space0),
    )))(i)
}

/// Fine interval counts e.g. `xints 5 10`
pub fn intervals(i: &str) -> IResult<&str, (Axis, Vec<u32>)> {
    all_consuming(tuple((
        terminated(axis, terminated(tag_no_case("ints"), space1)),
        terminated(separated_list1(space1, uint), space0),
    )))(i)
}

/// A single `material:fraction` pair
fn material_fraction(i: &str) -> IResult<&str, MaterialFraction> {
    map(
        separated_pair(
            take_while1(|c: char| !c.is_whitespace() && c != ':'),
            char(':'),
            double,
        ),
        |(name, fraction): (&str, f64)| MaterialFraction::new(name, fraction),
    )(i)
}

/// Cell record e.g. `cell steel:0.4 water:0.6`, or just `cell` for void
pub fn cell(i: &str) -> IResult<&str, Vec<MaterialFraction>> {
    all_consuming(preceded(
        terminated(tag_no_case("cell"), space0),
        terminated(separated_list0(space1, material_fraction), space0),
    ))(i)
}
