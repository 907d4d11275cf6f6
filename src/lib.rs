use std::{error, fmt::Display};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    ZeroCandidate,
    SumOverflow(u64),
    CandidateOverflow,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroCandidate => write!(
                f,
                "Can't compute the proper divisor sum of 0, expect a positive integer."
            ),
            Error::SumOverflow(n) => {
                write!(f, "Proper divisor sum of {} overflows the accumulator.", n)
            }
            Error::CandidateOverflow => write!(
                f,
                "Ran out of representable candidates before finding enough perfect numbers."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub count: Option<usize>,
}

pub fn proper_divisor_sum(n: u64) -> Result<u64, Error> {
    if n == 0 {
        return Err(Error::ZeroCandidate);
    }

    let mut sum = 0u64;
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            if i != n {
                sum = sum.checked_add(i).ok_or(Error::SumOverflow(n))?;
            }

            // n / i == n only at i == 1, which would count n itself.
            let pair = n / i;
            if pair != i && pair != n {
                sum = sum.checked_add(pair).ok_or(Error::SumOverflow(n))?;
            }
        }

        i += 1;
    }

    Ok(sum)
}

#[derive(Debug, Clone)]
pub struct PerfectNumbers {
    next_candidate: u64,
}

impl PerfectNumbers {
    pub fn new() -> Self {
        Self { next_candidate: 1 }
    }
}

impl Iterator for PerfectNumbers {
    type Item = Result<u64, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.next_candidate;
            self.next_candidate = match candidate.checked_add(1) {
                Some(n) => n,
                None => return Some(Err(Error::CandidateOverflow)),
            };

            match proper_divisor_sum(candidate) {
                Ok(sum) if sum == candidate => return Some(Ok(candidate)),
                Ok(_) => (),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

pub fn first_perfect_numbers(count: usize) -> Result<Vec<u64>, Error> {
    PerfectNumbers::new().take(count).collect()
}

#[test]
fn test_proper_divisor_sum_matches_brute_force() {
    for n in 1..=10000u64 {
        let brute_force_sum = (1..n).filter(|d| n % d == 0).sum::<u64>();
        assert!(proper_divisor_sum(n).unwrap() == brute_force_sum);
    }
}

#[test]
fn test_proper_divisor_sum_of_one_is_zero() {
    assert!(proper_divisor_sum(1).unwrap() == 0);
}

#[test]
fn test_proper_divisor_sum_known_values() {
    assert!(proper_divisor_sum(6).unwrap() == 6);
    assert!(proper_divisor_sum(28).unwrap() == 28);
    assert!(proper_divisor_sum(12).unwrap() == 16);
}

#[test]
fn test_proper_divisor_sum_rejects_zero() {
    assert!(matches!(proper_divisor_sum(0), Err(Error::ZeroCandidate)));
}

#[test]
fn test_proper_divisor_sum_repeated_calls_agree() {
    let first = proper_divisor_sum(496).unwrap();
    let second = proper_divisor_sum(496).unwrap();
    assert!(first == second);
}

#[test]
fn test_first_four_perfect_numbers() {
    let numbers = first_perfect_numbers(4).unwrap();
    assert!(numbers == vec![6, 28, 496, 8128]);
}

#[test]
fn test_cloned_generator_restarts_search() {
    let generator = PerfectNumbers::new();
    let first_run = generator
        .clone()
        .take(3)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let second_run = generator.take(3).collect::<Result<Vec<_>, _>>().unwrap();
    assert!(first_run == second_run);
}
