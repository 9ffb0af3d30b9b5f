// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn depth_increases(measurements: impl Iterator<Item = u32>) -> impl Iterator<Item = bool> {
	use itertools::Itertools as _;
	measurements.tuple_windows().map(|(prev, next)| next > prev)
}

fn window_sums(measurements: impl Iterator<Item = u32>) -> impl Iterator<Item = u32> {
	use itertools::Itertools as _;
	measurements.tuple_windows().map(|(m0, m1, m2)| m0 + m1 + m2)
}


fn input_measurements_from_str(s: &str) -> impl Iterator<Item = u32> + '_ {
	parsing::measurements_from_str(s).map(|r| r.unwrap())
}

fn input_measurements() -> impl Iterator<Item = u32> {
	input_measurements_from_str(include_str!("day01.txt"))
}


fn part1_impl(input_measurements: impl Iterator<Item = u32>) -> usize {
	depth_increases(input_measurements).filter(|&increased| increased).count()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_measurements())
}


fn part2_impl(input_measurements: impl Iterator<Item = u32>) -> usize {
	part1_impl(window_sums(input_measurements))
}

pub(crate) fn part2() -> usize {
	part2_impl(input_measurements())
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MeasurementsError {
		Empty,
		Invalid { line: usize, source: ParseIntError },
	}

	pub(super) fn measurements_from_str(s: &str) -> impl Iterator<Item = Result<u32, MeasurementsError>> + '_ {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(MeasurementsError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MeasurementsError::Invalid { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	assert_eq!(depth_increases(input_measurements_from_str(INPUT)).collect::<Vec<_>>(), [
		true, true, true, false, true, true, true, false, true]);
	assert_eq!(part1_impl(input_measurements_from_str(INPUT)), 7);
	assert_eq!(part1(), 1164);
	assert_eq!(part2_impl(input_measurements_from_str(INPUT)), 5);
	assert_eq!(part2(), 1450);
}

#[test]
fn depth_increases_short() {
	assert_eq!(depth_increases(input_measurements_from_str("986\n1001\n998"))
		.collect::<Vec<_>>(), [true, false]);
	assert_eq!(depth_increases(input_measurements_from_str("986")).count(), 0);
	assert_eq!(part2_impl(input_measurements_from_str("1\n2\n3")), 0);
}

#[test]
fn parsing_errors() {
	use parsing::{measurements_from_str, MeasurementsError};
	assert!(matches!(measurements_from_str("").next(), Some(Err(MeasurementsError::Empty))));
	assert!(matches!(measurements_from_str("1\n-2").nth(1),
		Some(Err(MeasurementsError::Invalid { line: 2, .. }))));
	assert!(matches!(measurements_from_str("12a").next(),
		Some(Err(MeasurementsError::Invalid { line: 1, .. }))));
}


#[cfg(BENCHING)]
mod bench {
	extern crate test;

	#[bench]
	fn part1(b: &mut test::Bencher) {
		b.iter(super::part1)
	}

	#[bench]
	fn part2(b: &mut test::Bencher) {
		b.iter(super::part2)
	}
}
