// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Point {
	x: i32,
	y: i32,
}

/// A vent line from `a` to `b`, endpoints in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
	a: Point,
	b: Point,
}

#[allow(dead_code)]
#[derive(Debug)]
enum TraceError {
	Unsupported(Segment),
}

impl Segment {
	fn is_vertical(&self) -> bool {
		self.a.x == self.b.x
	}

	fn is_horizontal(&self) -> bool {
		self.a.y == self.b.y
	}

	// A single point is both
	fn is_axis_aligned(&self) -> bool {
		self.is_vertical() || self.is_horizontal()
	}

	fn is_diagonal(&self) -> bool {
		self.a.x.abs_diff(self.b.x) == self.a.y.abs_diff(self.b.y)
	}

	/// Every grid point covered by the segment, both endpoints included.
	///
	/// Horizontal and vertical segments are traced in ascending order of the varying
	/// coordinate. With `DIAGONALS`, 45° segments are traced from `a` toward `b`; any other
	/// slope is unsupported.
	fn trace<const DIAGONALS: bool>(&self) -> Result<impl Iterator<Item = Point>, TraceError> {
		let [from, to] = if self.is_axis_aligned() {
			if self.a <= self.b { [self.a, self.b] } else { [self.b, self.a] }
		} else if DIAGONALS && self.is_diagonal() {
			[self.a, self.b]
		} else {
			return Err(TraceError::Unsupported(*self))
		};

		let step = [to.x.cmp(&from.x) as i32, to.y.cmp(&from.y) as i32];
		let len = from.x.abs_diff(to.x).max(from.y.abs_diff(to.y)) as i32;
		Ok((0..=len).map(move |i| Point { x: from.x + i * step[0], y: from.y + i * step[1] }))
	}
}


fn axis_aligned(segments: impl Iterator<Item = Segment>) -> impl Iterator<Item = Segment> {
	segments.filter(Segment::is_axis_aligned)
}

fn count_overlapping_points<const DIAGONALS: bool>(
	segments: impl Iterator<Item = Segment>,
) -> Result<usize, TraceError> {
	use {std::collections::HashMap, either::Either};

	let segments = if DIAGONALS { Either::Left(segments) }
		else { Either::Right(axis_aligned(segments)) };

	let mut coverage = HashMap::<Point, u8>::new();
	for segment in segments {
		for point in segment.trace::<DIAGONALS>()? {
			let count = coverage.entry(point).or_default();
			*count = count.saturating_add(1);
		}
	}

	#[cfg(LOGGING)]
	println!("{} points covered", coverage.len());

	Ok(coverage.values().filter(|&&count| count >= 2).count())
}


fn input_segments_from_str(s: &str) -> impl Iterator<Item = Segment> + '_ {
	parsing::segments_from_str(s).map(|r| r.unwrap())
}

fn input_segments() -> impl Iterator<Item = Segment> {
	input_segments_from_str(include_str!("day05.txt"))
}


fn part1_impl(input_segments: impl Iterator<Item = Segment>) -> usize {
	count_overlapping_points::<false>(input_segments).unwrap()
}

pub(crate) fn part1() -> usize {
	part1_impl(input_segments())
}


fn part2_impl(input_segments: impl Iterator<Item = Segment>) -> usize {
	count_overlapping_points::<true>(input_segments).unwrap()
}

pub(crate) fn part2() -> usize {
	part2_impl(input_segments())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Point, Segment};

	#[derive(Debug)]
	pub(super) enum PointError {
		Format { column: usize },
		X(ParseIntError),
		Y(ParseIntError),
	}

	impl FromStr for Point {
		type Err = PointError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (x, y) = s.split_once(',')
				.ok_or(PointError::Format { column: s.len() + 1 })?;
			let x = x.parse().map_err(PointError::X)?;
			let y = y.parse().map_err(PointError::Y)?;
			Ok(Point { x, y })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SegmentError {
		Format { column: usize },
		A(PointError),
		B(PointError),
	}

	impl FromStr for Segment {
		type Err = SegmentError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (a, b) = s.split_once(" -> ").ok_or_else(|| SegmentError::Format {
				column: s.find(' ').unwrap_or(s.len()) + 1 })?;
			let a = a.parse().map_err(SegmentError::A)?;
			let b = b.parse().map_err(|e| SegmentError::B(match e {
				PointError::Format { column } =>
					PointError::Format { column: s.len() - b.len() + column },
				_ => e,
			}))?;
			Ok(Segment { a, b })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SegmentsError {
		Empty,
		Segment { line: usize, source: SegmentError },
	}

	pub(super) fn segments_from_str(s: &str) -> impl Iterator<Item = Result<Segment, SegmentsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(SegmentsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| SegmentsError::Segment { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod fmt {
	use super::{Point, Segment};

	impl std::fmt::Display for Point {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "{},{}", self.x, self.y)
		}
	}

	impl std::fmt::Display for Segment {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "{} -> {}", self.a, self.b)
		}
	}
}


#[cfg(test)]
const INPUT: &str = indoc::indoc! { "
	0,9 -> 5,9
	8,0 -> 0,8
	9,4 -> 3,4
	2,2 -> 2,1
	7,0 -> 7,4
	6,4 -> 2,0
	0,9 -> 2,9
	3,4 -> 1,4
	0,0 -> 8,8
	5,5 -> 8,2
" };

/// Counts overlap points as the union of the intersections of every pair of distinct segments.
#[cfg(test)]
fn count_overlapping_points_pairwise<const DIAGONALS: bool>(
	segments: impl Iterator<Item = Segment>,
) -> usize {
	use {std::collections::HashSet, rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _}};

	let traced = segments
		.filter(|segment| DIAGONALS || segment.is_axis_aligned())
		.map(|segment| segment.trace::<DIAGONALS>().unwrap().collect::<HashSet<_>>())
		.collect::<Vec<_>>();

	let traced = &traced;
	(0..traced.len())
		.into_par_iter()
		.flat_map_iter(move |i| (i + 1..traced.len())
			.flat_map(move |j| traced[i].intersection(&traced[j]).copied()))
		.collect::<HashSet<_>>()
		.len()
}

#[test]
fn tests() {
	assert_eq!(part1_impl(input_segments_from_str(INPUT)), 5);
	assert_eq!(part1(), 8411);
	assert_eq!(part2_impl(input_segments_from_str(INPUT)), 12);
	assert_eq!(part2(), 11062);
}

#[test]
fn pairwise_cross_check() {
	assert_eq!(count_overlapping_points_pairwise::<false>(input_segments_from_str(INPUT)), 5);
	assert_eq!(count_overlapping_points_pairwise::<true>(input_segments_from_str(INPUT)), 12);
	assert_eq!(count_overlapping_points_pairwise::<false>(input_segments()), part1());
	assert_eq!(count_overlapping_points_pairwise::<true>(input_segments()), part2());

	// Distinct segments covering the same points still overlap
	const SAME: &str = "1,1 -> 1,3\n1,3 -> 1,1";
	assert_eq!(count_overlapping_points_pairwise::<false>(input_segments_from_str(SAME)), 3);
	assert_eq!(part1_impl(input_segments_from_str(SAME)), 3);
}

#[test]
fn idempotence() {
	let segments = input_segments_from_str(INPUT).collect::<Vec<_>>();
	assert_eq!(part1_impl(segments.iter().copied()), part1_impl(segments.iter().copied()));
	assert_eq!(part2_impl(segments.iter().copied()), part2_impl(segments.iter().copied()));
}

#[test]
fn parsing_round_trip() {
	let segment = "0,9 -> 5,9".parse::<Segment>().unwrap();
	assert_eq!(segment, Segment { a: Point { x: 0, y: 9 }, b: Point { x: 5, y: 9 } });
	for line in INPUT.lines() {
		assert_eq!(line.parse::<Segment>().unwrap().to_string(), line);
	}
	assert_eq!("-3,7 -> 4,-1".parse::<Segment>().unwrap(),
		Segment { a: Point { x: -3, y: 7 }, b: Point { x: 4, y: -1 } });
}

#[cfg(test)]
use {test_case::test_case, parsing::{PointError, SegmentError, SegmentsError}};

#[cfg(test)]
#[test_case("0,9 -> 5" => matches SegmentError::B(PointError::Format { column: 9 }); "missing coordinate")]
#[test_case("0,9 5,9" => matches SegmentError::Format { column: 4 }; "missing arrow")]
#[test_case("0,9->5,9" => matches SegmentError::Format { column: 9 }; "arrow without spaces")]
#[test_case("a,9 -> 5,9" => matches SegmentError::A(PointError::X(_)); "invalid x")]
#[test_case("0,9 -> 5,b" => matches SegmentError::B(PointError::Y(_)); "invalid y")]
#[test_case("0,9,1 -> 5,9" => matches SegmentError::A(PointError::Y(_)); "too many coordinates")]
#[test_case("0,9 -> 5,9 -> 6,9" => matches SegmentError::B(PointError::Y(_)); "trailing segment")]
fn parsing_error(s: &str) -> SegmentError {
	s.parse::<Segment>().unwrap_err()
}

#[test]
fn parsing_errors_by_line() {
	use parsing::segments_from_str;
	assert!(matches!(segments_from_str("").next(), Some(Err(SegmentsError::Empty))));
	assert!(matches!(segments_from_str("0,9 -> 5,9\n0,9 -> 5").nth(1),
		Some(Err(SegmentsError::Segment { line: 2, .. }))));
}

#[test]
fn orientation_filter() {
	let kept = axis_aligned(input_segments_from_str(INPUT))
		.map(|segment| segment.to_string())
		.collect::<Vec<_>>();
	assert_eq!(kept, ["0,9 -> 5,9", "9,4 -> 3,4", "2,2 -> 2,1", "7,0 -> 7,4", "0,9 -> 2,9", "3,4 -> 1,4"]);

	let point = "4,4 -> 4,4".parse::<Segment>().unwrap();
	assert!(point.is_horizontal() && point.is_vertical());
	assert_eq!(axis_aligned(std::iter::once(point)).count(), 1);
}

#[cfg(test)]
#[test_case("0,9 -> 5,9", &[[0, 9], [1, 9], [2, 9], [3, 9], [4, 9], [5, 9]]; "horizontal")]
#[test_case("9,4 -> 3,4", &[[3, 4], [4, 4], [5, 4], [6, 4], [7, 4], [8, 4], [9, 4]]; "horizontal reversed")]
#[test_case("7,0 -> 7,4", &[[7, 0], [7, 1], [7, 2], [7, 3], [7, 4]]; "vertical")]
#[test_case("2,2 -> 2,1", &[[2, 1], [2, 2]]; "vertical reversed")]
#[test_case("3,3 -> 3,3", &[[3, 3]]; "single point")]
fn trace_axis_aligned(s: &str, expected: &[[i32; 2]]) {
	let segment = s.parse::<Segment>().unwrap();
	let reversed = Segment { a: segment.b, b: segment.a };
	let expected = expected.iter().map(|&[x, y]| Point { x, y }).collect::<Vec<_>>();

	let manhattan = segment.a.x.abs_diff(segment.b.x) + segment.a.y.abs_diff(segment.b.y);
	assert_eq!(expected.len(), manhattan as usize + 1);
	assert_eq!(segment.trace::<false>().unwrap().collect::<Vec<_>>(), expected);
	assert_eq!(reversed.trace::<false>().unwrap().collect::<Vec<_>>(), expected);
	assert_eq!(segment.trace::<true>().unwrap().collect::<Vec<_>>(), expected);
	assert!(expected.contains(&segment.a) && expected.contains(&segment.b));
}

#[test]
fn trace_diagonal() {
	let segment = "8,0 -> 0,8".parse::<Segment>().unwrap();
	assert!(matches!(segment.trace::<false>(), Err(TraceError::Unsupported(s)) if s == segment));
	assert_eq!(segment.trace::<true>().unwrap().collect::<Vec<_>>(),
		(0..=8).map(|i| Point { x: 8 - i, y: i }).collect::<Vec<_>>());

	let segment = "5,5 -> 8,2".parse::<Segment>().unwrap();
	assert_eq!(segment.trace::<true>().unwrap().collect::<Vec<_>>(), [
		Point { x: 5, y: 5 }, Point { x: 6, y: 4 }, Point { x: 7, y: 3 }, Point { x: 8, y: 2 }]);

	let segment = "0,0 -> 2,1".parse::<Segment>().unwrap();
	assert!(matches!(segment.trace::<true>(), Err(TraceError::Unsupported(_))));
	assert!(count_overlapping_points::<true>(std::iter::once(segment)).is_err());
	assert_eq!(count_overlapping_points::<false>(std::iter::once(segment)).unwrap(), 0);
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
