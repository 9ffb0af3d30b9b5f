// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[cfg_attr(test, derive(Debug))]
struct Report {
	width: u32,
	numbers: Vec<u32>,
}

fn is_set(number: u32, bit: u32) -> bool {
	(number >> bit) & 1 == 1
}

impl Report {
	fn mask(&self) -> u32 {
		u32::MAX >> (u32::BITS - self.width)
	}

	/// Most common bit per position; ties yield `0`.
	fn gamma_rate(&self) -> u32 {
		(0..self.width).fold(0, |gamma, bit| {
			let ones = self.numbers.iter().filter(|&&n| is_set(n, bit)).count();
			if 2 * ones > self.numbers.len() { gamma | 1 << bit } else { gamma }
		})
	}

	/// Least common bit per position; ties yield `1`.
	fn epsilon_rate(&self) -> u32 {
		!self.gamma_rate() & self.mask()
	}

	fn power_consumption(&self) -> u64 {
		u64::from(self.gamma_rate()) * u64::from(self.epsilon_rate())
	}

	/// Filters the numbers bit by bit, most significant first, keeping those that match the
	/// most (or least) common bit among the numbers still remaining. Ties keep `1` for the most
	/// common bit and `0` for the least common bit. A least common group that would be empty
	/// leaves the numbers unchanged.
	fn rating<const MOST_COMMON: bool>(&self) -> u32 {
		let mut remaining = self.numbers.clone();
		for bit in (0..self.width).rev() {
			if remaining.len() <= 1 { break }

			let (ones, zeros): (Vec<_>, Vec<_>) = remaining.into_iter()
				.partition(|&n| is_set(n, bit));
			remaining = match (MOST_COMMON, zeros.len() > ones.len()) {
				(true, true) => zeros,
				(true, false) => ones,
				(false, true) => if ones.is_empty() { zeros } else { ones },
				(false, false) => if zeros.is_empty() { ones } else { zeros },
			};

			#[cfg(LOGGING)]
			println!("bit {bit}: {} remaining", remaining.len());
		}
		remaining[0]
	}

	fn oxygen_generator_rating(&self) -> u32 {
		self.rating::<true>()
	}

	fn co2_scrubber_rating(&self) -> u32 {
		self.rating::<false>()
	}

	fn life_support_rating(&self) -> u64 {
		u64::from(self.oxygen_generator_rating()) * u64::from(self.co2_scrubber_rating())
	}
}


fn input_report_from_str(s: &str) -> Report {
	s.parse().unwrap()
}

fn input_report() -> Report {
	input_report_from_str(include_str!("day03.txt"))
}


fn part1_impl(input_report: Report) -> u64 {
	input_report.power_consumption()
}

pub(crate) fn part1() -> u64 {
	part1_impl(input_report())
}


fn part2_impl(input_report: Report) -> u64 {
	input_report.life_support_rating()
}

pub(crate) fn part2() -> u64 {
	part2_impl(input_report())
}


mod parsing {
	use std::str::FromStr;
	use super::Report;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ReportError {
		Empty,
		EmptyLine { line: usize },
		TooWide { line: usize, width: usize },
		Width { line: usize, expected: usize, found: usize },
		InvalidDigit { line: usize, column: usize, found: char },
	}

	fn try_number_from_line(l: usize, line: &str) -> Result<u32, ReportError> {
		line.chars().enumerate().try_fold(0_u32, |number, (c, digit)| match digit {
			'0' => Ok(number << 1),
			'1' => Ok(number << 1 | 1),
			found => Err(ReportError::InvalidDigit { line: l + 1, column: c + 1, found }),
		})
	}

	impl FromStr for Report {
		type Err = ReportError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use ReportError::*;
			let mut width = None;
			let numbers = s.lines()
				.enumerate()
				.map(|(l, line)| {
					let found = line.chars().count();
					if found == 0 { return Err(EmptyLine { line: l + 1 }) }
					if found > u32::BITS as usize { return Err(TooWide { line: l + 1, width: found }) }
					let expected = *width.get_or_insert(found);
					if found != expected { return Err(Width { line: l + 1, expected, found }) }
					try_number_from_line(l, line)
				})
				.collect::<Result<Vec<_>, _>>()?;

			let Some(width) = width else { return Err(Empty) };
			Ok(Report { width: width as u32, numbers })
		}
	}
}


#[cfg(test)]
const INPUT: &str = indoc::indoc! { "
	00100
	11110
	10110
	10111
	10101
	01111
	00111
	11100
	10000
	11001
	00010
	01010
" };

#[test]
fn tests() {
	assert_eq!(part1_impl(input_report_from_str(INPUT)), 198);
	assert_eq!(part1(), 3996450);
	assert_eq!(part2_impl(input_report_from_str(INPUT)), 230);
	assert_eq!(part2(), 5096524);
}

#[test]
fn rates_and_ratings() {
	let report = input_report_from_str(INPUT);
	assert_eq!(report.width, 5);
	assert_eq!(report.gamma_rate(), 0b10110);
	assert_eq!(report.epsilon_rate(), 0b01001);
	assert_eq!(report.oxygen_generator_rating(), 0b10111);
	assert_eq!(report.co2_scrubber_rating(), 0b01010);

	let report = input_report();
	assert_eq!(report.gamma_rate(), 1605);
	assert_eq!(report.epsilon_rate(), 2490);
	assert_eq!(report.oxygen_generator_rating(), 1787);
	assert_eq!(report.co2_scrubber_rating(), 2852);
}

#[test]
fn rating_edge_cases() {
	// Tied counts
	let report = input_report_from_str("01\n10");
	assert_eq!(report.gamma_rate(), 0b00);
	assert_eq!(report.epsilon_rate(), 0b11);
	assert_eq!(report.oxygen_generator_rating(), 0b10);
	assert_eq!(report.co2_scrubber_rating(), 0b01);

	// No least common bit in the first position
	let report = input_report_from_str("110\n101\n100");
	assert_eq!(report.co2_scrubber_rating(), 0b110);
	assert_eq!(report.oxygen_generator_rating(), 0b101);

	// Duplicates never narrow down to one
	let report = input_report_from_str("011\n011");
	assert_eq!(report.oxygen_generator_rating(), 0b011);
	assert_eq!(report.co2_scrubber_rating(), 0b011);

	let report = input_report_from_str(&"1".repeat(32));
	assert_eq!(report.gamma_rate(), u32::MAX);
	assert_eq!(report.epsilon_rate(), 0);
}

#[cfg(test)]
use {test_case::test_case, parsing::ReportError};

#[cfg(test)]
#[test_case("" => matches ReportError::Empty; "empty")]
#[test_case("01\n\n10" => matches ReportError::EmptyLine { line: 2 }; "empty line")]
#[test_case("01\n012" => matches ReportError::Width { line: 2, expected: 2, found: 3 }; "long line")]
#[test_case("01\n2" => matches ReportError::Width { line: 2, expected: 2, found: 1 }; "short line")]
#[test_case("01\n0x" => matches ReportError::InvalidDigit { line: 2, column: 2, found: 'x' }; "invalid digit")]
#[test_case("000000000000000000000000000000000" => matches ReportError::TooWide { line: 1, width: 33 }; "too wide")]
fn parsing_error(s: &str) -> ReportError {
	s.parse::<Report>().unwrap_err()
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
