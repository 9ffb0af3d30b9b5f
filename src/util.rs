// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Declares the `dayNN` modules and a `print_days` function that prints both parts of each.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	fn print_days() {
		$( println!("Day {}; part 1: {}, part 2: {}",
			stringify!($day), [<day $day>]::part1(), [<day $day>]::part2()); )*
	}
} } }

pub(crate) use mod_days;
