// Copyright (c) 2022 Bastiaan Marinus van de Weerd

#![cfg_attr(BENCHING, feature(test))]

mod util;
util::mod_days![01, 03, 05];

fn main() {
	print_days();
}
