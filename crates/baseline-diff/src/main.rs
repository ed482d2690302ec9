// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! baseline-diff entry point.

use baseline_diff::cli::Cli;
use baseline_diff::diagnostic::{init_logging, print_error};
use baseline_diff::run::{exit_codes, run};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli, &mut std::io::stdout()).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
