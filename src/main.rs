// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: CLI parsing, logging, localization, app launch.

mod config;
mod constant;
mod domain;
mod i18n;
mod sensors;
mod ui;

use clap::Parser;
use cosmic::iced::Size;

use ui::{Flags, RosaApp};

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "rosa", version, about = "A compass display for the COSMIC desktop")]
pub struct Args {
    /// Seed heading in degrees, shown until the first sensor event.
    #[arg(long)]
    pub heading: Option<f64>,
}

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    i18n::init();

    let args = Args::parse();

    let settings = cosmic::app::Settings::default().size(Size::new(420.0, 640.0));
    cosmic::app::run::<RosaApp>(settings, Flags::Args(args))
}
