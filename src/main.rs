//! # OMLogger Demo
//!
//! Walks through every level, display combination and level filter, writing
//! to the console and to `logfile.txt` in the working directory.
//!
//! Settings from the platform config file are applied first (see
//! [`LoggerConfig::load`]); the demo then overrides them step by step.

use omlogger::constants::DEFAULT_LOG_FILE_NAME;
use omlogger::{
    om_assert, om_critical, om_debug, om_error, om_info, om_warning, DisplaySettings,
    LevelFilter, LoggerConfig, Profile, Tag,
};
use std::time::Instant;

const PERFORMANCE_TEST_ITERATIONS: u32 = 2;

fn performance_test() -> f64 {
    let start = Instant::now();
    for i in 0..PERFORMANCE_TEST_ITERATIONS {
        om_debug!("Iterations: {}", i);
    }
    start.elapsed().as_secs_f64()
}

fn every_level() {
    om_info!("info");
    om_warning!("warning");
    om_error!("error");
    om_critical!("critical");
}

fn main() {
    omlogger::init(&LoggerConfig::load());
    omlogger::init_tracing_bridge();

    // a failure here is already reported on the console
    let _ = omlogger::open_file(DEFAULT_LOG_FILE_NAME);
    let elapsed = performance_test();

    om_debug!("debug");
    every_level();

    omlogger::set_display_settings(DisplaySettings::SHOW_DATE);
    om_info!("only date");
    omlogger::set_display_settings(DisplaySettings::SHOW_DATE | DisplaySettings::SHOW_FILE_INFO);
    om_info!("date + file info");
    omlogger::set_display_settings(DisplaySettings::SHOW_DATE | DisplaySettings::SHOW_THREAD);
    om_info!("date + thread");
    omlogger::set_display_settings(DisplaySettings::NONE);
    om_info!("none");
    omlogger::set_display_settings(DisplaySettings::SHOW_ALL);
    om_info!("all");

    om_info!(tag: Tag::Core, "tagged with core");
    om_warning!(tag: Tag::Physics, "tagged with physics");
    tracing::info!(tag = "network", peers = 3, "event from tracing");

    omlogger::set_level_filter(LevelFilter::WARNING | LevelFilter::INFO);
    every_level();
    omlogger::set_level_filter(LevelFilter::NONE);
    every_level();
    omlogger::set_level_filter(LevelFilter::ALL);
    every_level();

    omlogger::apply_profile(Profile::Quiet);
    every_level();
    omlogger::apply_profile(Profile::Full);

    om_info!(
        "Execution time for {} iterations: {:.6} seconds",
        PERFORMANCE_TEST_ITERATIONS,
        elapsed
    );

    om_assert!(1 + 1 == 2, "big brain");

    omlogger::close_file();
    omlogger::shutdown();
}
