mod config_tuning;
mod screens;
mod single_open;
mod swipe_scenarios;
