//! Integration tests for the menu planner

mod batch_linkage;
mod config_integration;
mod plan_generation;
mod report_serialization;
mod test_utils;
