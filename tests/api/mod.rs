//! REST API endpoint tests

mod stats_tests;
