//! Integration tests for Discount Scout

mod discount_tests;
