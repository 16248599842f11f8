mod page_tests;
mod suppression_tests;
