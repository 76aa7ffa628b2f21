mod export_tests;
mod feed_tests;
