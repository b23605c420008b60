mod file_tests;
mod run_tests;
