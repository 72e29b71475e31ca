mod resolver_tests;
mod naming_tests;
