mod transform_tests;
mod extent_tests;
