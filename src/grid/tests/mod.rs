mod lattice_tests;
mod table_tests;
