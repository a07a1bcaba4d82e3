mod ident_tests;
