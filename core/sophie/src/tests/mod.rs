mod assembler_tests;
mod report_tests;
