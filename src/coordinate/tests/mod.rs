mod region_tests;
mod dms_tests;
