mod registry_test;
