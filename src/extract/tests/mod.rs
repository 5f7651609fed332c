mod direct_links_tests;
