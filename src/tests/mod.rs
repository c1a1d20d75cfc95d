mod paginate_tests;
