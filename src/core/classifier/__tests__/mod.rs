pub mod map_classifier_test;
