pub mod grid_model_test;
