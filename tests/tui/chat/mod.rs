pub mod input_tests;
pub mod render_tests;
pub mod state_tests;
