pub mod generation_model;
