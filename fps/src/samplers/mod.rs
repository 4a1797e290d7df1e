pub mod candidate_grid;
pub mod rotation_distr;
pub mod uniform_rect_sampler;
