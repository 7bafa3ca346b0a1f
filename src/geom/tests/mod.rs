mod test_reconstruct_basic;
mod test_spline_basic;
