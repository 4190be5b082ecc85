pub mod point_sets;
