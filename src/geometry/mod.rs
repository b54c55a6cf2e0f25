pub mod hit_testing;

pub use hit_testing::{
    LINE_HIT_TOLERANCE, distance, hit_test, point_in_rectangle, point_on_segment, shape_contains,
};
