//! Various unsorted geometrical and logical operators.

pub use self::point_in_poly2d::{point_in_poly2d, point_in_region2d};
pub use self::point_in_triangle::{
    corner_direction, distance_to_segment2d, point_touches_triangle2d, Orientation,
};
pub use self::sorted_pair::SortedPair;

/// A hash-map using the default hasher of [`hashbrown`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

mod point_in_poly2d;
mod point_in_triangle;
mod sorted_pair;
