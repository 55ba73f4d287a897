pub mod marker_look;
pub mod points;
