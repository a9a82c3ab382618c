mod tracker;

pub use tracker::{TrackerBoard, TrackerIntent, TrackerView};
