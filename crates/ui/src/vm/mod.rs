mod tracker_vm;

pub use tracker_vm::{PhaseCardVm, TopicRowVm, TrackerVm, map_tracker_vm};
