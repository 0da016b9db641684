pub mod batch;
pub mod image_io;

pub use batch::{check_conflicts, collect_inputs, plan_jobs, Job};
pub use image_io::{encode_indexed_png, load_rgb, read_bytes, write_bytes};
