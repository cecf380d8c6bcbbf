mod builder;
mod defaults;
mod file;

pub use builder::build_report_header;
