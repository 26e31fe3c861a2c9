pub mod cancers;
pub mod cli;
pub mod ctx;
pub mod io;
pub mod labels;
pub mod math;
pub mod merge;
pub mod pipeline;
pub mod schema;
pub mod summary;
