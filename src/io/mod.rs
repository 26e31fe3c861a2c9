pub mod importance;
pub mod labels;
pub mod report;
pub mod summary;
pub mod survival;
pub mod table;
