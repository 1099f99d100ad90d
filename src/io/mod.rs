pub mod reader;
pub mod remote;
pub mod writer;
