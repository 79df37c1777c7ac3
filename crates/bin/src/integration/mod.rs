//! Integration module for the fetch, reduce and write pipeline.

pub(crate) mod pipeline;
