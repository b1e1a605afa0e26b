//! Feature modules, leaf-first: tokenizer → meta_network → dataset

pub mod dataset;
pub mod meta_network;
pub mod tokenizer;
