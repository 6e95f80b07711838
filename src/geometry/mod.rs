pub(crate) mod anchor;
pub(crate) mod engine;
pub(crate) mod path;
