pub(crate) mod beam;
pub(crate) mod frame;
