pub(crate) mod beam;
pub(crate) mod raster;
pub(crate) mod style;
pub(crate) mod svg;
