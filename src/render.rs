pub(crate) mod frame;
pub(crate) mod measure;
pub(crate) mod slide;
