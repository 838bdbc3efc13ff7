pub(crate) mod color;
pub(crate) mod font;
pub(crate) mod media;
pub(crate) mod text_layout;
