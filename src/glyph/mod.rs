pub(crate) mod entity;
pub(crate) mod window;
