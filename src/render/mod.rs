pub(crate) mod camera;
pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod scene;
