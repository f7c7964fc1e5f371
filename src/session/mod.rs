pub(crate) mod clock;
pub(crate) mod layout;
pub(crate) mod logo;
