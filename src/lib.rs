pub mod consts;
pub mod validation;
