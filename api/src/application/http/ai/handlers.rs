pub mod assist;
pub mod method_not_allowed;
