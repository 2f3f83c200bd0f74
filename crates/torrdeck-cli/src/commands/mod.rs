//! Command handlers grouped by concern.

pub(crate) mod control;
pub(crate) mod show;
