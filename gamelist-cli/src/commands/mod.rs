pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod filter;
pub(crate) mod fix_clones;
pub(crate) mod info;
pub(crate) mod remove;
pub(crate) mod show;
