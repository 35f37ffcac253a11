pub(crate) mod diagnose;
pub(crate) mod eval;
pub(crate) mod export;
pub(crate) mod fishbone;
pub(crate) mod kpi;
pub(crate) mod quiz;
pub(crate) mod strategy;
pub(crate) mod validate;
