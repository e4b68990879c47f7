mod batch;
mod filters;
mod properties;
