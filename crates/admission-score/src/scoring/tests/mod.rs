mod common;
mod composite;
mod validation;
