//! Data types shared by the handlers

pub mod models;
