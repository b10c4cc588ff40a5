// Handler module - API endpoint handlers

pub mod career;
