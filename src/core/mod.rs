pub mod concatenator;
pub mod overwrite_guard;
