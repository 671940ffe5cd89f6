pub mod errors;
pub mod db;
pub mod feedback;
pub mod analyzed_feedback;

#[cfg(test)]
mod tests;
