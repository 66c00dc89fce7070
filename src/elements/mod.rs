pub mod button;
pub mod object;
