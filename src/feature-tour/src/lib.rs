pub mod cli;
pub mod clock;
pub mod console;
pub mod defer;
pub mod lessons;
pub mod tour;
