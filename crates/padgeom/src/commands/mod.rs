// Author: Dustin Pilgrim
// License: MIT

mod print;
mod run;

pub use run::run;
