pub mod run;
pub mod state;

pub use state::App;
