pub mod state;


pub use state::{FormAction, FormState};
