mod controller;
pub mod fsm;

pub use controller::RecipeSession;
pub use fsm::{RequestKind, SessionEvent, SessionMachine, SessionState};
