// Shell module
//
// Session:  tracked directories and loop flags
// Rules:    ordered command classification table
// Resolver: runs the rule table and performs the chosen action

mod action;
mod resolver;
mod rules;
mod session;

pub use action::{Action, ResolveError};
pub use resolver::Resolver;
pub use rules::rule_names;
pub use session::{Session, SessionError};
