// Composition root for the student marks service.
//
// Responsibilities
// - Read config from environment.
// - Load the record store from its snapshot.
// - Expose the HTTP router (marks routes plus static assets).

pub mod config;
pub mod http;
pub mod logging;
pub mod state;
