// Publish Gateway
// Implements: publish request/result types, the Publisher seam, and its HTTP handler.
// All WordPress traffic goes through wordpress_client — no direct reqwest calls here.

pub mod gateway;
pub mod handlers;
