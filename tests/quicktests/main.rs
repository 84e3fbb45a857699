//! Property tests run against the public `parentless::Tree` API.

mod tree;
