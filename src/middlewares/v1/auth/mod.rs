pub mod appengine;

pub use appengine::AppEngineUser;
