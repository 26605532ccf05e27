pub mod debug;

pub use debug::debug_handler;
