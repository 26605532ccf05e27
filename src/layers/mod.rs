pub mod debug_sink;
