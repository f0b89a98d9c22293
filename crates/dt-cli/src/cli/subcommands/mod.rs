pub mod render;

pub use render::RenderCommands;
