pub mod canvas;
pub mod compose;
pub mod pipeline;
pub mod text;
pub mod tiler;
