mod rotate;
mod translate;

pub use rotate::Rotate;
pub use translate::Translate;
